//! Console output formatter for ranking results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use whalley_application::{CandidateSet, HealthReport, HealthTarget, IntakePreview, RankingResult};
use whalley_domain::{Factor, IntakeSession, Question, RegionCandidate, Score, ScoreBreakdown};

const BAR_WIDTH: usize = 20;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a ranked list as a numbered table
    pub fn format_ranking(result: &RankingResult) -> String {
        let title = match result.set {
            CandidateSet::Regions => "Regions",
            CandidateSet::Countries => "Recommended Countries",
        };

        let mut output = String::new();
        output.push_str(&Self::header(title));
        output.push('\n');
        output.push_str(&format!(
            "{} {} of {}   {} {}\n\n",
            "Showing:".cyan().bold(),
            result.items.len(),
            result.total,
            "Sort:".cyan().bold(),
            result.sort
        ));

        if result.is_empty() {
            output.push_str(&format!("  {}\n", "No candidates match these filters.".yellow()));
        } else {
            for (i, candidate) in result.items.iter().enumerate() {
                output.push_str(&Self::candidate_row(i + 1, candidate));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format an intake preview
    pub fn format_preview(preview: &IntakePreview) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Preview"));

        let adjustment = &preview.preview.adjustment;
        let rules = if adjustment.matched.is_empty() {
            "no keywords".dimmed().to_string()
        } else {
            adjustment.matched.join(", ")
        };
        output.push_str(&format!(
            "{} {}  ({})\n\n",
            "Adjustment:".cyan().bold(),
            Self::signed(adjustment.delta),
            rules
        ));

        for (i, candidate) in preview.preview.items.iter().enumerate() {
            output.push_str(&Self::candidate_row(i + 1, candidate));
        }

        output
    }

    /// Format the whole questionnaire
    pub fn format_questionnaire(questions: &[Question]) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Intake Questionnaire"));
        output.push('\n');

        for (i, question) in questions.iter().enumerate() {
            output.push_str(&format!(
                "{} {}\n",
                format!("{}. [{}]", i + 1, question.id).yellow().bold(),
                question.title.bold()
            ));
            output.push_str(&Self::question_details(question));
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the current question of an interactive session
    pub fn format_prompt(session: &IntakeSession) -> String {
        let question = session.current_question();
        let selected = session.selected_quick(question.id);

        let mut output = String::new();
        output.push_str(&format!(
            "\n{} {}\n",
            format!("[{}%]", session.progress_percent()).cyan(),
            question.title.bold()
        ));
        output.push_str(&Self::question_details(question));

        if !question.quick_options.is_empty() {
            output.push_str(&format!("  {}\n", "Quick options (/pick <id>):".dimmed()));
            for option in question.quick_options {
                let mark = if selected.iter().any(|id| id == option.id) {
                    "[x]".green().bold()
                } else {
                    "[ ]".normal()
                };
                output.push_str(&format!("    {} {:<8} {}\n", mark, option.id, option.label));
            }
        }

        if let Some(answer) = session.answers().get(question.id) {
            output.push_str(&format!("  {} {}\n", "Current answer:".dimmed(), answer));
        }

        output
    }

    /// Format a health report
    pub fn format_health(report: &HealthReport) -> String {
        let what = match report.target {
            HealthTarget::Api => "API",
            HealthTarget::Database => "Database",
        };
        let (mark, status) = if report.ok {
            ("v".green().bold(), "healthy".green())
        } else {
            ("x".red().bold(), "not ok".red())
        };

        format!(
            "{} {} {} {}\n",
            mark,
            what.bold(),
            status,
            format!("({}, {} ms)", report.url, report.latency_ms).dimmed()
        )
    }

    fn candidate_row(rank: usize, candidate: &RegionCandidate) -> String {
        let place = if candidate.is_country_level() {
            candidate.country_name.clone()
        } else {
            format!("{}, {}", candidate.region_name, candidate.country_name)
        };

        let mut row = format!(
            "{:>3}. {} {}  {} {}",
            rank,
            format!("{:<24}", place).bold(),
            candidate.country_code.as_str().dimmed(),
            Self::score_bar(candidate.score),
            Self::colored_score(candidate.score)
        );
        if !candidate.tags.is_empty() {
            row.push_str(&format!("  {}", candidate.tags.join(" ").magenta()));
        }
        row.push('\n');

        if let Some(reason) = &candidate.reason {
            row.push_str(&format!("     {}\n", reason.dimmed()));
        }
        if let Some(breakdown) = &candidate.breakdown {
            row.push_str(&format!("     {}\n", Self::breakdown_line(breakdown)));
        }
        row
    }

    fn breakdown_line(breakdown: &ScoreBreakdown) -> String {
        Factor::ALL
            .iter()
            .map(|factor| {
                format!(
                    "{} {}",
                    factor.label().cyan(),
                    Self::colored_score(breakdown.get(*factor))
                )
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn question_details(question: &Question) -> String {
        let affects: Vec<&str> = question.affects.iter().map(|f| f.label()).collect();
        let mut output = String::new();
        output.push_str(&format!("  {}\n", question.why.dimmed()));
        output.push_str(&format!("  {} {}\n", "Affects:".cyan(), affects.join(", ")));
        output.push_str(&format!("  {}\n", question.example.italic()));
        output
    }

    fn score_bar(score: Score) -> String {
        let filled = usize::from(score.value()) * BAR_WIDTH / usize::from(Score::MAX.value());
        format!(
            "{}{}",
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled).dimmed()
        )
    }

    fn colored_score(score: Score) -> ColoredString {
        let text = format!("{:>3}", score.value());
        match score.value() {
            75.. => text.green().bold(),
            60..=74 => text.yellow().bold(),
            _ => text.red().bold(),
        }
    }

    fn signed(delta: i32) -> ColoredString {
        let text = format!("{:+}", delta);
        match delta {
            d if d > 0 => text.green().bold(),
            d if d < 0 => text.red().bold(),
            _ => text.normal(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_ranking(&self, result: &RankingResult) -> String {
        Self::format_ranking(result)
    }

    fn format_preview(&self, preview: &IntakePreview) -> String {
        Self::format_preview(preview)
    }

    fn format_questionnaire(&self, questions: &[Question]) -> String {
        Self::format_questionnaire(questions)
    }

    fn format_health(&self, report: &HealthReport) -> String {
        Self::format_health(report)
    }
}
