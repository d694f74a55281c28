//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use whalley_domain::{
    AnswerMap, CityType, CountryCode, DomainError, FilterSpec, ListViewState, Location, SortOption,
};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable table
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormat> for whalley_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => whalley_domain::OutputFormat::Table,
            OutputFormat::Json => whalley_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for whalley
#[derive(Parser, Debug)]
#[command(name = "whalley")]
#[command(author, version, about = "Working-holiday destination scoring")]
#[command(long_about = r#"
Whalley ranks working-holiday destinations by score.

Candidates are filtered (score range, countries, tags, city type, free-text
query), sorted by score, and in the intake preview adjusted by keywords
found in your answers.

Configuration files are loaded from (in priority order):
1. WHALLEY_API_BASE_URL             Environment override for the API URL
2. --config <path>                  Explicit config file
3. ./whalley.toml                   Project-level config
4. ~/.config/whalley/config.toml    Global config

Example:
  whalley list tokyo
  whalley list --tag 도시 --country jp --sort score_asc
  whalley map --min 70
  whalley preview --answer goal="돈을 많이 벌고 싶어" --answer english="영어 일상대화 가능"
  whalley intake
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the config file setting, then table)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Override the backend API base URL
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search and filter the region list
    List(ListArgs),

    /// Country recommendations for the map panel
    Map(MapArgs),

    /// Print the intake questionnaire
    Questions,

    /// Preview the top regions for a set of answers
    Preview(PreviewArgs),

    /// Answer the questionnaire interactively with a live preview
    Intake,

    /// Check the backend API health endpoint
    Health(HealthArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Free-text query matched against region, country and tags
    pub query: Option<String>,

    /// Required tag (can be specified multiple times)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Accepted country code (can be specified multiple times)
    #[arg(short, long = "country", value_name = "CODE")]
    pub countries: Vec<CountryCode>,

    /// Location shortcut (anywhere, japan, australia); replaces --country
    #[arg(long, value_name = "LOCATION")]
    pub location: Option<Location>,

    /// Accepted city type (metro, regional)
    #[arg(long = "city-type", value_name = "TYPE")]
    pub city_types: Vec<CityType>,

    /// Minimum score (clamped to 0..=100)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Maximum score (clamped to 0..=100)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Sort order (score_desc, score_asc)
    #[arg(short, long, default_value_t = SortOption::ScoreDesc)]
    pub sort: SortOption,

    /// Show at most this many results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl ListArgs {
    /// The list view state these arguments select
    pub fn view_state(&self) -> ListViewState {
        let mut state = ListViewState::new().with_sort(self.sort);

        if let Some(query) = &self.query {
            state = state.with_query(query.as_str());
        }
        for tag in &self.tags {
            if !state.chips.contains(tag) {
                state = state.toggle_chip(tag);
            }
        }
        if let Some(location) = self.location {
            state = state.with_location(location);
        } else {
            for code in &self.countries {
                if !state.country_codes.contains(code) {
                    state = state.toggle_country_code(*code);
                }
            }
        }
        if let Some(min) = self.min {
            state = state.with_min_score(min);
        }
        if let Some(max) = self.max {
            state = state.with_max_score(max);
        }

        state
    }

    pub fn filter_spec(&self) -> FilterSpec {
        self.view_state()
            .filter_spec()
            .with_city_types(self.city_types.iter().copied())
    }
}

#[derive(Args, Debug, Default)]
pub struct MapArgs {
    /// Minimum score (clamped to 0..=100)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Maximum score (clamped to 0..=100)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Sort order (score_desc, score_asc)
    #[arg(short, long, default_value_t = SortOption::ScoreDesc)]
    pub sort: SortOption,

    /// Show at most this many results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl MapArgs {
    pub fn filter_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        if let Some(min) = self.min {
            spec = spec.with_min_score(min);
        }
        if let Some(max) = self.max {
            spec = spec.with_max_score(max);
        }
        spec
    }
}

#[derive(Args, Debug, Default)]
pub struct PreviewArgs {
    /// Answer as <question>=<text> (can be specified multiple times)
    #[arg(short, long = "answer", value_name = "ID=TEXT", value_parser = parse_answer)]
    pub answers: Vec<(String, String)>,

    /// Number of regions to show (defaults to the config file setting)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl PreviewArgs {
    pub fn answer_map(&self) -> AnswerMap {
        self.answers.iter().cloned().collect()
    }
}

fn parse_answer(arg: &str) -> Result<(String, String), DomainError> {
    AnswerMap::parse_assignment(arg)
}

#[derive(Args, Debug, Default)]
pub struct HealthArgs {
    /// Probe the database endpoint (/health/db) instead of /health
    #[arg(long)]
    pub db: bool,
}
