//! REPL (Read-Eval-Print Loop) for the interactive intake questionnaire

use crate::ConsoleFormatter;
use crate::config::ReplConfig;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use whalley_application::{CandidateCatalog, PreviewIntakeInput, PreviewIntakeUseCase};
use whalley_domain::{IntakeSession, QUESTIONNAIRE};

/// One parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeCommand {
    /// Typed answer text (may be empty to submit quick options only)
    Answer(String),
    /// Toggle a quick option of the current question
    Pick(String),
    /// Previous question
    Back,
    /// Jump to a question (1-based)
    Go(usize),
    Reset,
    Answers,
    Preview,
    Help,
    Quit,
    Unknown(String),
}

impl IntakeCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if !line.starts_with('/') {
            return IntakeCommand::Answer(line.to_string());
        }

        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => IntakeCommand::Quit,
            "/help" | "/h" | "/?" => IntakeCommand::Help,
            "/pick" | "/p" if !arg.is_empty() => IntakeCommand::Pick(arg.to_string()),
            "/back" | "/b" => IntakeCommand::Back,
            "/go" => match arg.parse::<usize>() {
                Ok(n) if n >= 1 => IntakeCommand::Go(n),
                _ => IntakeCommand::Unknown(line.to_string()),
            },
            "/reset" => IntakeCommand::Reset,
            "/answers" | "/a" => IntakeCommand::Answers,
            "/preview" => IntakeCommand::Preview,
            _ => IntakeCommand::Unknown(line.to_string()),
        }
    }

    /// Next session state for this command.
    ///
    /// Commands that only print something leave the session unchanged.
    pub fn apply(&self, session: &IntakeSession) -> IntakeSession {
        match self {
            IntakeCommand::Answer(text) => session.set_input(text.as_str()).submit(),
            IntakeCommand::Pick(option) => {
                session.toggle_quick(session.current_question().id, option)
            }
            IntakeCommand::Back => session.go_to_step(session.step().saturating_sub(1)),
            IntakeCommand::Go(n) => session.go_to_step(n.saturating_sub(1)),
            IntakeCommand::Reset => session.reset(),
            _ => session.clone(),
        }
    }
}

/// Interactive intake REPL
pub struct IntakeRepl<C: CandidateCatalog + 'static> {
    use_case: PreviewIntakeUseCase<C>,
    config: ReplConfig,
}

impl<C: CandidateCatalog + 'static> IntakeRepl<C> {
    /// Create a new IntakeRepl
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            use_case: PreviewIntakeUseCase::new(catalog),
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        let mut session = IntakeSession::new();
        print!("{}", ConsoleFormatter::format_prompt(&session));

        loop {
            match rl.readline("> ") {
                Ok(line) => {
                    let command = IntakeCommand::parse(&line);
                    if let IntakeCommand::Answer(text) = &command {
                        if text.is_empty() && !session.can_submit() {
                            continue;
                        }
                        let _ = rl.add_history_entry(text.as_str());
                    }

                    let next = command.apply(&session);
                    let changed = next != session;
                    if self.handle(&command, &session, &next) {
                        break;
                    }
                    session = next;

                    if changed {
                        print!("{}", ConsoleFormatter::format_prompt(&session));
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(path) = &self.config.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Whalley - Intake Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Answer {} questions; the preview updates after each one.",
            QUESTIONNAIRE.len()
        );
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  <text>            - Answer the current question");
        println!("  <empty line>      - Submit the picked quick options only");
        println!("  /pick, /p <id>    - Toggle a quick option");
        println!("  /back, /b         - Previous question");
        println!("  /go <n>           - Jump to question n");
        println!("  /answers, /a      - Show recorded answers");
        println!("  /preview          - Show the preview again");
        println!("  /reset            - Start over");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit intake");
        println!();
    }

    /// Print the outcome of a command. Returns true if should exit.
    fn handle(&self, command: &IntakeCommand, before: &IntakeSession, after: &IntakeSession) -> bool {
        match command {
            IntakeCommand::Quit => {
                println!("Bye!");
                return true;
            }
            IntakeCommand::Help => Self::print_help(),
            IntakeCommand::Answer(_) => {
                if after.answers() != before.answers() {
                    self.print_preview(after);
                    if after.is_complete() {
                        println!("All questions answered. /quit to finish.");
                    }
                }
            }
            IntakeCommand::Pick(option) => {
                if after == before {
                    println!("Unknown option: {}", option);
                }
            }
            IntakeCommand::Answers => {
                if after.answers().is_empty() {
                    println!("No answers yet.");
                }
                for (id, answer) in after.answers().iter() {
                    println!("  {:<8} {}", id, answer);
                }
            }
            IntakeCommand::Preview => self.print_preview(after),
            IntakeCommand::Unknown(line) => {
                println!("Unknown command: {}", line);
                println!("Type /help for available commands");
            }
            IntakeCommand::Back | IntakeCommand::Go(_) | IntakeCommand::Reset => {}
        }
        false
    }

    fn print_preview(&self, session: &IntakeSession) {
        let input = PreviewIntakeInput::new(session.answers().clone())
            .with_limit(self.config.preview_limit);
        let preview = self.use_case.execute(input);
        print!("{}", ConsoleFormatter::format_preview(&preview));
    }
}
