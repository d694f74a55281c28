//! CLI entrypoint for Whalley
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use whalley_application::{
    CandidateSet, CheckHealthUseCase, HealthTarget, PreviewIntakeInput, PreviewIntakeUseCase,
    RankCandidatesInput, RankCandidatesUseCase,
};
use whalley_domain::QUESTIONNAIRE;
use whalley_infrastructure::{ConfigLoader, FileConfig, HttpApiGateway, SeedCatalog};
use whalley_presentation::{
    Cli, Command, HealthArgs, IntakeRepl, OutputConfig, ProgressReporter, ReplConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    debug!("Effective configuration: {:?}", config);

    let output = OutputConfig::resolve(
        cli.output,
        config.output.format,
        config.output.color,
        cli.quiet,
    );
    if !output.color {
        colored::control::set_override(false);
    }
    let formatter = output.formatter();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // === Dependency Injection ===
    let catalog = Arc::new(SeedCatalog::new());

    match command {
        Command::List(args) => {
            let input = RankCandidatesInput::new(CandidateSet::Regions)
                .with_filter(args.filter_spec())
                .with_sort(args.sort)
                .with_limit(args.limit);
            let result = RankCandidatesUseCase::new(catalog).execute(input);
            println!("{}", formatter.format_ranking(&result));
        }
        Command::Map(args) => {
            let input = RankCandidatesInput::new(CandidateSet::Countries)
                .with_filter(args.filter_spec())
                .with_sort(args.sort)
                .with_limit(args.limit);
            let result = RankCandidatesUseCase::new(catalog).execute(input);
            println!("{}", formatter.format_ranking(&result));
        }
        Command::Questions => {
            println!("{}", formatter.format_questionnaire(QUESTIONNAIRE));
        }
        Command::Preview(args) => {
            let input = PreviewIntakeInput::new(args.answer_map())
                .with_limit(args.limit.unwrap_or(config.preview.limit));
            let preview = PreviewIntakeUseCase::new(catalog).execute(input);
            println!("{}", formatter.format_preview(&preview));
        }
        Command::Intake => {
            let repl = IntakeRepl::new(catalog).with_config(ReplConfig {
                preview_limit: config.preview.limit,
                ..ReplConfig::default()
            });
            repl.run()?;
        }
        Command::Health(args) => {
            check_health(&config, &args, &output).await?;
        }
    }

    Ok(())
}

/// Merge config sources, apply `--api-url` and validate
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    let issues = config.validate();
    if !issues.is_empty() {
        let messages: Vec<String> = issues.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration: {}", messages.join("; "));
    }

    Ok(config)
}

async fn check_health(config: &FileConfig, args: &HealthArgs, output: &OutputConfig) -> Result<()> {
    let target = if args.db {
        HealthTarget::Database
    } else {
        HealthTarget::Api
    };

    let gateway = Arc::new(HttpApiGateway::connect(
        config.api.base_url.as_str(),
        config.api.timeout(),
    )?);
    let base_url = gateway.client().base_url().to_string();
    info!("Using API at {}", base_url);

    let progress = ProgressReporter::with_enabled(
        output.show_progress,
        format!("Checking {}{} ...", base_url, target.path()),
    );

    match CheckHealthUseCase::new(gateway).execute(target).await {
        Ok(report) => {
            progress.clear();
            println!("{}", output.formatter().format_health(&report).trim_end());
            if !report.ok {
                bail!("{} reported not ok", report.url);
            }
            Ok(())
        }
        Err(e) => {
            progress.finish_err(e.to_string());
            Err(e.into())
        }
    }
}
