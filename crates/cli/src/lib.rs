pub mod commands;
pub mod request;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use proposta_core::config::{AppConfig, LoadOptions};
use proposta_core::{BillingCycle, Plan};

#[derive(Debug, Parser)]
#[command(
    name = "proposta",
    about = "Proposal pricing CLI",
    long_about = "Inspect the module catalog, price a bundle for a prospect, and render shareable proposal documents.",
    after_help = "Examples:\n  proposta catalog --plan enterprise --cycle monthly\n  proposta quote --request request.toml --json\n  proposta propose --request request.toml --out proposals/"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List catalog categories, modules, and unit prices for a plan/cycle")]
    Catalog {
        #[arg(long, default_value = "business", value_parser = parse_plan)]
        plan: Plan,
        #[arg(long, default_value = "yearly", value_parser = parse_cycle)]
        cycle: BillingCycle,
    },
    #[command(about = "Validate a quote request and print the priced breakdown")]
    Quote {
        #[arg(long, help = "Path to the quote request TOML file")]
        request: PathBuf,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Render the proposal document for a validated quote request")]
    Propose {
        #[arg(long, help = "Path to the quote request TOML file")]
        request: PathBuf,
        #[arg(long, help = "Output directory (defaults to proposal.output_dir)")]
        out: Option<PathBuf>,
        #[arg(long, help = "Call transcript to analyze for advisory pain points")]
        transcript: Option<PathBuf>,
    },
}

fn parse_plan(value: &str) -> Result<Plan, String> {
    value.parse().map_err(|error| format!("{error}"))
}

fn parse_cycle(value: &str) -> Result<BillingCycle, String> {
    value.parse().map_err(|error| format!("{error}"))
}

fn init_logging(config: &AppConfig) {
    use proposta_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("config validation failed: {error}");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    let result = match cli.command {
        Command::Catalog { plan, cycle } => commands::catalog::run(plan, cycle),
        Command::Quote { request, json } => commands::quote::run(&request, json),
        Command::Propose { request, out, transcript } => {
            commands::propose::run(&config, &request, out.as_deref(), transcript.as_deref())
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
