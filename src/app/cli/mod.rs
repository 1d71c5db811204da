//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::config::{ConfigFile, EnvironmentConfig, Runtime, load_config};
use super::logging;
use crate::domain::{AppError, PromptOptions, PromptResult};

const EXIT_ACCEPTED: i32 = 0;
const EXIT_DECLINED: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "termprompt")]
#[command(version)]
#[command(
    about = "Ask a yes/no or multiple-choice question, in CI or at a live terminal",
    long_about = None
)]
struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question; exits 0 when the answer is accepted, 1 when declined
    #[clap(visible_alias = "a")]
    Ask(AskArgs),
}

#[derive(Args, Debug, Default)]
struct AskArgs {
    /// Config file (defaults to ./termprompt.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Use the supplied input without waiting for an operator
    #[arg(long, conflicts_with = "attended")]
    ci: bool,
    /// Open a terminal session and wait for an operator
    #[arg(long)]
    attended: bool,
    /// Message shown to the operator
    #[arg(short, long)]
    msg: Option<String>,
    /// Answer used in CI mode
    #[arg(short, long)]
    input: Option<String>,
    /// Pattern searched for in the answer when no choices are given
    #[arg(long = "match", value_name = "PATTERN")]
    pattern: Option<String>,
    /// Accepted answer; repeat for a multiple-choice question
    #[arg(long = "choice", value_name = "CHOICE")]
    choices: Vec<String>,
    /// Where attended sessions run
    #[arg(long, value_enum)]
    runtime: Option<Runtime>,
    /// Container image for the docker runtime
    #[arg(long)]
    image: Option<String>,
    /// Cache directory root for the local runtime
    #[arg(long)]
    cache_root: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Ask(args) => run_ask(args),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != EXIT_ACCEPTED {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

fn run_ask(args: AskArgs) -> Result<i32, AppError> {
    let cwd = std::env::current_dir()?;
    let config = load_config(args.config.as_deref(), &cwd)?;
    let json = args.json;
    let (options, environment) = resolve_ask(args, config);

    let result = crate::app::api::execute_prompt(options, &environment)?;
    print_result(&result, json)?;

    Ok(if result.outcome { EXIT_ACCEPTED } else { EXIT_DECLINED })
}

/// Layer command-line flags over the config file, field by field.
fn resolve_ask(args: AskArgs, config: ConfigFile) -> (PromptOptions, EnvironmentConfig) {
    let mut options = config.prompt;
    if args.ci {
        options = options.with_ci(true);
    }
    if args.attended {
        options = options.with_ci(false);
    }
    if let Some(msg) = args.msg {
        options = options.with_msg(msg);
    }
    if let Some(input) = args.input {
        options = options.with_input(input);
    }
    if let Some(pattern) = args.pattern {
        options = options.with_match(pattern);
    }
    if !args.choices.is_empty() {
        options = options.with_choices(args.choices);
    }

    let mut environment = config.environment;
    if let Some(runtime) = args.runtime {
        environment.runtime = runtime;
    }
    if let Some(image) = args.image {
        environment.image = image;
    }
    if let Some(cache_root) = args.cache_root {
        environment.cache_root = Some(cache_root);
    }

    (options, environment)
}

fn print_result(result: &PromptResult, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else {
        println!("Outcome: {}, Input: {}", result.outcome, result.input);
    }
    Ok(())
}
