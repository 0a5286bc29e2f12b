//! nova: command-line front end for the Nova assistant.

mod app;
mod cli;
mod commands;
mod speech;

use std::process::ExitCode;

use nova_common::NovaError;
use nova_config::NovaConfig;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cli::{Args, Command};

const NOVA_TARGETS: &[&str] = &["nova", "nova_ai", "nova_voice", "nova_config"];

/// `RUST_LOG` wins, then `--log-level`, then the config file.
fn init_tracing(cli_level: Option<&str>, config_level: &str) {
    let level = cli_level.unwrap_or(config_level);
    let directives: Vec<String> = std::iter::once("warn".to_string())
        .chain(NOVA_TARGETS.iter().map(|t| format!("{t}={level}")))
        .collect();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(directives.join(",")))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn load_config(args: &Args) -> (NovaConfig, Option<NovaError>) {
    let loaded = match &args.config {
        Some(path) => nova_config::load_from_path(path),
        None => nova_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (NovaConfig::default(), Some(e.into())),
    }
}

fn joined(words: &[String]) -> String {
    words.join(" ")
}

async fn run(args: Args, config: NovaConfig) -> Result<(), NovaError> {
    let command = args.command.clone().unwrap_or(Command::Chat);

    if !command.needs_api_key() {
        if let Command::Analyze { text } = &command {
            let interceptor = app::interceptor(&config.assistant);
            println!("{}", commands::analysis_json(&interceptor, &joined(text))?);
        }
        return Ok(());
    }

    let api_key = app::resolve_api_key(args.api_key, &config.gemini.api_key_env)?;
    let app = App::connect(&config, api_key)?;

    match command {
        Command::Chat => commands::chat(&app).await,
        Command::Ask { text } => commands::ask(&app, &joined(&text)).await,
        Command::Image { prompt, output } => {
            commands::image(&app, &joined(&prompt), output.as_deref()).await
        }
        Command::Code { path } => commands::code(&app, &path).await,
        Command::Quiz {
            topic,
            count,
            difficulty,
        } => commands::quiz(&app, &joined(&topic), count, difficulty.as_deref()).await,
        Command::Analyze { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    let (config, config_error) = load_config(&args);
    init_tracing(args.log_level.as_deref(), config.logging.level.as_filter());

    tracing::info!("Nova v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    } else if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
