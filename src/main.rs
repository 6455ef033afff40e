// Main entry point
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io::{IsTerminal, Write};
use std::process::ExitCode;
use t_translate::application;
use t_translate::domain::error::TranslateError;
use t_translate::infrastructure::config::{self, PASSWORD_ENV, USERNAME_ENV};
use t_translate::interfaces::cli::{parse_exit_code, Cli};
use t_translate::interfaces::report::error_message;
use t_translate::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_code(&e));
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        let path = config::get_config_path()
            .ok_or_else(|| TranslateError::Config("Cannot determine config directory".into()))?;
        if config::write_config_sample(&path)? {
            println!("Generated config file at: {}", path.display());
        } else {
            eprintln!("Config file already exists at: {}", path.display());
        }
        return Ok(());
    }

    let stdin = std::io::stdin();
    let text = application::input::read_input(&cli.text, stdin.is_terminal(), stdin.lock())?;
    let Some(text) = text else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // The only place that touches the environment
    let username = std::env::var(USERNAME_ENV).unwrap_or_default();
    let password = std::env::var(PASSWORD_ENV).unwrap_or_default();
    let state = AppState::new(config, &username, &password)?;

    let result =
        application::translate::translate_text(state.translator.as_ref(), &text, state.deadline())
            .await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(result.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Print a failure as `[ERROR] YYYY/MM/DD HH:MM:SS message` on stderr
fn report_error(err: &anyhow::Error) {
    let message = error_message(err);
    let timestamp = chrono::Local::now().format("%Y/%m/%d %H:%M:%S");
    eprintln!("{} {} {}", "[ERROR]".red(), timestamp, message);
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
