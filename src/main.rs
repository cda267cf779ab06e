use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use marquee::config::{Config, ListLayout};
use marquee::headless::{self, ListReport};
use marquee::logging::init_tracing;
use marquee::tmdb::TmdbClient;

#[derive(Debug, Parser)]
#[command(name = "marquee", version, about = "Browse popular movies from The Movie Database")]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// API key; takes precedence over the environment and config file.
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Override `api.base_url`.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// List layout: grid or column.
    #[arg(long, value_name = "LAYOUT")]
    layout: Option<ListLayout>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the popular movies list and exit.
    Popular {
        /// Print at most this many movies.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Print one movie's details and exit.
    Show {
        /// Movie id as listed by `popular`.
        id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(path) = init_tracing() {
        tracing::info!(path = %path.display(), "Logging to file");
    }

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "Exiting with error");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    let api_key = config.resolve_api_key(cli.api_key.as_deref())?;
    let client = Arc::new(TmdbClient::new(&config.api).context("Failed to build HTTP client")?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    tracing::info!(
        base_url = %config.api.base_url,
        layout = config.ui.layout.as_str(),
        "Starting marquee"
    );

    match cli.command {
        None => {
            marquee::ui::run(&config, client, &api_key, runtime.handle().clone())
                .context("Terminal UI failed")?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Popular { limit }) => {
            let report = runtime.block_on(headless::list_report(&config, client, &api_key, limit));
            print_list(report?);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Show { id }) => {
            let detail = runtime.block_on(headless::detail_report(&config, client, &api_key, &id))?;
            for line in headless::detail_lines(&detail) {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(layout) = cli.layout {
        config.ui.layout = layout;
    }

    config.validate()?;
    Ok(config)
}

fn print_list(report: ListReport) {
    for line in report.lines() {
        println!("{line}");
    }
    if let Some(notice) = report.notice {
        eprintln!("{notice}");
    }
}
