//! Docentes CLI
//!
//! Terminal host for the teacher directory:
//! - Watch the directory live (redraws on every fetch)
//! - Fetch once and print the view or JSON
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docentes::config::{generate_default_config, Config, LoggingConfig};
use docentes::directory::{tally, ViewEvent, ViewState};
use docentes::fetcher::{DirectoryClient, RecordSource};
use docentes::render::{render, render_text};
use docentes::TeacherDirectoryView;

#[derive(Parser)]
#[command(name = "docentes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Live teacher directory with per-gender tally")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Poll interval in milliseconds
    #[arg(long, global = true)]
    pub interval_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mount the directory and redraw it on every update (default)
    Watch,

    /// Run a single fetch cycle and print the result
    Once {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, loaded) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, None),
        None => {
            let loaded = Config::load_default();
            (loaded.config.clone(), Some(loaded))
        }
    };
    if let Some(endpoint) = cli.endpoint {
        config.source.endpoint = endpoint;
    }
    if let Some(ms) = cli.interval_ms {
        config.source.poll_interval_ms = ms;
    }
    config.validate()?;

    init_logging(&config.logging);
    match &loaded {
        Some(loaded) => loaded.log(),
        None => tracing::debug!("Loaded config from {:?}", cli.config),
    }

    match cli.command.unwrap_or(Commands::Watch) {
        Commands::Watch => watch(&config).await,
        Commands::Once { format } => once(&config, &format).await,
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

/// Logs go to stderr so they never interleave with the view on stdout
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("docentes={}", logging.level).into());

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn watch(config: &Config) -> anyhow::Result<()> {
    let client = DirectoryClient::new(config.source.client_config())?;
    let mut view = TeacherDirectoryView::new(Arc::new(client), config.source.poll_interval())?;
    let mut changes = view.subscribe();

    view.mount();
    draw(&view)?;

    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                draw(&view)?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    view.unmount();
    Ok(())
}

/// Clear the screen and print the current view
fn draw(view: &TeacherDirectoryView) -> anyhow::Result<()> {
    let text = render_text(&view.view(), view.snapshot().last_updated);
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\x1b[2J\x1b[H{}", text)?;
    stdout.flush()?;
    Ok(())
}

async fn once(config: &Config, format: &str) -> anyhow::Result<()> {
    let client = DirectoryClient::new(config.source.client_config())?;
    tracing::debug!(source = %client.describe(), "Fetching directory once");

    let outcome = client.fetch().await;
    if let Err(e) = &outcome {
        tracing::warn!(kind = ?e.kind(), error = %e, "Fetch failed");
    }

    match format {
        "json" => {
            let records = outcome?;
            let body = serde_json::json!({
                "genero": tally(&records),
                "docentes": records,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        _ => {
            let mut state = ViewState::new();
            state.apply(ViewEvent::CycleFinished {
                ticket: 1,
                outcome,
                at: chrono::Utc::now(),
            });
            print!("{}", render_text(&render(&state), state.last_updated));
        }
    }

    Ok(())
}
