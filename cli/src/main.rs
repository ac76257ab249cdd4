//! CLI for submit-begehung.
//!
//! Hosts the inspection submission function over HTTP, invokes it once for a
//! single event, or renders the inspection report for an existing issue.

mod server;

use clap::{Parser, Subcommand};
use std::io::Read;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use submit_begehung::{handle_bytes, render_report, write_report, FunctionConfig, GitHubIssues};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Turn Begehung form submissions into GitHub issues.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the submission function over HTTP.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8888")]
        bind: SocketAddr,
    },

    /// Run the submission function once and print the JSON response.
    Invoke {
        /// File holding the request body. Reads stdin when omitted.
        #[arg(long)]
        event: Option<PathBuf>,
    },

    /// Render the inspection report for an issue body.
    RenderReport {
        /// Issue body written by the workflow.
        #[arg(long, default_value = "issue_body.md")]
        input: PathBuf,

        /// Report Markdown for Pandoc.
        #[arg(long, default_value = "report.md")]
        output: PathBuf,

        /// Directory receiving todos.csv.
        #[arg(long, default_value = "reports")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match args.command {
        Command::Serve { bind } => serve(bind).await,
        Command::Invoke { event } => invoke(event).await,
        Command::RenderReport {
            input,
            output,
            out_dir,
        } => render(input, output, out_dir).await,
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so `invoke` keeps stdout for the JSON response.
/// Filtering follows `RUST_LOG` and defaults to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn serve(bind: SocketAddr) -> ExitCode {
    let state = server::AppState::new(FunctionConfig::from_env(), GitHubIssues::new());

    match server::serve(bind, state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, %bind, "Server failed");
            ExitCode::from(2)
        }
    }
}

async fn invoke(event: Option<PathBuf>) -> ExitCode {
    let body = match read_event(event.as_ref()).await {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "Failed to read event");
            return ExitCode::from(2);
        }
    };

    let config = FunctionConfig::from_env();
    let response = handle_bytes(&body, &config, &GitHubIssues::new()).await;
    println!("{}", response.body_string());

    if response.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn read_event(path: Option<&PathBuf>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) => tokio::fs::read(path).await,
        None => {
            tokio::task::spawn_blocking(|| {
                let mut body = Vec::new();
                std::io::stdin().read_to_end(&mut body)?;
                Ok::<_, std::io::Error>(body)
            })
            .await?
        }
    }
}

async fn render(input: PathBuf, output: PathBuf, out_dir: PathBuf) -> ExitCode {
    let body = match tokio::fs::read_to_string(&input).await {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, input = %input.display(), "Failed to read issue body");
            return ExitCode::from(2);
        }
    };

    let report = render_report(&body, chrono::Local::now().date_naive());
    match write_report(&report, &output, &out_dir).await {
        Ok(csv_path) => {
            info!(defects = report.defects.len(), "Report rendered");
            println!("Wrote {} and {}", output.display(), csv_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to write report");
            ExitCode::from(2)
        }
    }
}
