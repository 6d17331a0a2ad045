mod app;
mod config;
mod upload;
mod utils;

use anyhow::{Context, Result};
use app::ResumeUploader;
use clap::Parser;
use config::Config;
use eframe::CreationContext;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use upload::ParseClient;

#[derive(Parser, Debug)]
#[command(name = "resume_uploader", version, about = "Upload a resume and show the parsed result")]
struct Cli {
    /// Parse server origin, overrides RESUME_PARSER_URL
    #[arg(long)]
    server: Option<String>,

    /// File to preselect (required with --headless)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Submit --file once without opening a window
    #[arg(long, requires = "file")]
    headless: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_server_override(cli.server.as_deref())?;

    // stdout is reserved for the parsed output in headless mode
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(config.log_filter()).unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume uploader v{}", env!("CARGO_PKG_VERSION"));

    let client = ParseClient::new(&config).context("failed to build the HTTP client")?;
    let uploader = ResumeUploader::new(client, cli.file);

    if cli.headless {
        return run_headless(uploader);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Resume Parser",
        options,
        Box::new(|_cc: &CreationContext| -> Box<dyn eframe::App> { Box::new(uploader) }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the desktop app: {e}"))?;

    Ok(ExitCode::SUCCESS)
}

/// One submission, same state transitions as the window, printed to the terminal.
fn run_headless(mut uploader: ResumeUploader) -> Result<ExitCode> {
    let rt = tokio::runtime::Runtime::new().context("failed to start the async runtime")?;
    let succeeded = uploader.run_once(&rt);

    let state = uploader.state();
    println!("{}", state.output);
    eprintln!("{}", state.status.text);

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
