//! nl2aud - Audience Recommendation Agent viewer
//!
//! A terminal application for browsing precomputed audience recommendations.
//! Run without arguments to launch the TUI, or use subcommands for CLI mode.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nl2aud::cli::audience::{self, Sources};
use nl2aud::cli::commands::{Cli, Commands};
use nl2aud::cli::config;
use nl2aud::core::config::Config;
use nl2aud::error::Result;
use nl2aud::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let Cli {
        data_dir,
        images_dir,
        command,
    } = Cli::parse();

    // Config commands report a broken file; data commands fall back to defaults
    let sources = || {
        Sources::resolve(
            data_dir.clone(),
            images_dir.clone(),
            &Config::load_or_default(),
        )
    };

    match command {
        // No subcommand - launch TUI mode
        None => run_tui(sources()).await,
        Some(Commands::Descriptions(args)) => audience::handle_descriptions(&sources(), args),
        Some(Commands::Show(args)) => audience::handle_show(&sources(), args),
        Some(Commands::Details(args)) => audience::handle_details(&sources(), args),
        Some(Commands::Attributes(args)) => audience::handle_attributes(&sources(), args),
        Some(Commands::Config(args)) => config::handle_config(args.command),
    }
}

/// Run the TUI application
async fn run_tui(sources: Sources) -> Result<()> {
    let mut app = App::new(sources.controller(None), sources.images());
    app.run().await
}
