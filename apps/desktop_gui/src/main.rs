mod config;
mod controller;
mod ui;

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::NavigatorApp;

#[derive(Parser, Debug)]
#[command(about = "Interactive navigation coordinator demo")]
struct Args {
    /// Settings file; defaults to ./navigator.toml or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// navctl script replayed before the first frame.
    #[arg(long)]
    script: Option<PathBuf>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(title) = args.title {
        settings.window_title = title;
    }
    if let Some(filter) = args.log_filter {
        settings.log_filter = filter;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let startup_commands = match &args.script {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read script {}", path.display()))?;
            shared::command::parse_script(&raw)
                .with_context(|| format!("invalid script {}", path.display()))?
        }
        None => Vec::new(),
    };
    tracing::info!(
        title = %settings.window_title,
        startup_commands = startup_commands.len(),
        "starting navigator"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(NavigatorApp::new(startup_commands)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe terminated with an error: {err}"))
}
