use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::ProductTableApp;

#[derive(Parser, Debug)]
#[command(about = "Filter, search and sort the product catalog")]
struct Args {
    /// Directory holding users.json, categories.json and products.json.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Settings file; defaults to ./catalog.toml or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// tracing filter directive, e.g. "desktop_gui=debug".
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (mut settings, warnings) = config::load_settings(args.config.as_deref());
    if let Some(dir) = args.data_dir {
        settings.data_dir = Some(dir);
    }
    if let Some(filter) = args.log_filter {
        settings.log_filter = filter;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    for warning in warnings {
        tracing::warn!("{warning}");
    }

    let source = match &settings.data_dir {
        Some(dir) => format!("'{}'", dir.display()),
        None => "bundled data".to_string(),
    };
    let catalog = catalog::load(settings.data_dir.as_deref()).map_err(|err| {
        let hint = err.startup_hint();
        anyhow::Error::new(err).context(format!("failed to load catalog from {source}: {hint}"))
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.as_str())
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    let title = settings.window_title.clone();
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(ProductTableApp::new(catalog, title)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}
