use std::path::PathBuf;

use anyhow::Context;
use catalog::CatalogSource;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod ui;

use ui::{PodruzhkaApp, APP_TITLE};

#[derive(Parser, Debug)]
#[command(about = "Подружка: store worker app")]
struct Args {
    /// JSON catalog fixture to use instead of the built-in demo data.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Config file; defaults to ./podruzhka.toml or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let loaded = config::load_settings(args.config.as_deref())?;
    let mut settings = loaded.settings;
    if let Some(path) = args.catalog {
        settings.catalog_path = Some(path);
    }

    init_tracing(&settings.log_filter);
    if let Some(source) = &loaded.source {
        tracing::info!(path = %source.display(), "applied config file");
    }
    for warning in &loaded.warnings {
        tracing::warn!("{warning}");
    }

    let catalog = catalog::open(settings.catalog_path.as_deref())
        .inspect_err(|err| tracing::error!(code = ?err.code(), %err, "catalog unavailable"))
        .context("failed to open catalog")?;
    tracing::info!(
        products = catalog.products().len(),
        orders = catalog.orders().len(),
        "catalog ready"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            ui::theme::install(&cc.egui_ctx);
            Ok(Box::new(PodruzhkaApp::new(catalog)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop GUI exited with error: {err}"))
}
