mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::StandingsApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();

    // The window only opens on a complete table.
    let table = data::loader::load(&config.source)
        .with_context(|| format!("loading scores from {}", config.source))?;
    log::info!(
        "Loaded {} races for {} participants ({} scores)",
        table.categories().len(),
        table.participants().len(),
        table.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(StandingsApp::new(table, config)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}
