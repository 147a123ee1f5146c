mod app;
mod color;
mod config;
mod dice;
mod error;
mod media;
mod state;
mod ui;

use anyhow::Result;
use app::DiceApp;
use config::AppConfig;
use eframe::egui;
use media::library::AssetLibrary;

fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!(
        "Loading {} assets from {}",
        config.catalog.files().count(),
        config.asset_dir.display()
    );
    let assets = match AssetLibrary::load(&config.asset_dir, &config.catalog) {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("Failed to load assets: {e:#}");
            return Err(e);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Ok(Box::new(DiceApp::new(assets)))),
    )
    .map_err(|e| anyhow::anyhow!("running the window: {e}"))
}
