use anyhow::anyhow;
use eframe::egui;
use log::info;
use townsquare::config::Config;
use townsquare::data;
use townsquare::gui::TownSquareApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    let data = data::reference_data()?;
    info!("Starting TownSquare at {}", config.start_route);

    let builder = egui::ViewportBuilder::default()
        .with_title("TownSquare")
        .with_inner_size(egui::vec2(config.window_width, config.window_height));

    let options = eframe::NativeOptions {
        viewport: builder,
        ..Default::default()
    };

    eframe::run_native(
        "TownSquare",
        options,
        Box::new(move |cc| Ok(Box::new(TownSquareApp::new(cc, data, &config)))),
    )
    .map_err(|e| anyhow!("failed to run the window: {e}"))
}
