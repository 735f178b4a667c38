use chains_viewer::app::ChainsViewerApp;
use eframe::egui;

fn main() -> eframe::Result {
    // Chain diagnostics are warnings; show them without RUST_LOG set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1600.0, 800.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cobaya Chains Plotter",
        options,
        Box::new(|_cc| Ok(Box::new(ChainsViewerApp::default()))),
    )
}
