use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct ChainsViewerApp {
    pub state: AppState,
}

impl eframe::App for ChainsViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: input form ----
        egui::TopBottomPanel::top("chain_form_panel").show(ctx, |ui| {
            panels::form_panel(ui, &mut self.state);
        });

        // ---- Central panel: chain grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chain_grid(ui, &self.state);
        });
    }
}
