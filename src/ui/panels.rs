use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

/// Width of the text fields in the form.
const FIELD_WIDTH: f32 = 420.0;

/// Diagnostics listed in the warning tooltip before truncating.
const MAX_LISTED_DIAGNOSTICS: usize = 20;

// ---------------------------------------------------------------------------
// Top panel – input form
// ---------------------------------------------------------------------------

/// Render the chain selection form and the plot button.
pub fn form_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(6.0);
    egui::Grid::new("chain_form")
        .num_columns(3)
        .spacing([12.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Select Chains Directory");
            ui.add(egui::TextEdit::singleline(&mut state.form.directory).desired_width(FIELD_WIDTH));
            if ui.button("Browse").clicked() {
                pick_directory(state);
            }
            ui.end_row();

            ui.label("Chain Base Name (e.g., test)");
            ui.add(egui::TextEdit::singleline(&mut state.form.basename).desired_width(FIELD_WIDTH));
            ui.end_row();

            ui.label("Number of Chains");
            ui.add(egui::TextEdit::singleline(&mut state.form.chain_count).desired_width(FIELD_WIDTH));
            ui.end_row();

            ui.label("Parameter Name");
            ui.add(egui::TextEdit::singleline(&mut state.form.parameter).desired_width(FIELD_WIDTH));
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.horizontal(|ui: &mut Ui| {
        if ui.button(RichText::new("Plot Chains").strong()).clicked() {
            state.plot_chains();
        }

        if let Some(chains) = &state.chains {
            ui.separator();
            ui.label(format!(
                "{} of {} chains, {} samples",
                chains.len(),
                chains.requested,
                chains.total_samples()
            ));

            if !chains.diagnostics.is_empty() {
                let mut listing: Vec<String> = chains
                    .diagnostics
                    .iter()
                    .take(MAX_LISTED_DIAGNOSTICS)
                    .map(|d| d.to_string())
                    .collect();
                if chains.diagnostics.len() > MAX_LISTED_DIAGNOSTICS {
                    listing.push(format!(
                        "… and {} more",
                        chains.diagnostics.len() - MAX_LISTED_DIAGNOSTICS
                    ));
                }
                ui.label(
                    RichText::new(format!("{} warnings", state.diagnostic_count()))
                        .color(Color32::from_rgb(230, 160, 0)),
                )
                .on_hover_text(listing.join("\n"));
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Directory dialog
// ---------------------------------------------------------------------------

pub fn pick_directory(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new().set_title("Select chains directory");
    if !state.form.directory.is_empty() {
        dialog = dialog.set_directory(&state.form.directory);
    }

    if let Some(path) = dialog.pick_folder() {
        log::info!("Selected chains directory {}", path.display());
        state.set_directory(&path);
    }
}
