use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::color::chain_color;
use crate::data::model::ChainSeries;
use crate::state::AppState;

/// Subplots per grid row.
pub const GRID_COLUMNS: usize = 2;

/// Rows never shrink below this; taller grids scroll instead.
const MIN_ROW_HEIGHT: f32 = 180.0;

/// Number of grid rows needed for `chain_count` subplots.
pub fn grid_rows(chain_count: usize) -> usize {
    chain_count.div_ceil(GRID_COLUMNS).max(1)
}

// ---------------------------------------------------------------------------
// Chain grid (central panel)
// ---------------------------------------------------------------------------

/// Render one subplot per loaded chain, two per row.
///
/// The grid is sized for the requested chain count; chains that were
/// omitted simply leave the trailing cells empty.
pub fn chain_grid(ui: &mut Ui, state: &AppState) {
    let chains = match &state.chains {
        Some(c) => c,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Pick a chains directory and press \"Plot Chains\"");
            });
            return;
        }
    };

    if chains.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(format!("No chain contains parameter '{}'", chains.parameter));
        });
        return;
    }

    let rows = grid_rows(chains.requested);
    let spacing = ui.spacing().item_spacing.y;
    let title_height = ui.text_style_height(&egui::TextStyle::Body) + spacing;
    let row_height = ((ui.available_height() - spacing * rows as f32) / rows as f32)
        .max(MIN_ROW_HEIGHT);
    let plot_height = row_height - title_height;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for row in 0..rows {
                ui.columns(GRID_COLUMNS, |columns: &mut [Ui]| {
                    for (col, cell) in columns.iter_mut().enumerate() {
                        if let Some(series) = chains.series.get(row * GRID_COLUMNS + col) {
                            chain_subplot(
                                cell,
                                series,
                                &chains.parameter,
                                chains.requested,
                                plot_height,
                            );
                        }
                    }
                });
            }
        });
}

fn chain_subplot(
    ui: &mut Ui,
    series: &ChainSeries,
    parameter: &str,
    requested: usize,
    height: f32,
) {
    let label = series.label();
    ui.vertical_centered(|ui: &mut Ui| {
        if series.is_empty() {
            ui.label(RichText::new(format!("{label} (no data rows)")).strong().weak());
        } else {
            ui.label(RichText::new(&label).strong());
        }
    });

    let points: PlotPoints = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect();

    let line = Line::new(points)
        .name(&label)
        .color(chain_color(series.index, requested))
        .width(1.2);

    Plot::new(("chain_plot", series.index))
        .height(height)
        .y_axis_label(parameter)
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_round_up_to_fill_two_columns() {
        assert_eq!(grid_rows(8), 4);
        assert_eq!(grid_rows(7), 4);
        assert_eq!(grid_rows(2), 1);
        assert_eq!(grid_rows(1), 1);
    }

    #[test]
    fn rows_never_zero() {
        assert_eq!(grid_rows(0), 1);
    }
}
