use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chain palette
// ---------------------------------------------------------------------------

/// Colour of chain `index` (1-based) out of `total` requested chains.
///
/// Depends only on the chain index, so a chain keeps its colour when
/// other chains of the same run are omitted.
pub fn chain_color(index: usize, total: usize) -> Color32 {
    if index == 0 || total == 0 {
        return Color32::LIGHT_BLUE;
    }
    hue_color(index - 1, total.max(index))
}

fn hue_color(i: usize, n: usize) -> Color32 {
    let hue = (i as f32 / n as f32) * 360.0;
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
