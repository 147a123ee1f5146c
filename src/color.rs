use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::dice::die::Die;

/// Colour of the running total label.
pub const TOTAL_COLOR: Color32 = Color32::from_rgb(220, 40, 40);

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Button colours, one hue per die
// ---------------------------------------------------------------------------

/// Fill colour for a die's button. Hues run evenly around the wheel in
/// button order, so neighbouring dice never look alike.
pub fn die_fill(die: Die) -> Color32 {
    let index = Die::ALL.iter().position(|d| *d == die).unwrap_or(0);
    let hue = (index as f32 / Die::ALL.len() as f32) * 360.0;
    hsl_to_color32(hue, 0.55, 0.35)
}

/// Fill used for the die rolled most recently.
pub fn die_highlight(die: Die) -> Color32 {
    let index = Die::ALL.iter().position(|d| *d == die).unwrap_or(0);
    let hue = (index as f32 / Die::ALL.len() as f32) * 360.0;
    hsl_to_color32(hue, 0.75, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_die_gets_its_own_colour() {
        let fills: HashSet<Color32> = Die::ALL.into_iter().map(die_fill).collect();
        assert_eq!(fills.len(), Die::ALL.len());
    }

    #[test]
    fn highlight_differs_from_fill() {
        for die in Die::ALL {
            assert_ne!(die_fill(die), die_highlight(die));
        }
    }
}
