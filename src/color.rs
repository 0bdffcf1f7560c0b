use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Per-series style
// ---------------------------------------------------------------------------

/// Visual identity of one series, fixed at session start so a toggled-off
/// series keeps its appearance when re-enabled.
#[derive(Debug, Clone, Copy)]
pub struct SeriesStyle {
    pub color: Color32,
    pub width: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        SeriesStyle {
            color: Color32::GRAY,
            width: 1.5,
        }
    }
}

impl SeriesStyle {
    /// Faded variant for the legend entry of a hidden series.
    pub fn dimmed(&self) -> Color32 {
        self.color.gamma_multiply(0.25)
    }
}

/// Assign one fixed style per series label, in load order.
pub fn assign_styles(labels: &[String]) -> BTreeMap<String, SeriesStyle> {
    let palette = generate_palette(labels.len());
    labels
        .iter()
        .zip(palette)
        .map(|(label, color)| {
            (
                label.clone(),
                SeriesStyle {
                    color,
                    ..SeriesStyle::default()
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let palette = generate_palette(6);
        assert_eq!(palette.len(), 6);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn styles_keyed_by_label() {
        let labels = vec!["a.csv".to_string(), "b.csv".to_string()];
        let styles = assign_styles(&labels);
        assert_eq!(styles.len(), 2);
        assert_ne!(styles["a.csv"].color, styles["b.csv"].color);
    }
}
