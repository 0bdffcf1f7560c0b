use std::collections::BTreeMap;

use anyhow::{bail, Result};

use crate::color::{assign_styles, SeriesStyle};
use crate::data::model::Series;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The first loaded series' header is the canonical schema: its first column
/// is the shared X axis and its remaining columns are the Y choices.
/// Visibility and style maps live here rather than in any ambient state and
/// survive Y-axis changes unchanged.
pub struct SessionState {
    /// Loaded series, in selection order.
    pub series: Vec<Series>,

    /// Shared X column (first column of the canonical schema).
    pub x_column: String,

    /// Candidate Y columns (canonical schema minus the X column).
    pub y_choices: Vec<String>,

    /// Currently plotted Y column.
    pub selected_y: String,

    /// Per-label visibility, default true.
    visible: BTreeMap<String, bool>,

    /// Per-label style, fixed at session start.
    styles: BTreeMap<String, SeriesStyle>,
}

impl SessionState {
    /// Build the session from the loaded series set.
    ///
    /// Fails when nothing loaded or the canonical schema has no Y column;
    /// the caller surfaces either as a fatal user-facing error.
    pub fn new(series: Vec<Series>) -> Result<Self> {
        let Some(first) = series.first() else {
            bail!("no valid CSV files found for the given inputs");
        };
        if first.columns.len() < 2 {
            bail!("CSV files must have at least two columns");
        }

        let x_column = first.columns[0].clone();
        let y_choices: Vec<String> = first.columns[1..].to_vec();
        let selected_y = y_choices[0].clone();

        let labels: Vec<String> = series.iter().map(|s| s.label.clone()).collect();
        let styles = assign_styles(&labels);
        let visible = labels.into_iter().map(|l| (l, true)).collect();

        Ok(SessionState {
            series,
            x_column,
            y_choices,
            selected_y,
            visible,
            styles,
        })
    }

    pub fn is_visible(&self, label: &str) -> bool {
        self.visible.get(label).copied().unwrap_or(true)
    }

    /// Flip one series' visibility; every other series is untouched.
    pub fn toggle_visibility(&mut self, label: &str) {
        let entry = self.visible.entry(label.to_string()).or_insert(true);
        *entry = !*entry;
    }

    pub fn style_for(&self, label: &str) -> SeriesStyle {
        self.styles.get(label).copied().unwrap_or_default()
    }

    /// Switch the plotted Y column. Ignores unknown columns; never touches
    /// visibility.
    pub fn select_y(&mut self, column: &str) {
        if self.y_choices.iter().any(|c| c == column) {
            self.selected_y = column.to_string();
        }
    }

    pub fn hidden_count(&self) -> usize {
        self.series
            .iter()
            .filter(|s| !self.is_visible(&s.label))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(label: &str, columns: &[&str]) -> Series {
        Series {
            label: label.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            values: columns.iter().map(|_| vec![0.0, 1.0]).collect(),
        }
    }

    fn session() -> SessionState {
        SessionState::new(vec![
            series("run_full_1.csv", &["t", "fps", "ms"]),
            series("run_gold.csv", &["t", "fps", "ms"]),
        ])
        .unwrap()
    }

    #[test]
    fn schema_comes_from_first_series() {
        let state = session();
        assert_eq!(state.x_column, "t");
        assert_eq!(state.y_choices, vec!["fps", "ms"]);
        assert_eq!(state.selected_y, "fps");
    }

    #[test]
    fn empty_series_set_is_an_error() {
        assert!(SessionState::new(Vec::new()).is_err());
    }

    #[test]
    fn all_series_start_visible() {
        let state = session();
        assert!(state.is_visible("run_full_1.csv"));
        assert!(state.is_visible("run_gold.csv"));
        assert_eq!(state.hidden_count(), 0);
    }

    #[test]
    fn toggle_affects_only_one_series() {
        let mut state = session();
        state.toggle_visibility("run_gold.csv");
        assert!(!state.is_visible("run_gold.csv"));
        assert!(state.is_visible("run_full_1.csv"));
        state.toggle_visibility("run_gold.csv");
        assert!(state.is_visible("run_gold.csv"));
    }

    #[test]
    fn hidden_series_survives_y_axis_change() {
        let mut state = session();
        state.toggle_visibility("run_full_1.csv");
        state.select_y("ms");
        assert_eq!(state.selected_y, "ms");
        assert!(!state.is_visible("run_full_1.csv"));
        assert!(state.is_visible("run_gold.csv"));
    }

    #[test]
    fn unknown_y_column_is_ignored() {
        let mut state = session();
        state.select_y("nope");
        assert_eq!(state.selected_y, "fps");
    }
}
