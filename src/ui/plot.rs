use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::SessionState;

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// Render one line per visible series: shared X column vs the selected
/// Y column, each with its fixed style.
pub fn series_plot(ui: &mut Ui, state: &SessionState) {
    Plot::new("series_plot")
        .x_axis_label(state.x_column.clone())
        .y_axis_label(state.selected_y.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &state.series {
                if !state.is_visible(&series.label) {
                    continue;
                }
                // A series whose schema diverged from the canonical one
                // simply draws nothing for this column pair.
                let Some(points) = series.points(&state.x_column, &state.selected_y) else {
                    continue;
                };

                let style = state.style_for(&series.label);
                let line = Line::new(PlotPoints::from(points))
                    .name(&series.label)
                    .color(style.color)
                    .width(style.width);

                plot_ui.line(line);
            }
        });
}
