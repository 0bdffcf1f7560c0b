use eframe::egui::{self, Label, RichText, ScrollArea, Sense, Stroke, Ui};

use crate::state::SessionState;

// ---------------------------------------------------------------------------
// Top bar – axis controls
// ---------------------------------------------------------------------------

/// Render the top control bar: fixed X column, Y-axis combobox, counts, Exit.
pub fn top_bar(ui: &mut Ui, state: &mut SessionState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label("X-axis:");
        ui.strong(&state.x_column);
        ui.separator();

        ui.label("Y-axis:");
        let current = state.selected_y.clone();
        egui::ComboBox::from_id_salt("y_axis")
            .selected_text(&current)
            .show_ui(ui, |ui: &mut Ui| {
                for col in state.y_choices.clone() {
                    if ui.selectable_label(current == col, &col).clicked() {
                        state.select_y(&col);
                    }
                }
            });
        ui.separator();

        let hidden = state.hidden_count();
        ui.label(format!("{} series, {hidden} hidden", state.series.len()));

        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui: &mut Ui| {
                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            },
        );
    });
}

// ---------------------------------------------------------------------------
// Legend panel – per-series visibility toggles
// ---------------------------------------------------------------------------

/// Render the legend as clickable entries built from the fixed style map.
///
/// Entries never disappear: a hidden series is shown dimmed, and clicking
/// its swatch or label toggles only that series.
pub fn legend_panel(ui: &mut Ui, state: &mut SessionState) {
    ui.heading("Series");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let labels: Vec<String> = state.series.iter().map(|s| s.label.clone()).collect();
            for label in labels {
                if legend_entry(ui, state, &label).clicked() {
                    state.toggle_visibility(&label);
                }
            }
        });
}

/// One legend row: a line swatch plus the series label, dimmed when hidden.
fn legend_entry(ui: &mut Ui, state: &SessionState, label: &str) -> egui::Response {
    let style = state.style_for(label);
    let color = if state.is_visible(label) {
        style.color
    } else {
        style.dimmed()
    };

    ui.horizontal(|ui: &mut Ui| {
        let (rect, swatch) = ui.allocate_exact_size(egui::vec2(18.0, 12.0), Sense::click());
        ui.painter().line_segment(
            [rect.left_center(), rect.right_center()],
            Stroke::new(style.width + 1.0, color),
        );

        let text = ui.add(Label::new(RichText::new(label).color(color)).sense(Sense::click()));
        swatch.union(text)
    })
    .inner
}
