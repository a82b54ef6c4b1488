use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::Dimension;
use crate::format;
use crate::state::AppState;
use crate::ui::{charts, metrics, table};

/// Longest a single dimension's value list grows before it scrolls.
const FILTER_LIST_HEIGHT: f32 = 220.0;

const WARNING_COLOR: Color32 = Color32::from_rgb(230, 160, 0);

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔍 Filters");
    ui.separator();

    ScrollArea::vertical()
        .id_salt("filters")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for dimension in Dimension::ALL {
                dimension_filter(ui, state, dimension);
            }
        });
}

/// One collapsible multiselect for a dimension.
fn dimension_filter(ui: &mut Ui, state: &mut AppState, dimension: Dimension) {
    let values = state.dataset.distinct_values(dimension);

    // Show count of selected / total in the header
    let n_selected = state.selection.selected_count(dimension);
    let header_text = format!("{dimension}  ({n_selected}/{})", values.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(dimension.label())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(dimension);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(dimension);
                }
            });

            if state.selection.selected_count(dimension) == 0 {
                ui.label(RichText::new("Nothing selected: not filtering").italics().weak());
            }

            ScrollArea::vertical()
                .id_salt(("filter_values", dimension.label()))
                .max_height(FILTER_LIST_HEIGHT)
                .show(ui, |ui: &mut Ui| {
                    for value in &values {
                        let mut checked = state.selection.contains(dimension, value);
                        if ui.checkbox(&mut checked, value.as_str()).changed() {
                            state.toggle_filter_value(dimension, value);
                        }
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} records loaded, {} shown",
            format::count(state.dataset.len()),
            format::count(state.result.len())
        ));

        ui.separator();

        ui.label(RichText::new(state.source.display().to_string()).weak());

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Header, then either the empty-result notice or metrics, charts and table.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .id_salt("dashboard")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("🎲 Data-field salary dashboard");
            ui.label(
                "Explore salaries in the data field over recent years. \
                 Use the filters on the left to refine the analysis.",
            );
            ui.add_space(8.0);

            if state.result.is_empty() {
                ui.colored_label(
                    WARNING_COLOR,
                    "⚠ No records match the selected combination of filters.",
                );
                ui.label("Try adjusting the filters in the side panel to get results.");
                return;
            }

            metrics::metric_row(ui, &state.summary.metrics);

            ui.add_space(8.0);
            ui.separator();
            charts::charts(ui, state);

            ui.add_space(8.0);
            ui.separator();
            table::detail_table(ui, &state.result);
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open salary data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
