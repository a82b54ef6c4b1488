use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::FilteredResult;
use crate::data::model::Record;
use crate::format;

const HEADERS: [&str; 8] = [
    "Year",
    "Seniority",
    "Contract",
    "Company",
    "Job title",
    "Salary (USD)",
    "Work mode",
    "Country",
];

const ROW_HEIGHT: f32 = 18.0;
const TABLE_HEIGHT: f32 = 420.0;

/// Render every filtered record. Rows are virtualised, so large results are
/// cheap to show.
pub fn detail_table(ui: &mut Ui, result: &FilteredResult) {
    ui.heading("📋 Detailed data");
    ui.label(format!("Showing {} records.", format::count(result.len())));

    let records = result.records();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(TABLE_HEIGHT)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(60.0), HEADERS.len() - 1)
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let record = &records[row.index()];
                for cell in cells(record) {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

fn cells(record: &Record) -> [String; 8] {
    [
        record.year.to_string(),
        record.seniority.clone(),
        record.contract.clone(),
        record.company.clone(),
        record.job_title.clone(),
        format::usd(record.salary_usd),
        record.work_mode.clone(),
        record.country_iso3.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::sample_records;

    #[test]
    fn cells_line_up_with_headers() {
        let record = &sample_records()[1];
        let row = cells(record);
        assert_eq!(row.len(), HEADERS.len());
        assert_eq!(row[0], "2024");
        assert_eq!(row[5], "$100,000");
        assert_eq!(row[7], "USA");
    }
}
