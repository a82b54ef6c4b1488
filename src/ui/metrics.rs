use eframe::egui::{RichText, Ui};

use crate::data::summary::SalaryMetrics;
use crate::format;

/// The four headline numbers, side by side.
pub fn metric_row(ui: &mut Ui, metrics: &SalaryMetrics) {
    ui.strong("Overall metrics (annual salary in USD)");
    ui.columns(4, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Mean salary", metrics.mean_salary.map(format::usd));
        metric(&mut cols[1], "Max salary", metrics.max_salary.map(format::usd));
        metric(
            &mut cols[2],
            "Total records",
            Some(format::count(metrics.total_records)),
        );
        metric(
            &mut cols[3],
            "Most frequent title",
            metrics.most_frequent_title.clone(),
        );
    });
}

fn metric(ui: &mut Ui, label: &str, value: Option<String>) {
    ui.group(|ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(label).weak());
        ui.heading(value.unwrap_or_else(|| "N/A".to_string()));
    });
}
