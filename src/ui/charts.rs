use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::ColorMap;
use crate::data::summary::{
    CategoryCount, HistogramBin, LabelledSalary, COUNTRY_FOCUS_TITLE, TOP_TITLES,
};
use crate::format;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 280.0;

const BAR_COLOR: Color32 = Color32::from_rgb(99, 110, 250);

// ---------------------------------------------------------------------------
// Chart grid (central panel)
// ---------------------------------------------------------------------------

/// Render the four charts in two rows of two.
///
/// The plots are static: they are read, not explored.
pub fn charts(ui: &mut Ui, state: &AppState) {
    let summary = &state.summary;

    ui.heading("📊 Visual analysis");

    ui.columns(2, |cols: &mut [Ui]| {
        top_titles_chart(&mut cols[0], &summary.top_titles);
        salary_histogram_chart(&mut cols[1], &summary.histogram);
    });

    ui.add_space(8.0);

    ui.columns(2, |cols: &mut [Ui]| {
        work_mode_chart(&mut cols[0], &summary.work_modes, &state.work_mode_colors);
        country_chart(&mut cols[1], &summary.country_salaries);
    });
}

/// Axis label for a category plotted at integer position `value`.
fn category_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

fn top_titles_chart(ui: &mut Ui, titles: &[LabelledSalary]) {
    ui.strong(format!("Top {TOP_TITLES} job titles by mean salary"));

    // Highest mean at the top of the horizontal chart.
    let labels: Vec<String> = titles.iter().rev().map(|t| t.label.clone()).collect();
    let bars: Vec<Bar> = titles
        .iter()
        .rev()
        .enumerate()
        .map(|(i, t)| {
            Bar::new(i as f64, t.mean_salary)
                .name(format!("{}: {}", t.label, format::usd(t.mean_salary)))
                .width(0.7)
        })
        .collect();

    let bar_chart = BarChart::new(bars)
        .horizontal()
        .color(BAR_COLOR)
        .name("Mean annual salary (USD)");

    Plot::new("top_titles")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Mean annual salary (USD)")
        .y_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| plot_ui.bar_chart(bar_chart));
}

fn salary_histogram_chart(ui: &mut Ui, bins: &[HistogramBin]) {
    ui.strong("Distribution of annual salaries");

    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width().max(1.0))
                .name(format!("{} to {}", format::usd(b.start), format::usd(b.end)))
        })
        .collect();

    let bar_chart = BarChart::new(bars).color(BAR_COLOR).name("Records");

    Plot::new("salary_histogram")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Salary range (USD)")
        .y_axis_label("Records")
        .show(ui, |plot_ui| plot_ui.bar_chart(bar_chart));
}

fn work_mode_chart(ui: &mut Ui, modes: &[CategoryCount], colors: &ColorMap) {
    ui.strong("Share of work modes");

    let total: usize = modes.iter().map(|m| m.count).sum();
    if total == 0 {
        return;
    }

    let labels: Vec<String> = modes.iter().map(|m| m.category.clone()).collect();
    let bars: Vec<Bar> = modes
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let share = 100.0 * m.count as f64 / total as f64;
            Bar::new(i as f64, share)
                .name(format!("{}: {share:.1}%", m.category))
                .fill(colors.color_for(&m.category))
                .width(0.6)
        })
        .collect();

    let bar_chart = BarChart::new(bars).name("Share of records (%)");

    Plot::new("work_modes")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .y_axis_label("Share of records (%)")
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| plot_ui.bar_chart(bar_chart));
}

fn country_chart(ui: &mut Ui, countries: &[LabelledSalary]) {
    ui.strong(format!("Mean {COUNTRY_FOCUS_TITLE} salary by country"));

    if countries.is_empty() {
        ui.label(format!(
            "⚠ No '{COUNTRY_FOCUS_TITLE}' records under the current filters to chart by country."
        ));
        return;
    }

    let labels: Vec<String> = countries.iter().map(|c| c.label.clone()).collect();
    let bars: Vec<Bar> = countries
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.mean_salary)
                .name(format!("{}: {}", c.label, format::usd(c.mean_salary)))
                .width(0.6)
        })
        .collect();

    let bar_chart = BarChart::new(bars)
        .color(Color32::from_rgb(0, 170, 110))
        .name("Mean salary (USD)");

    Plot::new("country_salaries")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .y_axis_label("Mean salary (USD)")
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| plot_ui.bar_chart(bar_chart));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_only_on_integer_marks() {
        let labels = vec!["BRA".to_string(), "USA".to_string()];
        assert_eq!(category_label(&labels, 0.0), "BRA");
        assert_eq!(category_label(&labels, 1.0), "USA");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }
}
