use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use salary_dashboard::app::SalaryDashboardApp;
use salary_dashboard::config::Cli;
use salary_dashboard::data::load_file;
use salary_dashboard::state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // No fallback: the dashboard has nothing to show without its table.
    let dataset = load_file(&cli.data)
        .with_context(|| format!("loading salary data from {}", cli.data.display()))?;
    let state = AppState::new(Arc::new(dataset), cli.data);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Salary Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(SalaryDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
