//! Salary dashboard: load a table of data-field salaries, filter it by year,
//! seniority, contract and company, and explore the result in an egui window.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod format;
pub mod state;
pub mod ui;
