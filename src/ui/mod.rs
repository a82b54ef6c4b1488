//! egui rendering. Everything here reads [`crate::state::AppState`]; only the
//! filter panel and the file menu mutate it.

pub mod charts;
pub mod metrics;
pub mod panels;
pub mod table;
