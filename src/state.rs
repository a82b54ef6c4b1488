use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::filter::{filter, FilterSelection, FilteredResult};
use crate::data::loader::load_file;
use crate::data::model::{Dataset, Dimension};
use crate::data::summary::DashboardSummary;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, never mutated; replaced wholesale when a file is opened.
    pub dataset: Arc<Dataset>,

    /// File the dataset came from.
    pub source: PathBuf,

    /// Accepted values per dimension.
    pub selection: FilterSelection,

    /// Records passing the current selection.
    pub result: FilteredResult,

    /// Metrics and chart series for `result`.
    pub summary: DashboardSummary,

    /// Colour per work-mode category.
    pub work_mode_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start with every value selected, as the dashboard opens.
    pub fn new(dataset: Arc<Dataset>, source: PathBuf) -> Self {
        let selection = FilterSelection::all(&dataset);
        let work_mode_colors = work_mode_colors(&dataset);
        let mut state = Self {
            dataset,
            source,
            selection,
            result: FilteredResult::default(),
            summary: DashboardSummary::default(),
            work_mode_colors,
            status_message: None,
        };
        state.refilter();
        state
    }

    /// Swap in a newly loaded dataset and reset the filters.
    pub fn set_dataset(&mut self, dataset: Dataset, source: PathBuf) {
        *self = Self::new(Arc::new(dataset), source);
    }

    /// Load `path`, keeping the current dataset if that fails.
    pub fn open(&mut self, path: &Path) {
        match load_file(path) {
            Ok(dataset) => self.set_dataset(dataset, path.to_path_buf()),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Recompute the filtered result and its summary.
    pub fn refilter(&mut self) {
        self.result = filter(&self.dataset, &self.selection);
        self.summary = DashboardSummary::from_records(self.result.records());
        log::debug!(
            "{} of {} records match the current filters",
            self.result.len(),
            self.dataset.len()
        );
    }

    /// Toggle a single value in a dimension's selection.
    pub fn toggle_filter_value(&mut self, dimension: Dimension, value: &str) {
        self.selection.toggle(dimension, value);
        self.refilter();
    }

    /// Select every value of a dimension.
    pub fn select_all(&mut self, dimension: Dimension) {
        self.selection.select_all(dimension, &self.dataset);
        self.refilter();
    }

    /// Deselect every value of a dimension, which lifts its constraint.
    pub fn select_none(&mut self, dimension: Dimension) {
        self.selection.clear(dimension);
        self.refilter();
    }
}

fn work_mode_colors(dataset: &Dataset) -> ColorMap {
    let modes: BTreeSet<&str> = dataset
        .records()
        .iter()
        .map(|r| r.work_mode.as_str())
        .collect();
    ColorMap::new(modes)
}
