//! Data layer: core types, loading, filtering and summaries.
//!
//! Architecture:
//! ```text
//!  .csv / .json / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Dataset  (DataLoadError on failure)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Dataset  │  Vec<Record>, distinct values per dimension
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  FilterSelection → FilteredResult
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  summary  │  metrics + chart series for the dashboard
//!   └──────────┘
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;

pub use error::DataLoadError;
pub use filter::{filter, FilterSelection, FilteredResult};
pub use loader::load_file;
pub use model::{Dataset, Dimension, Record};
pub use summary::DashboardSummary;
