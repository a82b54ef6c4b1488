use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Dimension – the four filterable record attributes
// ---------------------------------------------------------------------------

/// A filterable attribute of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Year,
    Seniority,
    Contract,
    Company,
}

impl Dimension {
    /// All dimensions, in the order the filter engine evaluates them.
    pub const ALL: [Dimension; 4] = [
        Dimension::Year,
        Dimension::Seniority,
        Dimension::Contract,
        Dimension::Company,
    ];

    /// The three string-valued dimensions.
    pub const CATEGORICAL: [Dimension; 3] =
        [Dimension::Seniority, Dimension::Contract, Dimension::Company];

    /// Human-readable label used by the filter panel.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Year => "Year",
            Dimension::Seniority => "Seniority",
            Dimension::Contract => "Contract",
            Dimension::Company => "Company",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the salary table
// ---------------------------------------------------------------------------

/// A single salary observation.
///
/// Field renames follow the column names of the source table; any other
/// column present in the file is ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "senioridade")]
    pub seniority: String,
    #[serde(rename = "contrato")]
    pub contract: String,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "cargo")]
    pub job_title: String,
    /// Annual salary in USD.
    #[serde(rename = "usd")]
    pub salary_usd: f64,
    /// Remote-work category (remote, hybrid, on-site).
    #[serde(rename = "remoto")]
    pub work_mode: String,
    /// ISO-3166 alpha-3 country of residence. Display only.
    #[serde(rename = "residencia_iso3")]
    pub country_iso3: String,
}

impl Record {
    /// The value of a categorical dimension, or `None` for [`Dimension::Year`].
    pub fn categorical(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Year => None,
            Dimension::Seniority => Some(&self.seniority),
            Dimension::Contract => Some(&self.contract),
            Dimension::Company => Some(&self.company),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed distinct values per dimension.
///
/// Immutable once built: there is no way to add, remove or edit a record.
/// Share it behind an `Arc` when several owners need it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    years: BTreeSet<i32>,
    categories: BTreeMap<Dimension, BTreeSet<String>>,
}

impl Dataset {
    /// Build the distinct-value indices from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut years = BTreeSet::new();
        let mut categories: BTreeMap<Dimension, BTreeSet<String>> = BTreeMap::new();

        for record in &records {
            years.insert(record.year);
            for dimension in Dimension::CATEGORICAL {
                if let Some(value) = record.categorical(dimension) {
                    categories
                        .entry(dimension)
                        .or_default()
                        .insert(value.to_string());
                }
            }
        }

        Dataset {
            records,
            years,
            categories,
        }
    }

    /// All records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years, ascending.
    pub fn distinct_years(&self) -> Vec<i32> {
        self.years.iter().copied().collect()
    }

    /// Distinct values of a dimension, sorted and deduplicated.
    ///
    /// Categorical dimensions sort lexicographically. Years are rendered as
    /// strings but keep numeric order.
    pub fn distinct_values(&self, dimension: Dimension) -> Vec<String> {
        match dimension {
            Dimension::Year => self.years.iter().map(i32::to_string).collect(),
            _ => self
                .categories
                .get(&dimension)
                .map(|values| values.iter().cloned().collect())
                .unwrap_or_default(),
        }
    }

    pub(crate) fn year_set(&self) -> &BTreeSet<i32> {
        &self.years
    }

    pub(crate) fn category_set(&self, dimension: Dimension) -> Option<&BTreeSet<String>> {
        self.categories.get(&dimension)
    }
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Dataset, Record};

    #[allow(clippy::too_many_arguments)]
    pub fn record(
        year: i32,
        seniority: &str,
        contract: &str,
        company: &str,
        job_title: &str,
        salary_usd: f64,
        work_mode: &str,
        country_iso3: &str,
    ) -> Record {
        Record {
            year,
            seniority: seniority.into(),
            contract: contract.into(),
            company: company.into(),
            job_title: job_title.into(),
            salary_usd,
            work_mode: work_mode.into(),
            country_iso3: country_iso3.into(),
        }
    }

    /// The four-row sample used throughout the unit tests.
    pub fn sample_records() -> Vec<Record> {
        vec![
            record(2023, "Junior", "Integral", "Empresa A", "Data Analyst", 50_000.0, "remoto", "BRA"),
            record(2024, "Senior", "Integral", "Empresa B", "Data Scientist", 100_000.0, "hibrido", "USA"),
            record(2025, "Senior", "PJ", "Empresa A", "Data Scientist", 120_000.0, "remoto", "USA"),
            record(2025, "Lead", "Integral", "Empresa C", "Data Engineer", 150_000.0, "presencial", "GBR"),
        ]
    }

    pub fn sample_dataset() -> Dataset {
        Dataset::from_records(sample_records())
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_dataset;
    use super::*;

    #[test]
    fn distinct_years_are_sorted_and_unique() {
        let dataset = sample_dataset();
        assert_eq!(dataset.distinct_years(), vec![2023, 2024, 2025]);
    }

    #[test]
    fn distinct_values_per_dimension() {
        let dataset = sample_dataset();
        assert_eq!(
            dataset.distinct_values(Dimension::Seniority),
            vec!["Junior", "Lead", "Senior"]
        );
        assert_eq!(
            dataset.distinct_values(Dimension::Contract),
            vec!["Integral", "PJ"]
        );
        assert_eq!(
            dataset.distinct_values(Dimension::Company),
            vec!["Empresa A", "Empresa B", "Empresa C"]
        );
        assert_eq!(
            dataset.distinct_values(Dimension::Year),
            vec!["2023", "2024", "2025"]
        );
    }

    #[test]
    fn year_strings_keep_numeric_order() {
        let mut records = super::fixtures::sample_records();
        records[0].year = 999;
        let dataset = Dataset::from_records(records);
        assert_eq!(
            dataset.distinct_values(Dimension::Year),
            vec!["999", "2024", "2025"]
        );
    }

    #[test]
    fn empty_dataset_has_no_values() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.distinct_years().is_empty());
        assert!(dataset.distinct_values(Dimension::Company).is_empty());
    }

    #[test]
    fn record_categorical_accessor() {
        let dataset = sample_dataset();
        let first = &dataset.records()[0];
        assert_eq!(first.categorical(Dimension::Seniority), Some("Junior"));
        assert_eq!(first.categorical(Dimension::Company), Some("Empresa A"));
        assert_eq!(first.categorical(Dimension::Year), None);
    }
}
