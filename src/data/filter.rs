use std::collections::BTreeSet;

use super::model::{Dataset, Dimension, Record};

// ---------------------------------------------------------------------------
// Filter selection: which values are accepted per dimension
// ---------------------------------------------------------------------------

/// Accepted values per dimension.
///
/// An empty set means "no constraint" for that dimension, so the default
/// selection accepts every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub years: BTreeSet<i32>,
    pub seniority: BTreeSet<String>,
    pub contract: BTreeSet<String>,
    pub company: BTreeSet<String>,
}

impl FilterSelection {
    /// A selection with every distinct value of `dataset` accepted.
    pub fn all(dataset: &Dataset) -> Self {
        let categories = |dimension| dataset.category_set(dimension).cloned().unwrap_or_default();
        Self {
            years: dataset.year_set().clone(),
            seniority: categories(Dimension::Seniority),
            contract: categories(Dimension::Contract),
            company: categories(Dimension::Company),
        }
    }

    pub fn with_years<I: IntoIterator<Item = i32>>(mut self, years: I) -> Self {
        self.years = years.into_iter().collect();
        self
    }

    pub fn with_seniority<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seniority = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_contract<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contract = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_company<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.company = values.into_iter().map(Into::into).collect();
        self
    }

    /// True when no dimension carries a constraint.
    pub fn is_unconstrained(&self) -> bool {
        Dimension::ALL.iter().all(|&d| self.selected_count(d) == 0)
    }

    /// Number of accepted values for a dimension.
    pub fn selected_count(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Year => self.years.len(),
            _ => self.category(dimension).len(),
        }
    }

    /// Whether `value` is accepted for `dimension`.
    ///
    /// Year values are compared after parsing; an unparsable year is never
    /// contained.
    pub fn contains(&self, dimension: Dimension, value: &str) -> bool {
        match dimension {
            Dimension::Year => value
                .parse::<i32>()
                .map(|y| self.years.contains(&y))
                .unwrap_or(false),
            _ => self.category(dimension).contains(value),
        }
    }

    /// Add `value` to the accepted set, or remove it if already present.
    pub fn toggle(&mut self, dimension: Dimension, value: &str) {
        match dimension {
            Dimension::Year => {
                let Ok(year) = value.parse::<i32>() else {
                    return;
                };
                if !self.years.remove(&year) {
                    self.years.insert(year);
                }
            }
            _ => {
                let set = self.category_mut(dimension);
                if !set.remove(value) {
                    set.insert(value.to_string());
                }
            }
        }
    }

    /// Accept every distinct value `dataset` has for `dimension`.
    pub fn select_all(&mut self, dimension: Dimension, dataset: &Dataset) {
        match dimension {
            Dimension::Year => self.years = dataset.year_set().clone(),
            _ => {
                *self.category_mut(dimension) =
                    dataset.category_set(dimension).cloned().unwrap_or_default();
            }
        }
    }

    /// Drop every accepted value, lifting the constraint on `dimension`.
    pub fn clear(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Year => self.years.clear(),
            _ => self.category_mut(dimension).clear(),
        }
    }

    /// A record passes when it satisfies every non-empty dimension set.
    pub fn accepts(&self, record: &Record) -> bool {
        (self.years.is_empty() || self.years.contains(&record.year))
            && accepts_value(&self.seniority, &record.seniority)
            && accepts_value(&self.contract, &record.contract)
            && accepts_value(&self.company, &record.company)
    }

    fn category(&self, dimension: Dimension) -> &BTreeSet<String> {
        match dimension {
            Dimension::Seniority => &self.seniority,
            Dimension::Contract => &self.contract,
            Dimension::Company | Dimension::Year => &self.company,
        }
    }

    fn category_mut(&mut self, dimension: Dimension) -> &mut BTreeSet<String> {
        match dimension {
            Dimension::Seniority => &mut self.seniority,
            Dimension::Contract => &mut self.contract,
            Dimension::Company | Dimension::Year => &mut self.company,
        }
    }
}

fn accepts_value(selected: &BTreeSet<String>, value: &str) -> bool {
    selected.is_empty() || selected.contains(value)
}

// ---------------------------------------------------------------------------
// Filtered result
// ---------------------------------------------------------------------------

/// Records that passed a [`FilterSelection`], in dataset order.
///
/// Owns its records; nothing in it aliases the source dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredResult {
    records: Vec<Record>,
}

impl FilteredResult {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a FilteredResult {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Return the records of `dataset` that pass `selection`.
///
/// Never fails: unknown values simply match nothing and an empty result is a
/// valid outcome.
pub fn filter(dataset: &Dataset, selection: &FilterSelection) -> FilteredResult {
    let records: Vec<Record> = dataset
        .records()
        .iter()
        .filter(|record| selection.accepts(record))
        .cloned()
        .collect();

    log::debug!("filter kept {} of {} records", records.len(), dataset.len());

    FilteredResult { records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::{sample_dataset, sample_records};

    #[test]
    fn empty_selection_returns_everything() {
        let dataset = sample_dataset();
        let result = filter(&dataset, &FilterSelection::default());
        assert_eq!(result.len(), 4);
        assert_eq!(result.records(), dataset.records());
    }

    #[test]
    fn filters_by_year() {
        let dataset = sample_dataset();
        let result = filter(&dataset, &FilterSelection::default().with_years([2025]));
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.year == 2025));
    }

    #[test]
    fn combines_dimensions_with_and() {
        let dataset = sample_dataset();
        let selection = FilterSelection::default()
            .with_years([2025])
            .with_seniority(["Senior"]);
        let result = filter(&dataset, &selection);
        assert_eq!(result.len(), 1);
        assert_eq!(result.records()[0].job_title, "Data Scientist");
    }

    #[test]
    fn unknown_value_yields_empty_result() {
        let dataset = sample_dataset();
        let result = filter(&dataset, &FilterSelection::default().with_years([2020]));
        assert!(result.is_empty());
    }

    #[test]
    fn contract_and_company_constraints() {
        let dataset = sample_dataset();
        let selection = FilterSelection::default()
            .with_contract(["Integral"])
            .with_company(["Empresa A", "Empresa C"]);
        let result = filter(&dataset, &selection);
        let years: Vec<i32> = result.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2023, 2025]);
    }

    #[test]
    fn full_selection_matches_empty_selection() {
        let dataset = sample_dataset();
        let all = filter(&dataset, &FilterSelection::all(&dataset));
        let none = filter(&dataset, &FilterSelection::default());
        assert_eq!(all, none);
    }

    #[test]
    fn dataset_is_untouched_by_filtering() {
        let dataset = sample_dataset();
        let _ = filter(&dataset, &FilterSelection::default().with_years([2024]));
        assert_eq!(dataset.records(), sample_records().as_slice());
    }

    #[test]
    fn toggle_and_clear() {
        let dataset = sample_dataset();
        let mut selection = FilterSelection::all(&dataset);
        selection.toggle(Dimension::Seniority, "Lead");
        assert!(!selection.contains(Dimension::Seniority, "Lead"));
        assert_eq!(selection.selected_count(Dimension::Seniority), 2);

        selection.toggle(Dimension::Year, "2023");
        assert!(!selection.contains(Dimension::Year, "2023"));
        selection.toggle(Dimension::Year, "2023");
        assert!(selection.contains(Dimension::Year, "2023"));

        selection.clear(Dimension::Seniority);
        assert_eq!(selection.selected_count(Dimension::Seniority), 0);
        selection.select_all(Dimension::Seniority, &dataset);
        assert_eq!(selection.selected_count(Dimension::Seniority), 3);
    }

    #[test]
    fn unparsable_year_is_ignored() {
        let mut selection = FilterSelection::default();
        selection.toggle(Dimension::Year, "not-a-year");
        assert!(selection.is_unconstrained());
        assert!(!selection.contains(Dimension::Year, "not-a-year"));
    }
}
