use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::model::Record;

/// Number of job titles in the "top salaries" chart.
pub const TOP_TITLES: usize = 10;

/// Number of buckets in the salary histogram.
pub const HISTOGRAM_BINS: usize = 30;

/// Job title whose salaries are broken down per country.
pub const COUNTRY_FOCUS_TITLE: &str = "Data Scientist";

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryMetrics {
    pub total_records: usize,
    /// `None` when there are no records.
    pub mean_salary: Option<f64>,
    pub max_salary: Option<f64>,
    /// Most common job title; ties go to the alphabetically first title.
    pub most_frequent_title: Option<String>,
}

impl SalaryMetrics {
    pub fn from_records(records: &[Record]) -> Self {
        let max_salary = records
            .iter()
            .map(|r| r.salary_usd)
            .max_by(f64::total_cmp);

        let mut title_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in records {
            *title_counts.entry(record.job_title.as_str()).or_default() += 1;
        }
        // BTreeMap iterates alphabetically; keep the first title at the max count.
        let most_frequent_title = title_counts
            .into_iter()
            .fold(None::<(&str, usize)>, |best, (title, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((title, count)),
            })
            .map(|(title, _)| title.to_string());

        SalaryMetrics {
            total_records: records.len(),
            mean_salary: mean(records.iter().map(|r| r.salary_usd)),
            max_salary,
            most_frequent_title,
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Mean salary per key, keys in ascending order.
fn mean_by<'a, F>(records: impl Iterator<Item = &'a Record>, key: F) -> BTreeMap<&'a str, f64>
where
    F: Fn(&'a Record) -> &'a str,
{
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(key(record)).or_default();
        entry.0 += record.salary_usd;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

/// A label with its mean salary.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledSalary {
    pub label: String,
    pub mean_salary: f64,
}

/// The `n` job titles with the highest mean salary, highest first.
pub fn top_titles_by_mean_salary(records: &[Record], n: usize) -> Vec<LabelledSalary> {
    let mut means: Vec<LabelledSalary> = mean_by(records.iter(), |r| r.job_title.as_str())
        .into_iter()
        .map(|(label, mean_salary)| LabelledSalary {
            label: label.to_string(),
            mean_salary,
        })
        .collect();

    // Stable sort keeps alphabetical order among equal means.
    means.sort_by(|a, b| b.mean_salary.total_cmp(&a.mean_salary));
    means.truncate(n);
    means
}

/// Mean salary per country for records with the given job title, ordered by
/// country code.
pub fn mean_salary_by_country(records: &[Record], job_title: &str) -> Vec<LabelledSalary> {
    mean_by(
        records.iter().filter(|r| r.job_title == job_title),
        |r| r.country_iso3.as_str(),
    )
    .into_iter()
    .map(|(label, mean_salary)| LabelledSalary {
        label: label.to_string(),
        mean_salary,
    })
    .collect()
}

/// Occurrences of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Records per work-mode category, most frequent first.
pub fn work_mode_counts(records: &[Record]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.work_mode.as_str()).or_default() += 1;
    }

    let mut counts: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// One histogram bucket covering `[start, end)`; the last bucket also
/// includes `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Equal-width salary histogram spanning the observed min..max.
///
/// Returns no bins for empty input, and a single bin when every salary is
/// identical.
pub fn salary_histogram(records: &[Record], bins: usize) -> Vec<HistogramBin> {
    let salaries = records.iter().map(|r| r.salary_usd);
    let (Some(min), Some(max)) = (
        salaries.clone().min_by(f64::total_cmp),
        salaries.max_by(f64::total_cmp),
    ) else {
        return Vec::new();
    };

    if bins == 0 {
        return Vec::new();
    }

    if min.total_cmp(&max) == Ordering::Equal {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: records.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for record in records {
        let idx = (((record.salary_usd - min) / width) as usize).min(bins - 1);
        histogram[idx].count += 1;
    }
    histogram
}

// ---------------------------------------------------------------------------
// Everything the dashboard renders for one selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub metrics: SalaryMetrics,
    pub top_titles: Vec<LabelledSalary>,
    pub histogram: Vec<HistogramBin>,
    pub work_modes: Vec<CategoryCount>,
    pub country_salaries: Vec<LabelledSalary>,
}

impl DashboardSummary {
    pub fn from_records(records: &[Record]) -> Self {
        DashboardSummary {
            metrics: SalaryMetrics::from_records(records),
            top_titles: top_titles_by_mean_salary(records, TOP_TITLES),
            histogram: salary_histogram(records, HISTOGRAM_BINS),
            work_modes: work_mode_counts(records),
            country_salaries: mean_salary_by_country(records, COUNTRY_FOCUS_TITLE),
        }
    }
}
