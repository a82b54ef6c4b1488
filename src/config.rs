//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Default location of the salary table, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/dados-final.csv";

#[derive(Debug, Parser)]
#[command(
    name = "salary-dashboard",
    version,
    about = "Explore data-field salaries by year, seniority, contract and company"
)]
pub struct Cli {
    /// Salary table to load at startup (.csv, .json or .parquet).
    #[arg(
        long = "data",
        value_name = "PATH",
        env = "SALARY_DASHBOARD_DATA",
        default_value = DEFAULT_DATA_PATH
    )]
    pub data: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_path() {
        let cli = Cli::try_parse_from(["salary-dashboard"]).unwrap();
        assert_eq!(cli.data, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn explicit_data_path() {
        let cli = Cli::try_parse_from(["salary-dashboard", "--data", "other.parquet"]).unwrap();
        assert_eq!(cli.data, PathBuf::from("other.parquet"));
    }
}
