// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::error::LocaleError;

#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub source: SourceOptions,
    pub filter: FilterOptions,
    pub locale: NumberLocale,
    pub output: OutputOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            filter: FilterOptions::default(),
            locale: NumberLocale::default(),
            output: OutputOptions::default(),
        }
    }
}

/// Where the statistics (and optional allowlist) come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub url: String,
    pub allowlist_url: Option<String>,
    pub layout: ColumnLayout,
    pub fetch: FetchOptions,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: s!(STATS_URL),
            allowlist_url: None,
            layout: ColumnLayout::default(),
            fetch: FetchOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

/// 1-based `<td>` positions of the figures within a country row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name_class: String,
    pub total_cases: usize,
    pub total_deaths: usize,
    pub total_tests: usize,
    pub tests_per_million: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            name_class: s!(NAME_CLASS),
            total_cases: CELL_TOTAL_CASES,
            total_deaths: CELL_TOTAL_DEATHS,
            total_tests: CELL_TOTAL_TESTS,
            tests_per_million: CELL_TESTS_PER_MILLION,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterOptions {
    pub min_tests_per_million: i64,
    pub min_population: f64,
    /// Skip rows with an empty total-tests cell instead of failing to parse them.
    pub require_total_tests: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_tests_per_million: MIN_TESTS_PER_MILLION,
            min_population: MIN_POPULATION,
            require_total_tests: false,
        }
    }
}

/// Separators used by the source page when printing numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberLocale {
    pub grouping: char,
    pub decimal: char,
}

impl NumberLocale {
    pub fn new(grouping: char, decimal: char) -> Result<Self, LocaleError> {
        if grouping == decimal {
            return Err(LocaleError(grouping));
        }
        Ok(Self { grouping, decimal })
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self { grouping: GROUPING_SEP, decimal: DECIMAL_SEP }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Table,
    Csv,
    Tsv,
}

impl ReportFormat {
    pub fn delim(&self) -> Option<char> {
        match self {
            ReportFormat::Table => None,
            ReportFormat::Csv => Some(','),
            ReportFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: ReportFormat,
    /// `None` → stdout.
    pub out: Option<PathBuf>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { format: ReportFormat::Table, out: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_new_checks_separators() {
        assert_eq!(NumberLocale::new('.', ','), Ok(NumberLocale { grouping: '.', decimal: ',' }));
        assert_eq!(NumberLocale::new(',', ','), Err(LocaleError(',')));
        assert_eq!(NumberLocale::new(GROUPING_SEP, DECIMAL_SEP), Ok(NumberLocale::default()));
    }
}
