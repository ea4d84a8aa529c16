// src/pipeline.rs
//! Metric pipeline: raw country rows in, ranked `CountryMetrics` out.
//!
//! Per row, in order: dedup by name (first wins), optional allowlist, empty
//! field check, number parsing, testing-coverage filter, derived rates,
//! population filter. Survivors are stable-sorted by mortality rate.
//!
//! Pure: no I/O, no shared state.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::config::consts::PER_MILLION;
use crate::config::options::{FilterOptions, NumberLocale};
use crate::core::number::parse_locale_int;
use crate::error::ParseError;

/// A country's figures as displayed on the page. All fields may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawCountryRow {
    pub name: String,
    pub total_cases: String,
    pub total_deaths: String,
    pub total_tests: String,
    pub tests_per_million: String,
}

/// Derived rates for one country, as fractions (not percents).
#[derive(Clone, Debug, PartialEq)]
pub struct CountryMetrics {
    pub name: String,
    /// deaths / confirmed cases
    pub case_fatality_rate: f64,
    /// deaths / estimated infected population
    pub mortality_rate: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    Duplicate,
    NotAllowed,
    MissingField,
    LowTesting,
    SmallPopulation,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub seen: usize,
    pub kept: usize,
    pub duplicate: usize,
    pub not_allowed: usize,
    pub missing_field: usize,
    pub low_testing: usize,
    pub small_population: usize,
}

impl PipelineStats {
    fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Duplicate => self.duplicate += 1,
            SkipReason::NotAllowed => self.not_allowed += 1,
            SkipReason::MissingField => self.missing_field += 1,
            SkipReason::LowTesting => self.low_testing += 1,
            SkipReason::SmallPopulation => self.small_population += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.seen - self.kept
    }
}

/// Outcome of the pipeline.
#[derive(Clone, Debug, Default)]
pub struct Ranking {
    /// Ascending by mortality rate; ties keep input order.
    pub metrics: Vec<CountryMetrics>,
    pub stats: PipelineStats,
    /// Allowlist names that never appeared on the page, filtered or not.
    pub missing: Vec<String>,
}

/// Run every row through the filters, compute rates, and rank.
///
/// A non-empty field that doesn't parse aborts the whole run.
pub fn rank_countries<I>(
    rows: I,
    filter: &FilterOptions,
    locale: &NumberLocale,
    allowlist: Option<&HashSet<String>>,
) -> Result<Ranking, ParseError>
where
    I: IntoIterator<Item = RawCountryRow>,
{
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut stats = PipelineStats::default();
    let mut metrics = Vec::new();

    for row in rows {
        stats.seen += 1;

        let outcome = if !seen_names.insert(row.name.clone()) {
            Err(SkipReason::Duplicate)
        } else if allowlist.is_some_and(|names| !names.contains(&row.name)) {
            Err(SkipReason::NotAllowed)
        } else {
            evaluate_row(&row, filter, locale)?
        };

        match outcome {
            Ok(m) => metrics.push(m),
            Err(reason) => {
                debug!(country = %row.name, ?reason, "row skipped");
                stats.record(reason);
            }
        }
    }

    // stable: equal rates keep first-seen order
    metrics.sort_by(|a, b| cmp_rate(a.mortality_rate, b.mortality_rate));
    stats.kept = metrics.len();

    // every listed name crossed off on first sight, before any filter
    let missing = match allowlist {
        Some(names) => {
            let mut v: Vec<String> = names
                .iter()
                .filter(|n| !seen_names.contains(n.as_str()))
                .cloned()
                .collect();
            v.sort();
            v
        }
        None => Vec::new(),
    };

    Ok(Ranking { metrics, stats, missing })
}

/// Parse, filter and compute one row. Dedup is the caller's job.
///
/// Outer `Err` is fatal; inner `Err` is a silent skip.
pub fn evaluate_row(
    row: &RawCountryRow,
    filter: &FilterOptions,
    locale: &NumberLocale,
) -> Result<Result<CountryMetrics, SkipReason>, ParseError> {
    let required_empty = row.total_cases.is_empty()
        || row.total_deaths.is_empty()
        || row.tests_per_million.is_empty()
        || (filter.require_total_tests && row.total_tests.is_empty());
    if required_empty {
        return Ok(Err(SkipReason::MissingField));
    }

    let parse = |field: &'static str, text: &str| -> Result<i64, ParseError> {
        parse_locale_int(text, locale).map_err(|_| ParseError {
            country: row.name.clone(),
            field,
            text: s!(text),
        })
    };
    let total_cases = parse("total cases", &row.total_cases)?;
    let total_deaths = parse("total deaths", &row.total_deaths)?;
    let total_tests = parse("total tests", &row.total_tests)?;
    let tests_per_million = parse("tests per million", &row.tests_per_million)?;

    if tests_per_million < filter.min_tests_per_million {
        return Ok(Err(SkipReason::LowTesting));
    }

    let case_fatality_rate = total_deaths as f64 / total_cases as f64;

    let population = estimated_population(total_tests, tests_per_million);
    if population < filter.min_population {
        return Ok(Err(SkipReason::SmallPopulation));
    }
    let infection_rate = total_cases as f64 / total_tests as f64;
    let estimated_infected = population * infection_rate;
    let mortality_rate = total_deaths as f64 / estimated_infected;

    Ok(Ok(CountryMetrics {
        name: row.name.clone(),
        case_fatality_rate,
        mortality_rate,
    }))
}

/// Ascending, with NaN (0/0 rates) after every number whatever its sign bit.
fn cmp_rate(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Population implied by how many tests were run and the per-million rate.
pub fn estimated_population(total_tests: i64, tests_per_million: i64) -> f64 {
    (total_tests as f64 / tests_per_million as f64) * PER_MILLION
}
