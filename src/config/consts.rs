// src/config/consts.rs

// Net config
pub const STATS_URL: &str = "https://www.worldometers.info/coronavirus/";
pub const ALLOWLIST_URL: &str = "https://worldpopulationreview.com/countries/western-countries/";
pub const USER_AGENT: &str = concat!("covid_rank/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;

// Page layout (1-based cell positions inside a country row)
pub const NAME_CLASS: &str = "mt_a";
pub const CELL_TOTAL_CASES: usize = 2;
pub const CELL_TOTAL_DEATHS: usize = 4;
pub const CELL_TOTAL_TESTS: usize = 11;
pub const CELL_TESTS_PER_MILLION: usize = 12;

// Filters
pub const MIN_TESTS_PER_MILLION: i64 = 7_000;
pub const MIN_POPULATION: f64 = 6_000_000.0;
pub const PER_MILLION: f64 = 1_000_000.0;

// Number format
pub const GROUPING_SEP: char = ',';
pub const DECIMAL_SEP: char = '.';
