// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::eyre;

use crate::config::consts::{ALLOWLIST_URL, STATS_URL};
use crate::config::options::{NumberLocale, ReportFormat, RunOptions};

/// Rank countries by inferred mortality rate (deaths over estimated infections).
///
/// With no flags: fetch the statistics page, keep countries with at least
/// 7000 tests per million and an implied population of 6 million, and print
/// a table sorted by mortality rate.
#[derive(Debug, Clone, Parser)]
#[command(name = "covid_rank", version, about)]
pub struct Cli {
    /// Statistics page to scrape
    #[arg(long, default_value = STATS_URL, env = "COVID_RANK_URL")]
    pub url: String,

    /// Drop countries testing less than this per million people
    #[arg(long = "min-tests-per-million", default_value_t = crate::config::consts::MIN_TESTS_PER_MILLION)]
    pub min_tests_per_million: i64,

    /// Drop countries whose implied population is below this
    #[arg(long = "min-population", default_value_t = crate::config::consts::MIN_POPULATION)]
    pub min_population: f64,

    /// Skip rows with no total-tests figure instead of failing on them
    #[arg(long = "require-total-tests")]
    pub require_total_tests: bool,

    /// Thousands separator used by the page
    #[arg(long, default_value_t = crate::config::consts::GROUPING_SEP)]
    pub grouping: char,

    /// Decimal separator used by the page
    #[arg(long, default_value_t = crate::config::consts::DECIMAL_SEP)]
    pub decimal: char,

    /// Only rank countries listed on the default allowlist page
    #[arg(long)]
    pub allowlist: bool,

    /// Only rank countries listed on this page (implies --allowlist)
    #[arg(long = "allowlist-url")]
    pub allowlist_url: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// HTTP timeout
    #[arg(long = "timeout-secs", default_value_t = crate::config::consts::TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Csv,
    Tsv,
}

impl From<Format> for ReportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Table => ReportFormat::Table,
            Format::Csv => ReportFormat::Csv,
            Format::Tsv => ReportFormat::Tsv,
        }
    }
}

impl Cli {
    pub fn to_options(&self) -> Result<RunOptions, String> {
        let locale = NumberLocale::new(self.grouping, self.decimal)
            .map_err(|e| format!("--grouping/--decimal: {e}"))?;

        let mut opts = RunOptions::default();

        opts.source.url = self.url.clone();
        opts.source.allowlist_url = match (&self.allowlist_url, self.allowlist) {
            (Some(url), _) => Some(url.clone()),
            (None, true) => Some(s!(ALLOWLIST_URL)),
            (None, false) => None,
        };
        opts.source.fetch.timeout = Duration::from_secs(self.timeout_secs);

        opts.filter.min_tests_per_million = self.min_tests_per_million;
        opts.filter.min_population = self.min_population;
        opts.filter.require_total_tests = self.require_total_tests;

        opts.locale = locale;

        opts.output.format = self.format.into();
        opts.output.out = self.out.clone();

        Ok(opts)
    }
}

/// Parse args, set up logging, run, print.
pub fn run() -> color_eyre::Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let opts = cli.to_options().map_err(|e| eyre!(e))?;
    let summary = crate::runner::run(&opts)?;

    match &summary.written {
        Some(path) => eprintln!("Wrote {}", path.display()),
        None => print!("{}", summary.rendered),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("covid_rank").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_match_defaults() {
        let opts = parse(&[]).to_options().unwrap();
        assert_eq!(opts, RunOptions::default());
    }

    #[test]
    fn allowlist_flags() {
        let opts = parse(&["--allowlist"]).to_options().unwrap();
        assert_eq!(opts.source.allowlist_url.as_deref(), Some(ALLOWLIST_URL));

        let opts = parse(&["--allowlist-url", "https://example.org/list"]).to_options().unwrap();
        assert_eq!(opts.source.allowlist_url.as_deref(), Some("https://example.org/list"));
    }

    #[test]
    fn thresholds_locale_and_output() {
        let cli = parse(&[
            "--min-tests-per-million", "100",
            "--min-population", "1000",
            "--require-total-tests",
            "--grouping", ".",
            "--decimal", ",",
            "--format", "tsv",
            "-o", "out/rank.tsv",
            "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        let opts = cli.to_options().unwrap();
        assert_eq!(opts.filter.min_tests_per_million, 100);
        assert_eq!(opts.filter.min_population, 1000.0);
        assert!(opts.filter.require_total_tests);
        assert_eq!(opts.locale.grouping, '.');
        assert_eq!(opts.locale.decimal, ',');
        assert_eq!(opts.output.format, ReportFormat::Tsv);
        assert_eq!(opts.output.out, Some(PathBuf::from("out/rank.tsv")));
    }

    #[test]
    fn same_separators_rejected() {
        assert!(parse(&["--grouping", "."]).to_options().is_err());
    }
}
