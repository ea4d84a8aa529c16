// src/runner.rs
//! fetch → extract → rank → render, wired from `RunOptions`.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::options::RunOptions;
use crate::core::net;
use crate::error::{ParseError, Result};
use crate::pipeline::{self, Ranking};
use crate::{file, report, specs};

/// Summary of what was produced.
pub struct RunSummary {
    pub ranking: Ranking,
    /// The rendered report, in the requested format.
    pub rendered: String,
    /// Set when the report went to a file instead of stdout.
    pub written: Option<PathBuf>,
}

/// Top-level runner. Network and parse failures end the run; nothing is retried.
pub fn run(opts: &RunOptions) -> Result<RunSummary> {
    let src = &opts.source;

    let allowlist = match &src.allowlist_url {
        Some(url) => Some(specs::allowlist::fetch_allowlist(url, &src.fetch)?),
        None => None,
    };

    let html_doc = net::http_get(&src.url, &src.fetch)?;
    let ranking = rank_page(&html_doc, opts, allowlist.as_ref())?;

    let rendered = report::render(&ranking.metrics, opts.output.format);
    let written = match &opts.output.out {
        Some(path) => {
            file::write_report(path, &rendered)?;
            info!(path = %path.display(), "report written");
            Some(path.clone())
        }
        None => None,
    };

    Ok(RunSummary { ranking, rendered, written })
}

/// Everything after the fetch. Pure; used directly by tests and benches.
pub fn rank_page(
    html_doc: &str,
    opts: &RunOptions,
    allowlist: Option<&HashSet<String>>,
) -> std::result::Result<Ranking, ParseError> {
    let rows = specs::countries::extract_country_rows(html_doc, &opts.source.layout);
    let ranking = pipeline::rank_countries(rows, &opts.filter, &opts.locale, allowlist)?;

    let st = &ranking.stats;
    info!(
        seen = st.seen,
        kept = st.kept,
        duplicate = st.duplicate,
        not_allowed = st.not_allowed,
        missing_field = st.missing_field,
        low_testing = st.low_testing,
        small_population = st.small_population,
        "ranked countries"
    );
    for name in &ranking.missing {
        warn!(country = %name, "missing data");
    }
    Ok(ranking)
}
