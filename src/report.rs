// src/report.rs
//! Rendering of a ranking: the fixed-width pipe table, or CSV/TSV.

use crate::config::options::ReportFormat;
use crate::csv;
use crate::pipeline::CountryMetrics;

const HEADERS: [&str; 4] = ["Rank", "Name", "Mortality Rate (%)", "Case Fatality Rate (%)"];

/// Fixed dash count of the table rule, before adding the name column width.
const RULE_BASE: usize = 57;

/// Fraction → percent, rounded to 3 decimal places of percent.
pub fn to_percent(value: f64) -> f64 {
    round_half_up(value * 100.0 * 1000.0) as f64 / 1000.0
}

/// `floor(x + 0.5)` as an integer: NaN → 0, infinities saturate.
fn round_half_up(x: f64) -> i64 {
    if x.is_nan() { 0 } else { (x + 0.5).floor() as i64 }
}

pub fn render(metrics: &[CountryMetrics], format: ReportFormat) -> String {
    match format.delim() {
        None => render_table(metrics),
        Some(sep) => render_delimited(metrics, sep),
    }
}

/// ```text
/// | Rank |  Name | Mortality Rate (%) | Case Fatality Rate (%) | 
/// --------------------------------------------------------------
/// |    1 | Aland |              0.008 |                   1.00 | 
/// ```
/// Names are right-aligned to the longest name in `metrics`.
pub fn render_table(metrics: &[CountryMetrics]) -> String {
    let width = metrics
        .iter()
        .map(|m| m.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = join!(
        "| Rank | ",
        &" ".repeat(width.saturating_sub(HEADERS[1].len())),
        "Name | Mortality Rate (%) | Case Fatality Rate (%) | \n"
    );
    out.push_str(&"-".repeat(RULE_BASE + width));
    out.push('\n');

    for (i, m) in metrics.iter().enumerate() {
        out.push_str(&format!(
            "| {:4} | {:>width$} | {:18.3} | {:22.2} | \n",
            i + 1,
            m.name,
            to_percent(m.mortality_rate),
            to_percent(m.case_fatality_rate),
        ));
    }
    out
}

pub fn render_delimited(metrics: &[CountryMetrics], sep: char) -> String {
    let rows: Vec<Vec<String>> = metrics
        .iter()
        .enumerate()
        .map(|(i, m)| {
            vec![
                (i + 1).to_string(),
                m.name.clone(),
                format!("{:.3}", to_percent(m.mortality_rate)),
                format!("{:.2}", to_percent(m.case_fatality_rate)),
            ]
        })
        .collect();
    csv::rows_to_string(&HEADERS, &rows, sep)
}
