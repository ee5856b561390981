//! Pipeline orchestration and report assembly.
//!
//! Sections are concatenated in a fixed order: header, performance, SEO,
//! resources, images, recommendations, accessibility, summary, grade,
//! completion marker. Blank lines separate sections; the presentation layer
//! renders the dashed separator as a rule.

use scraper::Html;
use serde::Serialize;

use crate::analysis::{accessibility, images, performance, resources, seo, FAIL};
use crate::fetcher::{FetchError, FetchedPage, HttpFetcher, ResourceMeasurer};
use crate::recommend;
use crate::signals::PageSignals;

/// Width of the dashed separator emitted after the header line.
pub const SEPARATOR_WIDTH: usize = 40;

/// Grade tiers evaluated in order as (max load seconds, max weight KB,
/// grade); both bounds are strict and both must hold. No match means D.
const GRADE_BANDS: &[(f64, f64, Grade)] = &[
    (1.0, 500.0, Grade::A),
    (2.0, 1000.0, Grade::B),
    (3.0, 2000.0, Grade::C),
];

/// Final A-D performance classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Pure function of load time and total page weight.
    pub fn compute(load_time_seconds: f64, total_weight_kb: f64) -> Self {
        for &(max_seconds, max_kb, grade) in GRADE_BANDS {
            if load_time_seconds < max_seconds && total_weight_kb < max_kb {
                return grade;
            }
        }
        Grade::D
    }

    /// The summary line this grade produces.
    pub fn summary_line(self) -> &'static str {
        match self {
            Grade::A => "Performance grade: A - excellent",
            Grade::B => "Performance grade: B - good",
            Grade::C => "Performance grade: C - needs improvement",
            Grade::D => "Performance grade: D - poor, needs optimization",
        }
    }
}

/// The assembled analysis report.
///
/// Constructed fresh per request and discarded after rendering. `signals`
/// and `grade` are absent when the primary fetch aborted the analysis.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub url: String,
    pub lines: Vec<String>,
    pub signals: Option<PageSignals>,
    pub grade: Option<Grade>,
}

/// The dashed separator line.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

fn header_lines(url: &str) -> Vec<String> {
    vec![format!("Analyzing {url}..."), separator()]
}

/// Report lines for an abort-class failure. The report then consists of the
/// header, the separator, and these lines only.
pub fn failure_lines(url: &str, err: &FetchError) -> Vec<String> {
    match err {
        FetchError::AccessDenied => vec![
            format!("{FAIL} Access denied (403 Forbidden): {url}"),
            "   This website is blocking automated requests.".to_string(),
            "   Try accessing the site manually to check if it loads.".to_string(),
        ],
        FetchError::Http(status) => vec![format!("{FAIL} HTTP error {status}: {url}")],
        FetchError::Timeout => vec![format!("{FAIL} Request timed out: {url}")],
        FetchError::Connection => vec![format!("{FAIL} Connection failed: {url}")],
        FetchError::Other(cause) => vec![format!("{FAIL} Failed to analyze {url}: {cause}")],
    }
}

/// Run the full pipeline against a live URL.
///
/// Never returns an error: abort-class failures short-circuit the remaining
/// sections and surface as report lines instead.
pub async fn analyze_url(url: &str) -> Report {
    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(err) => return aborted_report(url, &err),
    };

    match fetcher.fetch_page(url).await {
        Ok(page) => analyze_fetched(url, &page, &fetcher).await,
        Err(err) => aborted_report(url, &err),
    }
}

fn aborted_report(url: &str, err: &FetchError) -> Report {
    let mut lines = header_lines(url);
    lines.extend(failure_lines(url, err));
    Report {
        url: url.to_string(),
        lines,
        signals: None,
        grade: None,
    }
}

/// Analyze an already fetched page with an injectable resource measurer.
///
/// Deterministic: for a fixed page and measurer, repeated calls produce
/// byte-identical line sequences.
pub async fn analyze_fetched(
    url: &str,
    page: &FetchedPage,
    measurer: &dyn ResourceMeasurer,
) -> Report {
    let mut signals = PageSignals::new(page.elapsed_seconds, page.size_kb());
    let html = String::from_utf8_lossy(&page.body).into_owned();

    // The parsed document is confined to this block so it is not held
    // across the measurement awaits.
    let (performance_lines, seo_lines, resource_lines, image_tags, accessibility_lines) = {
        let document = Html::parse_document(&html);
        (
            performance::analyze(&signals),
            seo::analyze(&document),
            resources::analyze(&document, url, &mut signals),
            images::collect(&document),
            accessibility::analyze(&document),
        )
    };
    let image_lines = images::analyze(&image_tags, measurer, &mut signals).await;

    let mut lines = header_lines(url);
    lines.extend(performance_lines);
    push_section(&mut lines, seo_lines);
    push_section(&mut lines, resource_lines);
    push_section(&mut lines, image_lines);

    lines.push(String::new());
    lines.push("OPTIMIZATION RECOMMENDATIONS".to_string());
    lines.extend(recommend::synthesize(&signals));

    push_section(&mut lines, accessibility_lines);

    lines.push(String::new());
    lines.push("SUMMARY".to_string());
    lines.push(format!("Total page weight: {:.1} KB", signals.total_weight_kb));
    lines.push(format!("Load time: {:.2}s", signals.load_time_seconds));
    lines.push(format!(
        "Resources: {} CSS, {} JS, {} images",
        signals.css_count, signals.js_count, signals.image_count
    ));
    let grade = Grade::compute(signals.load_time_seconds, signals.total_weight_kb);
    lines.push(grade.summary_line().to_string());
    lines.push("Analysis complete.".to_string());

    Report {
        url: url.to_string(),
        lines,
        signals: Some(signals),
        grade: Some(grade),
    }
}

fn push_section(lines: &mut Vec<String>, section: Vec<String>) {
    lines.push(String::new());
    lines.extend(section);
}
