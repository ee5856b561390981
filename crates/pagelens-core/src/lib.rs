//! # pagelens-core
//!
//! Core library for analyzing a single web page and producing a structured,
//! human-readable report.
//!
//! The pipeline fetches one page over HTTP, parses the HTML, runs five
//! independent rule sets (performance, SEO, resources, images,
//! accessibility), synthesizes a capped list of optimization
//! recommendations, and assembles everything into an ordered sequence of
//! report lines with a final A-D performance grade.
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() {
//! let report = pagelens_core::analyze_url("https://example.com").await;
//! for line in &report.lines {
//!     println!("{line}");
//! }
//! # }
//! ```
//!
//! Failures never propagate to the caller as errors: every failure class
//! degrades to report lines, so the caller always receives something it can
//! render.

pub mod analysis;
pub mod fetcher;
pub mod recommend;
pub mod report;
pub mod signals;
pub mod url_utils;

// Re-export the types callers need for the common path.
pub use fetcher::{FetchError, FetchedPage, HttpFetcher, ResourceMeasurer};
pub use report::{analyze_fetched, analyze_url, Grade, Report};
pub use signals::PageSignals;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_seed_with_html_weight() {
        let signals = PageSignals::new(0.5, 42.0);
        assert_eq!(signals.load_time_seconds, 0.5);
        assert_eq!(signals.html_kb, 42.0);
        assert_eq!(signals.total_weight_kb, 42.0);
        assert_eq!(signals.image_count, 0);
        assert!(signals.large_images.is_empty());
    }

    #[test]
    fn weight_only_increases() {
        let mut signals = PageSignals::new(0.5, 42.0);
        signals.add_weight(10.0);
        signals.add_weight(2.5);
        assert_eq!(signals.total_weight_kb, 54.5);
    }
}
