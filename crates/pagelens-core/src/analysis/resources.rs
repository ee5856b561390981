//! Stylesheet/script enumeration and external-resource counting.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::signals::PageSignals;
use crate::url_utils;

use super::{HINT, WARN};

/// More stylesheets than this gets the "too many" warning (exclusive).
pub const CSS_TOO_MANY: usize = 5;

/// More stylesheets than this (and at most [`CSS_TOO_MANY`]) gets the
/// combine hint (exclusive).
pub const CSS_COMBINE_HINT: usize = 3;

/// More scripts than this gets the "too many" warning (exclusive).
pub const JS_TOO_MANY: usize = 10;

/// More scripts than this (and at most [`JS_TOO_MANY`]) gets the bundle
/// hint (exclusive).
pub const JS_BUNDLE_HINT: usize = 5;

/// More external references than this gets an extra warning (exclusive).
pub const EXTERNAL_TOO_MANY: usize = 10;

static STYLESHEETS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"link[rel="stylesheet"]"#).expect("invalid stylesheet selector")
});
static SCRIPTS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script[src]").expect("invalid script selector"));

/// Crude same-origin heuristic kept from the original design: a reference is
/// external iff it starts with `http` and does not contain the analyzed page
/// URL as a substring. This is substring containment, not host comparison,
/// so an external URL that happens to embed the page URL text is counted as
/// internal.
pub fn is_external(reference: &str, page_url: &str) -> bool {
    reference.starts_with("http") && !reference.contains(page_url)
}

/// Enumerate CSS and JS references, warn on excessive counts, and count
/// external references. Updates `css_count`, `js_count`, and
/// `external_request_count`.
pub fn analyze(document: &Html, page_url: &str, signals: &mut PageSignals) -> Vec<String> {
    let mut lines = vec!["RESOURCE ANALYSIS".to_string()];

    let hrefs: Vec<&str> = document
        .select(&STYLESHEETS)
        .map(|link| link.value().attr("href").unwrap_or(""))
        .collect();
    signals.css_count = hrefs.len();
    lines.push(format!("CSS files: {}", hrefs.len()));
    if !hrefs.is_empty() {
        lines.push("CSS files found:".to_string());
        for (i, href) in hrefs.iter().enumerate() {
            lines.push(format!(
                "   {}. {}",
                i + 1,
                url_utils::display_reference(page_url, href)
            ));
        }
    }
    if hrefs.len() > CSS_TOO_MANY {
        lines.push(format!("{WARN} Too many CSS files - consider combining"));
    } else if hrefs.len() > CSS_COMBINE_HINT {
        lines.push(format!("{HINT} Consider combining some CSS files"));
    }

    let srcs: Vec<&str> = document
        .select(&SCRIPTS)
        .map(|script| script.value().attr("src").unwrap_or(""))
        .collect();
    signals.js_count = srcs.len();
    lines.push(format!("JavaScript files: {}", srcs.len()));
    if !srcs.is_empty() {
        lines.push("JavaScript files found:".to_string());
        for (i, src) in srcs.iter().enumerate() {
            lines.push(format!(
                "   {}. {}",
                i + 1,
                url_utils::display_reference(page_url, src)
            ));
        }
    }
    if srcs.len() > JS_TOO_MANY {
        lines.push(format!("{WARN} Too many JS files - consider bundling"));
    } else if srcs.len() > JS_BUNDLE_HINT {
        lines.push(format!("{HINT} Consider bundling some JS files"));
    }

    // Counting uses the raw references, never the display-normalized form.
    let external = hrefs
        .iter()
        .chain(srcs.iter())
        .filter(|reference| is_external(reference, page_url))
        .count();
    signals.external_request_count = external;
    if external > 0 {
        lines.push(format!("External resources: {external}"));
        if external > EXTERNAL_TOO_MANY {
            lines.push(format!(
                "{WARN} Too many external requests - impacts loading speed"
            ));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_URL: &str = "http://example.com";

    fn page_with_links(css: usize, js: usize) -> Html {
        let mut head = String::new();
        for i in 0..css {
            head.push_str(&format!(r#"<link rel="stylesheet" href="/css/{i}.css">"#));
        }
        for i in 0..js {
            head.push_str(&format!(r#"<script src="/js/{i}.js"></script>"#));
        }
        Html::parse_document(&format!("<html><head>{head}</head><body></body></html>"))
    }

    fn analyze_joined(css: usize, js: usize) -> String {
        let document = page_with_links(css, js);
        let mut signals = PageSignals::default();
        analyze(&document, PAGE_URL, &mut signals).join("\n")
    }

    #[test]
    fn counts_css_and_js() {
        let document = page_with_links(2, 3);
        let mut signals = PageSignals::default();
        let report = analyze(&document, PAGE_URL, &mut signals).join("\n");
        assert_eq!(signals.css_count, 2);
        assert_eq!(signals.js_count, 3);
        assert!(report.contains("CSS files: 2"));
        assert!(report.contains("JavaScript files: 3"));
    }

    #[test]
    fn css_warnings_are_mutually_exclusive() {
        let report = analyze_joined(6, 0);
        assert!(report.contains("Too many CSS files - consider combining"));
        assert!(!report.contains("Consider combining some CSS files"));

        let report = analyze_joined(4, 0);
        assert!(!report.contains("Too many CSS files"));
        assert!(report.contains("Consider combining some CSS files"));

        let report = analyze_joined(3, 0);
        assert!(!report.contains("combining"));
    }

    #[test]
    fn js_warnings_are_mutually_exclusive() {
        let report = analyze_joined(0, 11);
        assert!(report.contains("Too many JS files - consider bundling"));
        assert!(!report.contains("Consider bundling some JS files"));

        let report = analyze_joined(0, 6);
        assert!(!report.contains("Too many JS files"));
        assert!(report.contains("Consider bundling some JS files"));
    }

    #[test]
    fn lists_display_normalized_references() {
        let document = Html::parse_document(
            r#"<html><head>
                <link rel="stylesheet" href="//cdn.example.net/a.css">
                <link rel="stylesheet" href="/b.css">
                <link rel="stylesheet" href="https://other.example.org/c.css">
            </head><body></body></html>"#,
        );
        let mut signals = PageSignals::default();
        let report = analyze(&document, PAGE_URL, &mut signals).join("\n");
        assert!(report.contains("   1. https://cdn.example.net/a.css"));
        assert!(report.contains("   2. http://example.com/b.css"));
        assert!(report.contains("   3. https://other.example.org/c.css"));
    }

    #[test]
    fn external_heuristic_is_substring_containment() {
        // Different host, no page-URL substring: external.
        assert!(is_external("http://cdn.example.net/x.js", PAGE_URL));

        // Page URL as prefix is internal, even on a different path.
        assert!(!is_external("http://example.com/deep/path.js", PAGE_URL));

        // Relative references never count.
        assert!(!is_external("/local.js", PAGE_URL));

        // Documented false case: an external URL embedding the page URL text
        // is treated as internal by the substring check.
        assert!(!is_external(
            "http://evil.example.net/?next=http://example.com",
            PAGE_URL
        ));
    }

    #[test]
    fn external_line_only_when_nonzero() {
        let report = analyze_joined(2, 2);
        assert!(!report.contains("External resources:"));

        let document = Html::parse_document(
            r#"<html><head>
                <script src="http://cdn-a.example.net/1.js"></script>
                <script src="http://cdn-b.example.net/2.js"></script>
            </head><body></body></html>"#,
        );
        let mut signals = PageSignals::default();
        let report = analyze(&document, PAGE_URL, &mut signals).join("\n");
        assert_eq!(signals.external_request_count, 2);
        assert!(report.contains("External resources: 2"));
        assert!(!report.contains("Too many external requests"));
    }

    #[test]
    fn warns_on_many_external_requests() {
        let mut head = String::new();
        for i in 0..11 {
            head.push_str(&format!(
                r#"<script src="http://cdn{i}.example.net/x.js"></script>"#
            ));
        }
        let document =
            Html::parse_document(&format!("<html><head>{head}</head><body></body></html>"));
        let mut signals = PageSignals::default();
        let report = analyze(&document, PAGE_URL, &mut signals).join("\n");
        assert_eq!(signals.external_request_count, 11);
        assert!(report.contains("Too many external requests - impacts loading speed"));
    }
}
