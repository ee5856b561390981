//! SEO hygiene checks: heading structure, meta description, title, canonical.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::{FAIL, PASS, WARN};

/// Meta descriptions longer than this are flagged (exclusive bound).
pub const DESCRIPTION_MAX_CHARS: usize = 160;

/// Meta descriptions shorter than this are flagged (exclusive bound).
pub const DESCRIPTION_MIN_CHARS: usize = 120;

/// Titles longer than this are flagged (exclusive bound).
pub const TITLE_MAX_CHARS: usize = 60;

/// Titles shorter than this are flagged (exclusive bound).
pub const TITLE_MIN_CHARS: usize = 30;

static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("invalid h1 selector"));
static META_DESCRIPTION: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("invalid meta description selector")
});
static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("invalid title selector"));
static CANONICAL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"link[rel="canonical"]"#).expect("invalid canonical selector")
});

/// Run the four SEO checks against the parsed document.
pub fn analyze(document: &Html) -> Vec<String> {
    let mut lines = vec!["SEO ANALYSIS".to_string()];

    match document.select(&H1).count() {
        1 => lines.push(format!("{PASS} Exactly one <h1> tag found.")),
        0 => lines.push(format!("{FAIL} Missing <h1> tag.")),
        n => lines.push(format!("{FAIL} Multiple <h1> tags found: {n}")),
    }

    let description = document
        .select(&META_DESCRIPTION)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .filter(|content| !content.is_empty());
    match description {
        Some(content) => {
            let length = content.chars().count();
            lines.push(format!("{PASS} Meta description present ({length} chars)."));
            if length > DESCRIPTION_MAX_CHARS {
                lines.push(format!(
                    "{WARN} Meta description too long (>{DESCRIPTION_MAX_CHARS} chars)"
                ));
            } else if length < DESCRIPTION_MIN_CHARS {
                lines.push(format!(
                    "{WARN} Meta description too short (<{DESCRIPTION_MIN_CHARS} chars)"
                ));
            }
        }
        None => lines.push(format!("{FAIL} Meta description missing.")),
    }

    let title = document
        .select(&TITLE)
        .next()
        .map(|title| title.text().collect::<String>())
        .filter(|text| !text.is_empty());
    match title {
        Some(text) => {
            let length = text.chars().count();
            lines.push(format!("{PASS} Title tag present ({length} chars)."));
            if length > TITLE_MAX_CHARS {
                lines.push(format!("{WARN} Title too long (>{TITLE_MAX_CHARS} chars)"));
            } else if length < TITLE_MIN_CHARS {
                lines.push(format!("{WARN} Title too short (<{TITLE_MIN_CHARS} chars)"));
            }
        }
        None => lines.push(format!("{FAIL} Title tag missing.")),
    }

    if document.select(&CANONICAL).next().is_some() {
        lines.push(format!("{PASS} Canonical tag found."));
    } else {
        lines.push(format!("{FAIL} Canonical tag missing."));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(head_extra: &str, body: &str) -> Html {
        Html::parse_document(&format!(
            "<html><head>{head_extra}</head><body>{body}</body></html>"
        ))
    }

    fn analyze_joined(head_extra: &str, body: &str) -> String {
        analyze(&page(head_extra, body)).join("\n")
    }

    #[test]
    fn single_h1_passes() {
        let report = analyze_joined("", "<h1>One</h1>");
        assert!(report.contains("[PASS] Exactly one <h1> tag found."));
    }

    #[test]
    fn missing_h1_fails() {
        let report = analyze_joined("", "<p>no headings</p>");
        assert!(report.contains("[FAIL] Missing <h1> tag."));
    }

    #[test]
    fn multiple_h1_reports_count() {
        let report = analyze_joined("", "<h1>a</h1><h1>b</h1><h1>c</h1>");
        assert!(report.contains("[FAIL] Multiple <h1> tags found: 3"));
    }

    fn description_report(length: usize) -> String {
        let content = "x".repeat(length);
        analyze_joined(
            &format!(r#"<meta name="description" content="{content}">"#),
            "",
        )
    }

    #[test]
    fn description_length_boundaries_are_exact() {
        // 120..=160 inclusive is silently acceptable.
        assert!(!description_report(160).contains("too long"));
        assert!(description_report(161).contains("too long"));
        assert!(!description_report(120).contains("too short"));
        assert!(description_report(119).contains("too short"));
        assert!(description_report(140).contains("Meta description present (140 chars)."));
    }

    #[test]
    fn empty_description_counts_as_missing() {
        let report = analyze_joined(r#"<meta name="description" content="">"#, "");
        assert!(report.contains("[FAIL] Meta description missing."));
    }

    fn title_report(length: usize) -> String {
        let text = "x".repeat(length);
        analyze_joined(&format!("<title>{text}</title>"), "")
    }

    #[test]
    fn title_length_boundaries_are_exact() {
        assert!(!title_report(60).contains("too long"));
        assert!(title_report(61).contains("too long"));
        assert!(!title_report(30).contains("too short"));
        assert!(title_report(29).contains("too short"));
        assert!(title_report(45).contains("Title tag present (45 chars)."));
    }

    #[test]
    fn missing_title_fails() {
        let report = analyze_joined("", "");
        assert!(report.contains("[FAIL] Title tag missing."));
    }

    #[test]
    fn canonical_presence() {
        let found = analyze_joined(r#"<link rel="canonical" href="https://example.com/">"#, "");
        assert!(found.contains("[PASS] Canonical tag found."));

        let missing = analyze_joined("", "");
        assert!(missing.contains("[FAIL] Canonical tag missing."));
    }
}
