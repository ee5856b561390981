//! Accessibility smells: buttons wired up through inline onclick handlers.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::INFO;

static ONCLICK_BUTTONS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("button[onclick]").expect("invalid button selector"));

/// List every `<button>` carrying an `onclick` attribute with its literal
/// handler expression. Purely informational; finding none is not a failure.
pub fn analyze(document: &Html) -> Vec<String> {
    let mut lines = vec!["ACCESSIBILITY".to_string()];

    let handlers: Vec<&str> = document
        .select(&ONCLICK_BUTTONS)
        .filter_map(|button| button.value().attr("onclick"))
        .collect();

    if handlers.is_empty() {
        lines.push(format!(
            "{INFO} No <button> elements with 'onclick' attributes found."
        ));
    } else {
        lines.push("<button> elements with 'onclick' actions:".to_string());
        for (i, onclick) in handlers.iter().enumerate() {
            lines.push(format!("   {}. <button> - onclick=\"{onclick}\"", i + 1));
        }
    }

    lines
}
