use url::Url;

/// Normalize a URL to its origin (scheme + host + optional port), with any
/// trailing slash stripped.
///
/// Unparseable input degrades to the trimmed input itself; callers only use
/// the result for display, so a best-effort prefix beats an error.
pub fn origin(input: &str) -> String {
    let Ok(parsed) = Url::parse(input) else {
        return input.trim_end_matches('/').to_string();
    };
    parsed
        .origin()
        .ascii_serialization()
        .trim_end_matches('/')
        .to_string()
}

/// Absolute display form of a stylesheet/script reference.
///
/// Protocol-relative references get the secure scheme; root-relative
/// references get the analyzed page's origin. Anything else is shown as-is.
/// Display only: external-resource counting never uses this form.
pub fn display_reference(page_url: &str, reference: &str) -> String {
    if reference.starts_with("//") {
        format!("https:{reference}")
    } else if reference.starts_with('/') {
        format!("{}{}", origin(page_url), reference)
    } else {
        reference.to_string()
    }
}
