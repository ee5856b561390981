//! The five metric extractors.
//!
//! Each extractor is a function of (document, signals) that produces ordered
//! report lines and updates the signal fields it owns. All five run
//! unconditionally, in the fixed order laid out by
//! [`crate::report::analyze_fetched`].

pub mod accessibility;
pub mod images;
pub mod performance;
pub mod resources;
pub mod seo;

/// Line marker for checks that pass.
pub const PASS: &str = "[PASS]";

/// Line marker for failed checks and abort-class errors.
pub const FAIL: &str = "[FAIL]";

/// Line marker for threshold warnings and degraded fetches.
pub const WARN: &str = "[WARN]";

/// Line marker for optional improvement suggestions.
pub const HINT: &str = "[HINT]";

/// Line marker for purely informational findings.
pub const INFO: &str = "[INFO]";
