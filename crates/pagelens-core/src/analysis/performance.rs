//! Load-time and payload-size classification.

use crate::signals::PageSignals;

use super::{FAIL, PASS, WARN};

/// Load time above this many seconds is reported as slow.
pub const SLOW_LOAD_SECONDS: f64 = 3.0;

/// Load time above this many seconds (and at most slow) is moderate.
pub const MODERATE_LOAD_SECONDS: f64 = 1.0;

/// Report the measured load time and HTML size, plus a three-way tier
/// classification of the load time.
pub fn analyze(signals: &PageSignals) -> Vec<String> {
    let mut lines = vec![
        "PERFORMANCE METRICS".to_string(),
        format!("Page load time: {:.2} seconds", signals.load_time_seconds),
        format!("HTML size: {:.1} KB", signals.html_kb),
    ];

    if signals.load_time_seconds > SLOW_LOAD_SECONDS {
        lines.push(format!("{FAIL} SLOW: page load time > 3 seconds"));
    } else if signals.load_time_seconds > MODERATE_LOAD_SECONDS {
        lines.push(format!("{WARN} MODERATE: page load time > 1 second"));
    } else {
        lines.push(format!("{PASS} FAST: good page load time"));
    }

    lines
}
