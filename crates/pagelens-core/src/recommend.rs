//! Optimization recommendation synthesis.

use crate::analysis::resources::{CSS_COMBINE_HINT, JS_BUNDLE_HINT};
use crate::signals::PageSignals;

/// At most this many recommendations are emitted.
pub const MAX_RECOMMENDATIONS: usize = 8;

/// Load time above this triggers the delivery recommendations (exclusive).
pub const SLOW_DELIVERY_SECONDS: f64 = 2.0;

/// HTML payloads above this many KB trigger the minification
/// recommendations (exclusive).
pub const HEAVY_HTML_KB: f64 = 500.0;

/// More images than this triggers the sprite recommendation (exclusive).
pub const MANY_IMAGES: usize = 20;

/// More external references than this triggers the dependency
/// recommendations (exclusive).
pub const MANY_EXTERNAL_REQUESTS: usize = 5;

/// Build the priority-ordered recommendation list from the final signals.
///
/// Conditions are evaluated in fixed order, each appending its fixed lines;
/// the concatenation is capped at [`MAX_RECOMMENDATIONS`]. The caching and
/// general entries fire unconditionally, so the fallback line is only
/// reachable if they are ever removed.
pub fn synthesize(signals: &PageSignals) -> Vec<String> {
    let mut recommendations: Vec<&str> = Vec::new();

    if signals.load_time_seconds > SLOW_DELIVERY_SECONDS {
        recommendations.push("Enable GZIP/Brotli compression");
        recommendations.push("Use a content delivery network (CDN)");
        recommendations.push("Minimize HTTP requests");
    }

    if signals.html_kb > HEAVY_HTML_KB {
        recommendations.push("Minify HTML, CSS, and JavaScript");
        recommendations.push("Remove unused CSS and JavaScript");
    }

    if signals.css_count > CSS_COMBINE_HINT {
        recommendations.push("Combine CSS files to reduce requests");
    }

    if signals.js_count > JS_BUNDLE_HINT {
        recommendations.push("Bundle JavaScript files");
        recommendations.push("Consider lazy loading for non-critical JS");
    }

    if !signals.large_images.is_empty() {
        recommendations.push("Optimize images (compress, resize, use WebP)");
        recommendations.push("Implement lazy loading for images");
    }

    if signals.image_count > MANY_IMAGES {
        recommendations.push("Consider image sprites for small icons");
    }

    if signals.external_request_count > MANY_EXTERNAL_REQUESTS {
        recommendations.push("Reduce external dependencies");
        recommendations.push("Self-host critical resources");
    }

    // Caching and general hygiene always apply.
    recommendations.push("Set proper browser caching headers");
    recommendations.push("Use browser caching for static assets");
    recommendations.push("Enable browser caching");
    recommendations.push("Preload critical resources");
    recommendations.push("Use resource hints (dns-prefetch, preconnect)");

    if recommendations.is_empty() {
        return vec!["Page appears well optimized!".to_string()];
    }

    recommendations
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(str::to_string)
        .collect()
}
