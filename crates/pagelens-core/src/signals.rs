//! Signal accumulator threaded through the extractors.

use serde::{Deserialize, Serialize};

/// Raw signals accumulated during a single page analysis.
///
/// Seeded from the primary fetch (load time and HTML size), then updated by
/// each extractor in turn; the recommendation synthesizer and the final
/// summary/grade read the finished state. One accumulator is constructed per
/// request and never shared across analyses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSignals {
    /// Wall-clock time for the primary request, in seconds.
    pub load_time_seconds: f64,

    /// Size of the HTML payload in KB.
    pub html_kb: f64,

    /// Running page weight in KB: the HTML payload plus every successfully
    /// measured image. Only ever increases.
    pub total_weight_kb: f64,

    /// Total `<img>` tags discovered.
    pub image_count: usize,

    /// Stylesheet links discovered.
    pub css_count: usize,

    /// External-script tags discovered.
    pub js_count: usize,

    /// CSS/JS references counted as external by the substring heuristic.
    pub external_request_count: usize,

    /// Images over the large-image threshold as (url, size KB), in
    /// discovery order. Always a subset of the discovered images.
    pub large_images: Vec<(String, f64)>,
}

impl PageSignals {
    /// Seed the accumulator from the primary fetch.
    pub fn new(load_time_seconds: f64, html_kb: f64) -> Self {
        Self {
            load_time_seconds,
            html_kb,
            total_weight_kb: html_kb,
            ..Default::default()
        }
    }

    /// Record a successfully measured resource's weight.
    pub fn add_weight(&mut self, kb: f64) {
        self.total_weight_kb += kb;
    }
}
