//! Image enumeration, alt-text checks, and sequential size measurement.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::fetcher::ResourceMeasurer;
use crate::signals::PageSignals;

use super::{FAIL, HINT, WARN};

/// Measured images above this many KB are reported as large (exclusive).
pub const LARGE_IMAGE_KB: f64 = 200.0;

static IMAGES: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("invalid img selector"));

/// Source and alt text of one discovered `<img>` tag.
///
/// Collected up front so the document does not have to be held across the
/// measurement awaits.
#[derive(Debug, Clone)]
pub struct ImageTag {
    pub src: Option<String>,
    pub alt: Option<String>,
}

/// Collect all image tags from the document, in discovery order.
pub fn collect(document: &Html) -> Vec<ImageTag> {
    document
        .select(&IMAGES)
        .map(|img| ImageTag {
            src: img.value().attr("src").map(str::to_string),
            alt: img.value().attr("alt").map(str::to_string),
        })
        .collect()
}

/// Report the image total, flag missing alt text, and measure each
/// secure-scheme source strictly sequentially.
///
/// Only `https` sources are measured; everything else contributes nothing to
/// the page weight. A measurement failure degrades to one warning line for
/// that image and analysis continues. Updates `image_count`,
/// `total_weight_kb`, and `large_images`.
pub async fn analyze(
    images: &[ImageTag],
    measurer: &dyn ResourceMeasurer,
    signals: &mut PageSignals,
) -> Vec<String> {
    let mut lines = vec!["IMAGE ANALYSIS".to_string()];
    signals.image_count = images.len();
    lines.push(format!("Total images: {}", images.len()));

    for image in images {
        let src = image.src.as_deref().unwrap_or("");

        let alt_missing = image
            .alt
            .as_deref()
            .map_or(true, |alt| alt.trim().is_empty());
        if alt_missing {
            lines.push(format!("{FAIL} Image missing alt text: {src}"));
        }

        if !src.starts_with("https") {
            continue;
        }

        match measurer.measure_kb(src).await {
            Ok(kb) => {
                signals.add_weight(kb);
                if kb > LARGE_IMAGE_KB {
                    signals.large_images.push((src.to_string(), kb));
                    lines.push(format!("{WARN} Large image (>200KB): {src} - {kb:.1} KB"));
                }
                if !(src.ends_with(".webp") || src.ends_with(".avif")) {
                    lines.push(format!("{HINT} Consider WebP format for: {src}"));
                }
            }
            Err(err) => {
                lines.push(format!("{WARN} Failed to load image: {src} - {err}"));
            }
        }
    }

    lines
}
