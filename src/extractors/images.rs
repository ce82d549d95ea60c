use scraper::Html;
use scraper::node::Element;
use url::Url;

use crate::extractors::parse_selector;
use crate::results::ImageRef;

/// Collects images larger than `min_dimension` on both axes, up to `max_images`.
///
/// Sources resolve against `base`; `data:` URIs and unresolvable sources are
/// skipped. The same source may appear more than once.
pub fn collect_images(doc: &Html, base: &Url, min_dimension: u32, max_images: usize) -> Vec<ImageRef> {
    let Some(selector) = parse_selector("img[src]") else {
        return Vec::new();
    };

    doc.select(&selector)
        .filter_map(|img| {
            let element = img.value();
            let src = base.join(element.attr("src")?.trim()).ok()?;
            if src.scheme() == "data" {
                return None;
            }

            let width = dimension(element, "width");
            let height = dimension(element, "height");
            if width <= min_dimension || height <= min_dimension {
                return None;
            }

            Some(ImageRef {
                src: src.to_string(),
                alt: element.attr("alt").unwrap_or_default().to_string(),
                width,
                height,
            })
        })
        .take(max_images)
        .collect()
}

/// Leading integer part of a size attribute (`"120px"` is 120).
///
/// 0 when absent or without leading digits; values past `u32::MAX` saturate.
fn dimension(element: &Element, attr: &str) -> u32 {
    let Some(value) = element.attr(attr) else {
        return 0;
    };
    value
        .trim()
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0u32, |acc, digit| acc.saturating_mul(10).saturating_add(digit))
}
