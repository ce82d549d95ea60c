use scraper::{ElementRef, Html};

use crate::config::ExtractorConfig;
use crate::extractors::select_first;

/// Finds the element most likely to hold the article body.
///
/// Selectors are probed in configured order (semantic tags, then ARIA role,
/// then class and id conventions). For each selector only its first match is
/// considered, and the first candidate whose trimmed text is longer than
/// `min_main_text_chars` characters wins. Returns `None` when nothing
/// qualifies; the caller then extracts from the whole body.
pub fn find_main_content<'a>(doc: &'a Html, config: &ExtractorConfig) -> Option<ElementRef<'a>> {
    for css in &config.main_selectors {
        let Some(candidate) = select_first(doc, css) else {
            continue;
        };

        let text: String = candidate.text().collect();
        let length = text.trim().chars().count();
        if length > config.min_main_text_chars {
            ::log::debug!("Main content located with {:?} ({} chars)", css, length);
            return Some(candidate);
        }
        ::log::trace!("Candidate {:?} too short ({} chars)", css, length);
    }

    None
}
