use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use scraper::{ElementRef, Html};
use std::collections::BTreeMap;
use url::Url;

use crate::extractors::{parse_selector, select_first, text_content};

/// Where a probe reads its candidate value from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Attr(&'static str),
    Text,
}

/// One short-circuiting lookup: the first element matching `selector`,
/// read through `sources` until one yields a non-empty value.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub selector: &'static str,
    pub sources: &'static [ValueSource],
}

impl Probe {
    const fn new(selector: &'static str, sources: &'static [ValueSource]) -> Self {
        Self { selector, sources }
    }

    /// Candidate value from the first matching element, if any
    pub fn read(&self, doc: &Html) -> Option<String> {
        let element = select_first(doc, self.selector)?;
        self.sources
            .iter()
            .filter_map(|source| read_source(element, *source))
            .find(|value| !value.is_empty())
    }
}

fn read_source(element: ElementRef<'_>, source: ValueSource) -> Option<String> {
    match source {
        ValueSource::Attr(name) => element.value().attr(name).map(str::to_string),
        ValueSource::Text => Some(text_content(element)),
    }
}

const DATE_SOURCES: &[ValueSource] = &[
    ValueSource::Attr("datetime"),
    ValueSource::Attr("content"),
    ValueSource::Text,
];

const AUTHOR_SOURCES: &[ValueSource] = &[ValueSource::Attr("content"), ValueSource::Text];

/// Publish date locations, highest priority first
pub const DATE_PROBES: [Probe; 6] = [
    Probe::new("time[datetime]", DATE_SOURCES),
    Probe::new(".publish-date", DATE_SOURCES),
    Probe::new(".date", DATE_SOURCES),
    Probe::new(".post-date", DATE_SOURCES),
    Probe::new("[itemprop=\"datePublished\"]", DATE_SOURCES),
    Probe::new("meta[property=\"article:published_time\"]", DATE_SOURCES),
];

/// Author locations, highest priority first
pub const AUTHOR_PROBES: [Probe; 5] = [
    Probe::new("[itemprop=\"author\"]", AUTHOR_SOURCES),
    Probe::new(".author", AUTHOR_SOURCES),
    Probe::new(".byline", AUTHOR_SOURCES),
    Probe::new(".post-author", AUTHOR_SOURCES),
    Probe::new("meta[name=\"author\"]", AUTHOR_SOURCES),
];

/// Runs probes in order and returns the first candidate `accept` turns into a value.
///
/// Rejected candidates fall through to the next probe; probes after the
/// first accepted one are never read.
pub fn first_match<T>(
    doc: &Html,
    probes: &[Probe],
    mut accept: impl FnMut(&str) -> Option<T>,
) -> Option<T> {
    probes.iter().find_map(|probe| {
        let candidate = probe.read(doc)?;
        let accepted = accept(&candidate);
        if accepted.is_none() {
            ::log::trace!("Probe {:?} rejected candidate {:?}", probe.selector, candidate);
        }
        accepted
    })
}

/// Builds the page metadata map; relative URLs resolve against `base`
pub fn resolve_metadata(doc: &Html, base: &Url) -> BTreeMap<String, String> {
    let mut metadata = meta_tags(doc);

    if let Some(canonical) = canonical_url(doc, base) {
        metadata.insert("canonical".to_string(), canonical);
    }

    if let Some(date) = publish_date(doc) {
        metadata.insert("publishDate".to_string(), date);
    }

    if let Some(author) = author(doc) {
        metadata.insert("author".to_string(), author);
    }

    metadata
}

/// `name` (or `property`) to `content` for every meta tag; a repeated name keeps the last value
pub fn meta_tags(doc: &Html) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();
    let Some(selector) = parse_selector("meta") else {
        return tags;
    };

    for meta in doc.select(&selector) {
        let element = meta.value();
        let name = element
            .attr("name")
            .filter(|n| !n.is_empty())
            .or_else(|| element.attr("property"))
            .filter(|n| !n.is_empty());
        let content = element.attr("content").filter(|c| !c.is_empty());

        if let (Some(name), Some(content)) = (name, content) {
            tags.insert(name.to_string(), content.to_string());
        }
    }

    tags
}

/// Absolute URL of the `rel="canonical"` link against the document base, if it resolves
pub fn canonical_url(doc: &Html, base: &Url) -> Option<String> {
    let href = select_first(doc, "link[rel=\"canonical\"]")?
        .value()
        .attr("href")?;
    base.join(href.trim()).ok().map(|url| url.to_string())
}

/// First parseable publish date, as UTC ISO-8601 with milliseconds
pub fn publish_date(doc: &Html) -> Option<String> {
    first_match(doc, &DATE_PROBES, parse_date)
        .map(|date| date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// First non-empty author candidate, trimmed
pub fn author(doc: &Html) -> Option<String> {
    first_match(doc, &AUTHOR_PROBES, |candidate| {
        let trimmed = candidate.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

/// Parses the date formats commonly found in markup.
///
/// Values without a zone are taken as UTC.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.and_utc());
        }
    }

    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%B %d, %Y", // January 15, 2024
        "%b %d, %Y", // Jan 15, 2024
        "%d %B %Y",  // 15 January 2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
