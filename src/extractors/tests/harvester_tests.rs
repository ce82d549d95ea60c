use crate::config::ExtractorConfig;
use crate::extractors::document_base;
use crate::extractors::headings::collect_headings;
use crate::extractors::images::collect_images;
use crate::extractors::links::collect_links;
use crate::filter::LinkFilter;
use scraper::Html;
use url::Url;

#[cfg(test)]
mod heading_tests {
    use super::*;

    #[test]
    fn test_headings_in_document_order() {
        let doc = Html::parse_document(
            "<body><nav><h4>Menu</h4></nav><h1 id=\"top\">Title</h1><main><h2>Part</h2><h3 id=\"\">Sub</h3></main><footer><h6>  Fine print  </h6></footer></body>",
        );
        let headings = collect_headings(&doc);
        let summary: Vec<(u8, &str, Option<&str>)> = headings
            .iter()
            .map(|h| (h.level, h.text.as_str(), h.id.as_deref()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (4, "Menu", None),
                (1, "Title", Some("top")),
                (2, "Part", None),
                (3, "Sub", None),
                (6, "Fine print", None),
            ]
        );
    }

    #[test]
    fn test_empty_headings_are_skipped() {
        let doc = Html::parse_document("<body><h2>  </h2><h2><img src=\"x.png\"></h2><h5>Kept</h5></body>");
        let headings = collect_headings(&doc);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].level, 5);
    }

    #[test]
    fn test_no_headings() {
        let doc = Html::parse_document("<body><p>No outline</p></body>");
        assert!(collect_headings(&doc).is_empty());
    }
}

#[cfg(test)]
mod link_tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.com/blog/post").unwrap()
    }

    fn links_of(html: &str, max_links: usize) -> Vec<crate::results::LinkRef> {
        let doc = Html::parse_document(html);
        let url = page_url();
        let base = document_base(&doc, &url);
        collect_links(&doc, &base, &url, &LinkFilter::default(), max_links)
    }

    #[test]
    fn test_duplicate_urls_keep_first_occurrence() {
        let links = links_of(
            "<body><a href=\"/a\">First A</a><a href=\"https://other.org/b\">B</a><a href=\"https://example.com/a\">Second A</a></body>",
            50,
        );
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url, "https://example.com/a");
        assert_eq!(links[0].text, "First A");
        assert_eq!(links[1].url, "https://other.org/b");
    }

    #[test]
    fn test_relative_links_resolve_and_internal_flag() {
        let links = links_of(
            "<body><a href=\"next\">Next</a><a href=\"//cdn.example.net/x\">CDN</a><a href=\"https://example.com/\">Home</a></body>",
            50,
        );
        assert_eq!(links[0].url, "https://example.com/blog/next");
        assert!(links[0].internal);
        assert_eq!(links[1].url, "https://cdn.example.net/x");
        assert!(!links[1].internal);
        assert!(links[2].internal);
    }

    #[test]
    fn test_cap_keeps_first_fifty_in_order() {
        let mut html = String::from("<body>");
        for i in 0..75 {
            html.push_str(&format!("<a href=\"/page/{i}\">Page {i}</a>"));
        }
        html.push_str("</body>");

        let links = links_of(&html, ExtractorConfig::default().max_links);
        assert_eq!(links.len(), 50);
        assert_eq!(links[0].url, "https://example.com/page/0");
        assert_eq!(links[49].url, "https://example.com/page/49");
    }

    #[test]
    fn test_cap_counts_unique_links_only() {
        let mut html = String::from("<body>");
        for i in 0..10 {
            html.push_str(&format!("<a href=\"/p/{i}\">P</a><a href=\"/p/{i}\">P again</a>"));
        }
        html.push_str("</body>");
        let links = links_of(&html, 5);
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://example.com/p/0",
                "https://example.com/p/1",
                "https://example.com/p/2",
                "https://example.com/p/3",
                "https://example.com/p/4",
            ]
        );
    }

    #[test]
    fn test_unusable_anchors_are_skipped() {
        let links = links_of(
            "<body>\
             <a href=\"javascript:void(0)\">Script</a>\
             <a href=\"mailto:team@example.com\">Mail</a>\
             <a href=\"/empty\">   </a>\
             <a href=\"/image-only\"><img src=\"x.png\"></a>\
             <a>No href</a>\
             <a href=\"http://[::1\">Broken</a>\
             <a href=\"/ok\">  Fine  </a>\
             </body>",
            50,
        );
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "Fine");
        assert_eq!(links[0].url, "https://example.com/ok");
    }

    #[test]
    fn test_base_element_changes_resolution_not_internal_host() {
        let links = links_of(
            "<head><base href=\"https://static.example.org/docs/\"></head><body><a href=\"guide\">Guide</a></body>",
            50,
        );
        assert_eq!(links[0].url, "https://static.example.org/docs/guide");
        assert!(!links[0].internal);
    }
}

#[cfg(test)]
mod image_tests {
    use super::*;

    fn images_of(html: &str) -> Vec<crate::results::ImageRef> {
        let doc = Html::parse_document(html);
        let base = Url::parse("https://example.com/gallery/").unwrap();
        let config = ExtractorConfig::default();
        collect_images(&doc, &base, config.min_image_dimension, config.max_images)
    }

    #[test]
    fn test_size_threshold_is_strict_on_both_axes() {
        let images = images_of(
            "<body>\
             <img src=\"narrow.png\" width=\"40\" height=\"200\">\
             <img src=\"edge.png\" width=\"50\" height=\"100\">\
             <img src=\"small-ok.png\" width=\"51\" height=\"51\" alt=\"ok\">\
             </body>",
        );
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, "https://example.com/gallery/small-ok.png");
        assert_eq!(images[0].alt, "ok");
        assert_eq!((images[0].width, images[0].height), (51, 51));
    }

    #[test]
    fn test_data_uris_are_skipped() {
        let images = images_of(
            "<body><img src=\"data:image/png;base64,AAAA\" width=\"100\" height=\"100\"><img src=\"/real.png\" width=\"100\" height=\"100\"></body>",
        );
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, "https://example.com/real.png");
        assert_eq!(images[0].alt, "");
    }

    #[test]
    fn test_cap_at_twenty_without_deduplication() {
        let mut html = String::from("<body>");
        for _ in 0..25 {
            html.push_str("<img src=\"same.png\" width=\"300\" height=\"200\">");
        }
        html.push_str("</body>");
        let images = images_of(&html);
        assert_eq!(images.len(), 20);
        assert!(images.iter().all(|i| i.src == "https://example.com/gallery/same.png"));
    }
}
