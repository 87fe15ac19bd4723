use crate::filter::ResourceFilter;
use scraper::{ElementRef, Html, Selector};

/// Whether the element's `rel` token list contains `stylesheet`
fn is_stylesheet(element: &ElementRef) -> bool {
    element
        .value()
        .attr("rel")
        .map(|rel| {
            rel.split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case("stylesheet"))
        })
        .unwrap_or(false)
}

/// Values of `attr` on every element matching `selector`, in document order
fn attr_values(doc: &Html, selector: &str, attr: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .filter_map(|e| e.value().attr(attr))
        .map(|s| s.to_string())
        .collect()
}

/// `href` of every `<link rel="stylesheet">`
pub fn stylesheet_hrefs(doc: &Html) -> Vec<String> {
    let selector = Selector::parse("link[href]").unwrap();
    doc.select(&selector)
        .filter(is_stylesheet)
        .filter_map(|e| e.value().attr("href"))
        .map(|s| s.to_string())
        .collect()
}

/// `src` of every `<script src>`
pub fn script_srcs(doc: &Html) -> Vec<String> {
    attr_values(doc, "script[src]", "src")
}

/// `src` of every `<img src>`
pub fn image_srcs(doc: &Html) -> Vec<String> {
    attr_values(doc, "img[src]", "src")
}

/// `href` of every stylesheet link that points at a font file
pub fn font_hrefs(doc: &Html, filter: &ResourceFilter) -> Vec<String> {
    stylesheet_hrefs(doc)
        .into_iter()
        .filter(|href| filter.is_font_href(href))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html>
<head>
  <link rel="stylesheet" href="/css/site.css">
  <link rel="icon" href="/favicon.ico">
  <link rel="preload stylesheet" href="/fonts/inter.woff2">
  <link rel="Stylesheet" href="print.css" media="print">
  <link rel="stylesheet">
  <script src="/js/app.js"></script>
  <script>console.log("inline")</script>
</head>
<body>
  <img src="logo.png" alt="logo">
  <img alt="no source">
  <script src="https://cdn.example.net/lib.js"></script>
  <img src="/img/hero.jpg">
</body>
</html>"#;

    #[test]
    fn test_stylesheet_hrefs() {
        let doc = Html::parse_document(PAGE);
        assert_eq!(
            stylesheet_hrefs(&doc),
            vec!["/css/site.css", "/fonts/inter.woff2", "print.css"]
        );
    }

    #[test]
    fn test_script_srcs_skip_inline_scripts() {
        let doc = Html::parse_document(PAGE);
        assert_eq!(
            script_srcs(&doc),
            vec!["/js/app.js", "https://cdn.example.net/lib.js"]
        );
    }

    #[test]
    fn test_image_srcs() {
        let doc = Html::parse_document(PAGE);
        assert_eq!(image_srcs(&doc), vec!["logo.png", "/img/hero.jpg"]);
    }

    #[test]
    fn test_font_hrefs_only_from_stylesheet_links() {
        let html = r#"<head>
            <link rel="stylesheet" href="/fonts/a.ttf">
            <link rel="preload" href="/fonts/b.woff">
            <link rel="stylesheet" href="/css/c.css">
        </head>"#;
        let doc = Html::parse_document(html);
        let filter = ResourceFilter::default();
        assert_eq!(font_hrefs(&doc, &filter), vec!["/fonts/a.ttf"]);
    }

    #[test]
    fn test_empty_document() {
        let doc = Html::parse_document("");
        assert!(stylesheet_hrefs(&doc).is_empty());
        assert!(script_srcs(&doc).is_empty());
        assert!(image_srcs(&doc).is_empty());
    }
}
