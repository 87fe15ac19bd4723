pub mod html;


use crate::filter::ResourceFilter;
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Which extraction rule produced a resource reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    /// `<link rel="stylesheet" href>`
    Stylesheet,
    /// `<script src>`
    Script,
    /// `<img src>`
    Image,
    /// Stylesheet link whose href names a font file
    Font,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Stylesheet => "stylesheet",
            ResourceKind::Script => "script",
            ResourceKind::Image => "image",
            ResourceKind::Font => "font",
        };
        f.write_str(name)
    }
}

/// An absolute resource URL discovered in a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub url: String,
    pub kind: ResourceKind,
}

/// Runs the extraction rules over a page and resolves what they find
pub struct Extractor {
    filter: ResourceFilter,
    include_font_rule: bool,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ResourceFilter::default(), true)
    }
}

impl Extractor {
    /// Creates an extractor with the given filter
    pub fn new(filter: ResourceFilter, include_font_rule: bool) -> Self {
        Self {
            filter,
            include_font_rule,
        }
    }

    /// Extracts resources in rule order: stylesheets, scripts, images, fonts.
    ///
    /// Each rule keeps document order. With the font rule enabled, font
    /// stylesheets appear twice: once as stylesheets and once as fonts.
    pub fn extract(&self, source: &str, base: &Url) -> Vec<Resource> {
        let doc = Html::parse_document(source);

        let mut rules = vec![
            (ResourceKind::Stylesheet, html::stylesheet_hrefs(&doc)),
            (ResourceKind::Script, html::script_srcs(&doc)),
            (ResourceKind::Image, html::image_srcs(&doc)),
        ];
        if self.include_font_rule {
            rules.push((ResourceKind::Font, html::font_hrefs(&doc, &self.filter)));
        }

        let mut resources = Vec::new();
        for (kind, references) in rules {
            ::log::debug!("Found {} {} references", references.len(), kind);
            for reference in references {
                let Some(url) = crate::utils::resolve_reference(base, &reference) else {
                    continue;
                };
                if !self.filter.should_download(&url) {
                    ::log::debug!("Resource filter rejected: {}", url);
                    continue;
                }
                resources.push(Resource { url, kind });
            }
        }

        ::log::info!("Extracted {} resources", resources.len());
        resources
    }
}

/// Extracts resource URLs with the default rules and no exclusions
pub fn extract_resources(source: &str, base: &Url) -> Vec<String> {
    Extractor::default()
        .extract(source, base)
        .into_iter()
        .map(|resource| resource.url)
        .collect()
}
