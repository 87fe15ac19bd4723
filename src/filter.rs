use regex::Regex;

/// Matches hrefs containing `.otf`, `.woff` or `.ttf` anywhere
pub const FONT_PATTERN: &str = r"\.(otf|woff|ttf)";

/// Configuration for filtering extracted resources
#[derive(Debug, Clone, Default)]
pub struct ResourceFilterConfig {
    /// Regex patterns for resource URLs to drop
    pub exclude_patterns: Vec<String>,
}

/// Decides which hrefs count as fonts and which resolved URLs are skipped
#[derive(Debug)]
pub struct ResourceFilter {
    font_regex: Regex,
    exclude_regexes: Vec<Regex>,
}

impl Default for ResourceFilter {
    fn default() -> Self {
        Self::new(ResourceFilterConfig::default()).expect("Font pattern should be valid")
    }
}

impl ResourceFilter {
    /// Create a new resource filter from configuration
    pub fn new(config: ResourceFilterConfig) -> Result<Self, regex::Error> {
        let font_regex = Regex::new(FONT_PATTERN)?;

        let mut exclude_regexes = Vec::with_capacity(config.exclude_patterns.len());
        for pattern in &config.exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            font_regex,
            exclude_regexes,
        })
    }

    /// Whether an href names a font file anywhere in its text
    pub fn is_font_href(&self, href: &str) -> bool {
        self.font_regex.is_match(href)
    }

    /// Whether a resolved resource URL should be kept
    pub fn should_download(&self, url: &str) -> bool {
        !self.exclude_regexes.iter().any(|regex| regex.is_match(url))
    }
}
