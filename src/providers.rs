//! Embed providers: URL patterns, the provider (variation) table, and lookups.
//!
//! The table is an ordered list. [`ProviderTable::find_more_suitable_block`]
//! walks it front to back and the first provider with a matching pattern wins,
//! so more specific providers must be listed before broader ones.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use tracing::debug;

use crate::error::EmbedError;
use crate::icons;
use crate::types::{AttrValue, Attrs, DEFAULT_EMBED_BLOCK};

/// A single URL match rule.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Case-insensitive regular expression, tested anywhere in the URL.
    Regex(Regex),
    /// Case-insensitive literal prefix.
    Prefix(String),
}

impl Pattern {
    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map(Pattern::Regex)
    }

    pub fn prefix(prefix: impl Into<String>) -> Self {
        Pattern::Prefix(prefix.into())
    }

    pub fn is_match(&self, url: &str) -> bool {
        match self {
            Pattern::Regex(re) => re.is_match(url),
            Pattern::Prefix(prefix) => url
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix)),
        }
    }
}

/// Whether any of `patterns` matches `url`. An empty list never matches.
pub fn matches_patterns(url: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|p| p.is_match(url))
}

/// A provider variation of the embed block.
#[derive(Debug, Clone)]
pub struct Variation {
    /// Provider identifier, e.g. `youtube`. Also the `providerNameSlug`.
    pub name: String,
    pub title: String,
    /// Inline SVG markup.
    pub icon: &'static str,
    pub description: String,
    pub keywords: Vec<String>,
    pub patterns: Vec<Pattern>,
    /// Block type an upgraded block is created as.
    pub block_name: String,
    /// Attributes stamped onto a block upgraded to this variation.
    pub attributes: Attrs,
}

impl Variation {
    pub fn matches(&self, url: &str) -> bool {
        matches_patterns(url, &self.patterns)
    }
}

// ------------------------------------------------------------------
// Table format
// ------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PatternConfig {
    Regex(String),
    Prefix(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariationConfig {
    name: String,
    title: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    patterns: Vec<PatternConfig>,
    #[serde(default)]
    block_name: Option<String>,
    #[serde(default)]
    attributes: Attrs,
}

impl VariationConfig {
    fn compile(self) -> Result<Variation, EmbedError> {
        let patterns = self
            .patterns
            .into_iter()
            .map(|p| match p {
                PatternConfig::Regex(source) => {
                    Pattern::regex(&source).map_err(|e| EmbedError::InvalidPattern {
                        provider: self.name.clone(),
                        pattern: source,
                        source: e,
                    })
                }
                PatternConfig::Prefix(prefix) => Ok(Pattern::prefix(prefix)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let icon = self
            .icon
            .as_deref()
            .and_then(icons::get_icon)
            .unwrap_or(icons::EMBED_CONTENT);

        let mut attributes = self.attributes;
        attributes
            .entry("providerNameSlug".to_string())
            .or_insert_with(|| AttrValue::String(self.name.clone()));

        Ok(Variation {
            name: self.name,
            title: self.title,
            icon,
            description: self.description,
            keywords: self.keywords,
            patterns,
            block_name: self
                .block_name
                .unwrap_or_else(|| DEFAULT_EMBED_BLOCK.to_string()),
            attributes,
        })
    }
}

// ------------------------------------------------------------------
// ProviderTable
// ------------------------------------------------------------------

/// Ordered, immutable list of provider variations.
#[derive(Debug, Clone, Default)]
pub struct ProviderTable {
    variations: Vec<Variation>,
}

static BUILTIN: LazyLock<ProviderTable> = LazyLock::new(|| {
    ProviderTable::from_json(crate::VARIATIONS_JSON).expect("bundled variations.json is valid")
});

impl ProviderTable {
    /// Build a table from already-compiled variations. Names must be unique.
    pub fn new(variations: Vec<Variation>) -> Result<Self, EmbedError> {
        let mut seen = HashSet::new();
        for v in &variations {
            if !seen.insert(v.name.as_str()) {
                return Err(EmbedError::DuplicateProvider(v.name.clone()));
            }
        }
        Ok(ProviderTable { variations })
    }

    /// Load a table from its JSON form: an array of variations, each with
    /// `name`, `title` and optional `icon`, `description`, `keywords`,
    /// `patterns` (`{"regex": ...}` or `{"prefix": ...}`), `blockName` and
    /// `attributes`.
    pub fn from_json(input: &str) -> Result<Self, EmbedError> {
        let configs: Vec<VariationConfig> = serde_json::from_str(input)?;
        let variations = configs
            .into_iter()
            .map(VariationConfig::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(variations)
    }

    /// The provider table bundled with the crate.
    pub fn builtin() -> &'static ProviderTable {
        &BUILTIN
    }

    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    /// First provider whose patterns match `url`, in table order.
    pub fn find_more_suitable_block(&self, url: &str) -> Option<&Variation> {
        let found = self.variations.iter().find(|v| v.matches(url));
        match found {
            Some(v) => debug!(url, provider = %v.name, "matched embed provider"),
            None => debug!(url, "no embed provider matches"),
        }
        found
    }

    /// Provider with exactly this name. Case-sensitive.
    pub fn get_embed_info_by_provider(&self, name: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.name == name)
    }
}

/// [`ProviderTable::find_more_suitable_block`] over the bundled table.
pub fn find_more_suitable_block(url: &str) -> Option<&'static Variation> {
    ProviderTable::builtin().find_more_suitable_block(url)
}

/// [`ProviderTable::get_embed_info_by_provider`] over the bundled table.
pub fn get_embed_info_by_provider(name: &str) -> Option<&'static Variation> {
    ProviderTable::builtin().get_embed_info_by_provider(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn provider_for(url: &str) -> Option<&'static str> {
        find_more_suitable_block(url).map(|v| v.name.as_str())
    }

    #[test]
    fn builtin_table_loads() {
        let table = ProviderTable::builtin();
        assert!(table.variations().len() > 20);
        assert_eq!(table.variations()[0].name, "twitter");
    }

    #[test]
    fn matches_known_providers() {
        assert_eq!(provider_for("https://twitter.com/notnownikki"), Some("twitter"));
        assert_eq!(provider_for("https://x.com/notnownikki/status/1"), Some("twitter"));
        assert_eq!(
            provider_for("https://www.youtube.com/watch?v=bNnfuvC1LlU"),
            Some("youtube")
        );
        assert_eq!(provider_for("https://youtu.be/bNnfuvC1LlU"), Some("youtube"));
        assert_eq!(provider_for("https://m.youtube.com/watch?v=x"), Some("youtube"));
        assert_eq!(provider_for("https://instagram.com/p/abc/"), Some("instagram"));
        assert_eq!(provider_for("https://instagr.am/p/abc/"), Some("instagram"));
        assert_eq!(provider_for("https://open.spotify.com/track/1"), Some("spotify"));
        assert_eq!(provider_for("https://flic.kr/p/abc"), Some("flickr"));
        assert_eq!(provider_for("https://cloudup.com/abc"), Some("cloudup"));
        assert_eq!(provider_for("https://someone.tumblr.com/post/1"), Some("tumblr"));
        assert_eq!(provider_for("https://www.amazon.co.uk/dp/B00"), Some("amazon-kindle"));
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(provider_for("HTTPS://WWW.YOUTUBE.COM/watch?v=x"), Some("youtube"));
        assert_eq!(provider_for("HTTPS://CLOUDUP.COM/abc"), Some("cloudup"));
    }

    #[test]
    fn unknown_urls_do_not_match() {
        assert_eq!(provider_for("https://example.com/"), None);
        assert_eq!(provider_for(""), None);
        // bare host without a path is not an embeddable resource
        assert_eq!(provider_for("https://twitter.com/"), None);
    }

    #[test]
    fn wordpress_has_no_patterns_and_never_matches() {
        let wp = get_embed_info_by_provider("wordpress").unwrap();
        assert!(wp.patterns.is_empty());
        assert!(!wp.matches("https://wordpress.org/news/"));
    }

    #[test]
    fn first_match_wins() {
        let table = ProviderTable::from_json(
            r#"[
                {"name": "broad", "title": "Broad", "patterns": [{"prefix": "https://"}]},
                {"name": "narrow", "title": "Narrow", "patterns": [{"regex": "^https://narrow\\.test/"}]}
            ]"#,
        )
        .unwrap();
        let found = table.find_more_suitable_block("https://narrow.test/a").unwrap();
        assert_eq!(found.name, "broad");
    }

    #[test]
    fn info_lookup_is_exact() {
        let info = get_embed_info_by_provider("instagram").unwrap();
        assert_eq!(info.title, "Instagram");
        assert_eq!(info.icon, icons::EMBED_INSTAGRAM);
        assert!(get_embed_info_by_provider("Instagram").is_none());
        assert!(get_embed_info_by_provider("i do not exist").is_none());
    }

    #[test]
    fn variations_carry_provider_slug_and_target_block() {
        let yt = get_embed_info_by_provider("youtube").unwrap();
        assert_eq!(yt.block_name, DEFAULT_EMBED_BLOCK);
        assert_eq!(
            yt.attributes.get("providerNameSlug"),
            Some(&AttrValue::from("youtube"))
        );
        assert_eq!(yt.attributes.get("responsive"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn slug_defaults_to_name_and_icon_to_generic() {
        let table = ProviderTable::from_json(
            r#"[{"name": "acme", "title": "Acme", "icon": "nope", "patterns": [{"prefix": "https://acme.test/"}]}]"#,
        )
        .unwrap();
        let acme = &table.variations()[0];
        assert_eq!(acme.attributes["providerNameSlug"], AttrValue::from("acme"));
        assert_eq!(acme.icon, icons::EMBED_CONTENT);
    }

    #[test]
    fn bad_regex_is_reported_with_provider() {
        let err = ProviderTable::from_json(
            r#"[{"name": "broken", "title": "Broken", "patterns": [{"regex": "(unclosed"}]}]"#,
        )
        .unwrap_err();
        match err {
            EmbedError::InvalidPattern { provider, pattern, .. } => {
                assert_eq!(provider, "broken");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("Expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = ProviderTable::from_json(
            r#"[{"name": "a", "title": "A"}, {"name": "a", "title": "A again"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, EmbedError::DuplicateProvider(name) if name == "a"));
    }

    #[test]
    fn prefix_longer_than_url_does_not_panic() {
        assert!(!Pattern::prefix("https://cloudup.com/").is_match("https://"));
        // prefix length falls inside the two-byte 'é'
        assert!(!Pattern::prefix("https://a").is_match("https://é"));
    }
}
