//! Upgrading generic embed blocks to provider variations, and oEmbed preview helpers.

use tracing::debug;

use crate::class_names::get_class_names;
use crate::providers::{ProviderTable, Variation};
use crate::registry::BlockTypeRegistry;
use crate::render::escape_html;
use crate::types::{AttrValue, Attrs, Block, DEFAULT_EMBED_BLOCK, Preview, WP_EMBED_TYPE};

/// Marker class WordPress puts on the markup of a post embedded from another WordPress site.
const WP_EMBEDDED_CONTENT: &str = r#"class="wp-embedded-content""#;

/// Turns embed blocks into more specific provider blocks.
///
/// Holds the host's block type registry; only block types registered there
/// are ever created.
pub struct EmbedUpgrader<'a> {
    registry: &'a dyn BlockTypeRegistry,
    providers: &'a ProviderTable,
}

impl<'a> EmbedUpgrader<'a> {
    /// Upgrader over the bundled provider table.
    pub fn new(registry: &'a dyn BlockTypeRegistry) -> Self {
        EmbedUpgrader {
            registry,
            providers: ProviderTable::builtin(),
        }
    }

    pub fn with_providers(mut self, providers: &'a ProviderTable) -> Self {
        self.providers = providers;
        self
    }

    /// See [`create_upgraded_embed_block`].
    pub fn upgrade(&self, block: &Block) -> Option<Block> {
        self.upgrade_with_preview(block, None, &Attrs::new())
    }

    /// Upgrade `block`, also considering its oEmbed `preview`.
    ///
    /// When no provider pattern applies but the preview HTML comes from a
    /// WordPress site, the block becomes a `wordpress` embed carrying
    /// `attributes_from_preview`.
    pub fn upgrade_with_preview(
        &self,
        block: &Block,
        preview: Option<&Preview>,
        attributes_from_preview: &Attrs,
    ) -> Option<Block> {
        let Some(url) = block.attr_string("url").filter(|u| !u.is_empty()) else {
            debug!(block = %block.name, "embed block has no url, not upgrading");
            return None;
        };
        let provider_slug = block.attr_string("providerNameSlug");
        let is_wordpress = provider_slug.as_deref() == Some("wordpress")
            || block.attr_string("type").as_deref() == Some(WP_EMBED_TYPE);

        // WordPress embeds have no URL patterns, so a block the user already
        // made a WordPress embed is left alone.
        if !is_wordpress {
            if let Some(variation) = self.providers.find_more_suitable_block(&url) {
                let target_slug = variation
                    .attributes
                    .get("providerNameSlug")
                    .and_then(|v| match v {
                        AttrValue::String(s) => Some(s.as_str()),
                        _ => None,
                    });
                if provider_slug.is_none() || provider_slug.as_deref() != target_slug {
                    let rest = without_keys(&block.attributes, &["url", "providerNameSlug", "type"]);
                    return self.build(variation, &url, &rest);
                }
            }
        }

        let preview = preview?;
        let from_wordpress = preview.html.as_deref().is_some_and(is_from_wordpress);
        if is_wordpress || !from_wordpress {
            return None;
        }
        // WordPress embeds are only offered when the host registered the
        // embed block with a `wordpress` variation.
        let wordpress = self
            .registry
            .get(DEFAULT_EMBED_BLOCK)?
            .variation("wordpress")?;
        self.build(wordpress, &url, attributes_from_preview)
    }

    fn build(&self, variation: &Variation, url: &str, carried: &Attrs) -> Option<Block> {
        if !self.registry.is_registered(&variation.block_name) {
            debug!(
                block = %variation.block_name,
                provider = %variation.name,
                "target block type is not registered, not upgrading"
            );
            return None;
        }

        // variation attributes go last so `providerNameSlug` names the variation,
        // not whatever the carried attributes said
        let mut attributes = Attrs::new();
        attributes.insert("url".to_string(), AttrValue::from(url));
        attributes.extend(carried.iter().map(|(k, v)| (k.clone(), v.clone())));
        attributes.extend(variation.attributes.iter().map(|(k, v)| (k.clone(), v.clone())));

        debug!(url, provider = %variation.name, block = %variation.block_name, "upgraded embed block");
        let mut block = match self.registry.get(&variation.block_name) {
            Some(block_type) => block_type.create_block(&attributes),
            None => Block::new(variation.block_name.clone(), attributes),
        };
        // a schema may not declare them, but the url and provider always survive
        block
            .attributes
            .entry("url".to_string())
            .or_insert_with(|| AttrValue::from(url));
        for (key, value) in &variation.attributes {
            block
                .attributes
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        Some(block)
    }
}

/// Upgrade a generic embed block to its provider variation.
///
/// Returns `None` when the block has no URL, no provider matches it, the
/// block already is that provider, or the target block type is not
/// registered in `registry`. The input is never modified.
pub fn create_upgraded_embed_block(block: &Block, registry: &dyn BlockTypeRegistry) -> Option<Block> {
    EmbedUpgrader::new(registry).upgrade(block)
}

fn without_keys(attrs: &Attrs, keys: &[&str]) -> Attrs {
    attrs
        .iter()
        .filter(|(k, _)| !keys.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

// ------------------------------------------------------------------
// Preview helpers
// ------------------------------------------------------------------

/// Whether oEmbed HTML is a post embedded from another WordPress site.
pub fn is_from_wordpress(html: &str) -> bool {
    html.contains(WP_EMBEDDED_CONTENT)
}

/// Block attributes implied by an oEmbed preview.
///
/// `title` stands in for a missing provider name. `type` and
/// `providerNameSlug` are only set when the preview has HTML or is a photo;
/// `className` is always set.
pub fn get_attributes_from_preview(
    preview: Option<&Preview>,
    title: &str,
    current_class_names: &str,
    is_responsive: bool,
    allow_responsive: bool,
) -> Attrs {
    let mut attributes = Attrs::new();
    let Some(preview) = preview else {
        return attributes;
    };

    let html = preview.html.as_deref().unwrap_or_default();
    let mut kind = preview.kind.as_deref().unwrap_or("rich");
    if is_from_wordpress(html) {
        kind = WP_EMBED_TYPE;
    }
    let provider_name = preview.provider_name.as_deref().unwrap_or(title);

    if !html.is_empty() || kind == "photo" {
        attributes.insert("type".into(), AttrValue::from(kind));
        attributes.insert(
            "providerNameSlug".into(),
            AttrValue::String(kebab_case(&provider_name.to_lowercase())),
        );
    }
    attributes.insert(
        "className".into(),
        AttrValue::String(get_class_names(
            html,
            current_class_names,
            is_responsive && allow_responsive,
        )),
    );
    attributes
}

/// Lower-case words joined by hyphens: `Speaker Deck` → `speaker-deck`.
fn kebab_case(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Image markup for a `photo` preview.
pub fn get_photo_html(photo: &Preview) -> String {
    format!(
        "<p><img src=\"{}\" alt=\"{}\" width=\"100%\"/></p>",
        escape_html(photo.thumbnail_url.as_deref().unwrap_or_default()),
        escape_html(photo.title.as_deref().unwrap_or_default()),
    )
}

/// Paragraph block linking to `url`, used when the URL cannot be embedded.
pub fn fallback_block(url: &str) -> Block {
    let link = escape_html(url);
    let mut attributes = Attrs::new();
    attributes.insert(
        "content".into(),
        AttrValue::String(format!("<a href=\"{link}\">{link}</a>")),
    );
    Block::new("core/paragraph", attributes)
}
