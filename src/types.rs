//! Core data types: blocks, attribute values, oEmbed previews and block metadata.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Name of the generic embed block that every provider variation belongs to.
pub const DEFAULT_EMBED_BLOCK: &str = "core/embed";

/// `type` attribute value marking an embed that came from another WordPress site.
pub const WP_EMBED_TYPE: &str = "wp-embed";

/// Attribute map of a block. Ordered so serialized output is stable.
pub type Attrs = BTreeMap<String, AttrValue>;

/// A single block attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

/// A block record: the block type name plus its attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    #[serde(default)]
    pub attributes: Attrs,
}

impl Block {
    pub fn new(name: impl Into<String>, attributes: Attrs) -> Self {
        Block {
            name: name.into(),
            attributes,
        }
    }

    /// String value of an attribute. Numbers and bools are stringified, null is absent.
    pub fn attr_string(&self, key: &str) -> Option<String> {
        attr_string(&self.attributes, key)
    }
}

/// The parts of an oEmbed response the embed block looks at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Preview {
    /// Parse an oEmbed JSON response.
    pub fn from_json(input: &str) -> Result<Self, crate::error::EmbedError> {
        Ok(serde_json::from_str(input)?)
    }
}

// ------------------------------------------------------------------
// Block metadata (block.json)
// ------------------------------------------------------------------

/// Declared type of a block attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrKind {
    String,
    Boolean,
    Number,
}

/// Schema entry for one block attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSchema {
    #[serde(rename = "type")]
    pub kind: AttrKind,
    #[serde(default)]
    pub default: Option<AttrValue>,
}

impl AttributeSchema {
    /// Whether `value` is acceptable for this attribute. Null always is.
    pub fn accepts(&self, value: &AttrValue) -> bool {
        matches!(
            (self.kind, value),
            (_, AttrValue::Null)
                | (AttrKind::String, AttrValue::String(_))
                | (AttrKind::Boolean, AttrValue::Bool(_))
                | (AttrKind::Number, AttrValue::Number(_))
        )
    }
}

/// Static description of a block type, as shipped in `block.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockMetadata {
    pub name: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeSchema>,
}

impl BlockMetadata {
    pub fn from_json(input: &str) -> Result<Self, crate::error::EmbedError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Metadata of the bundled `core/embed` block.
    pub fn embed() -> &'static BlockMetadata {
        &EMBED_METADATA
    }
}

static EMBED_METADATA: LazyLock<BlockMetadata> = LazyLock::new(|| {
    BlockMetadata::from_json(crate::EMBED_BLOCK_JSON).expect("bundled block.json is valid")
});

// ------------------------------------------------------------------
// Attribute extraction helpers
// ------------------------------------------------------------------

pub(crate) fn attr_string(attrs: &Attrs, key: &str) -> Option<String> {
    attrs.get(key).and_then(|v| match v {
        AttrValue::String(s) => Some(s.clone()),
        AttrValue::Number(n) => Some(n.to_string()),
        AttrValue::Bool(b) => Some(b.to_string()),
        AttrValue::Null => None,
    })
}

/// Boolean attribute, falling back to `default` when absent or not a bool.
pub(crate) fn attr_bool(attrs: &Attrs, key: &str, default: bool) -> bool {
    match attrs.get(key) {
        Some(AttrValue::Bool(b)) => *b,
        _ => default,
    }
}
