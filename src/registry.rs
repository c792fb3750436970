//! Block type registry: the host's map from block type names to definitions.
//!
//! The upgrade logic only ever talks to a [`BlockTypeRegistry`] handed to it,
//! so hosts can plug in their own store. [`InMemoryRegistry`] covers tests and
//! simple embedders.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::EmbedError;
use crate::providers::Variation;
use crate::types::{AttrValue, AttributeSchema, Attrs, Block, BlockMetadata};

static BLOCK_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9-]*/[a-z][a-z0-9-]*$").expect("valid block name regex")
});

/// A registered block type.
#[derive(Debug, Clone)]
pub struct BlockType {
    pub name: String,
    pub title: String,
    pub category: String,
    pub attributes: BTreeMap<String, AttributeSchema>,
    pub variations: Vec<Variation>,
}

impl BlockType {
    pub fn new(name: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        BlockType {
            name: name.into(),
            title: title.into(),
            category: category.into(),
            attributes: BTreeMap::new(),
            variations: Vec::new(),
        }
    }

    /// Block type described by `meta`, without variations.
    pub fn from_metadata(meta: &BlockMetadata) -> Self {
        BlockType {
            name: meta.name.clone(),
            title: meta.title.clone(),
            category: meta.category.clone(),
            attributes: meta.attributes.clone(),
            variations: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: BTreeMap<String, AttributeSchema>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_variations(mut self, variations: Vec<Variation>) -> Self {
        self.variations = variations;
        self
    }

    pub fn variation(&self, name: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.name == name)
    }

    /// Create a block of this type.
    ///
    /// Only attributes declared in the schema survive. A declared attribute
    /// that is missing, null, or of the wrong kind takes its default, if any.
    /// A type without a schema keeps the attributes as given.
    pub fn create_block(&self, attributes: &Attrs) -> Block {
        if self.attributes.is_empty() {
            return Block::new(self.name.clone(), attributes.clone());
        }
        let mut sanitized = Attrs::new();
        for (key, schema) in &self.attributes {
            let given = attributes
                .get(key)
                .filter(|v| **v != AttrValue::Null && schema.accepts(v));
            if let Some(value) = given.or(schema.default.as_ref()) {
                sanitized.insert(key.clone(), value.clone());
            }
        }
        Block::new(self.name.clone(), sanitized)
    }
}

/// Capability to register, unregister and look up block types.
pub trait BlockTypeRegistry {
    /// Add a block type. Fails if the name is malformed or already taken.
    fn register(&mut self, block_type: BlockType) -> Result<(), EmbedError>;

    /// Remove a block type, returning it if it was registered.
    fn unregister(&mut self, name: &str) -> Option<BlockType>;

    fn get(&self, name: &str) -> Option<&BlockType>;

    fn is_registered(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// `BTreeMap`-backed registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    types: BTreeMap<String, BlockType>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

impl BlockTypeRegistry for InMemoryRegistry {
    fn register(&mut self, block_type: BlockType) -> Result<(), EmbedError> {
        if !BLOCK_NAME.is_match(&block_type.name) {
            warn!(name = %block_type.name, "rejected block type with malformed name");
            return Err(EmbedError::InvalidBlockName(block_type.name));
        }
        if self.types.contains_key(&block_type.name) {
            warn!(name = %block_type.name, "block type already registered");
            return Err(EmbedError::AlreadyRegistered(block_type.name));
        }
        debug!(name = %block_type.name, variations = block_type.variations.len(), "registered block type");
        self.types.insert(block_type.name.clone(), block_type);
        Ok(())
    }

    fn unregister(&mut self, name: &str) -> Option<BlockType> {
        let removed = self.types.remove(name);
        if removed.is_some() {
            debug!(name, "unregistered block type");
        }
        removed
    }

    fn get(&self, name: &str) -> Option<&BlockType> {
        self.types.get(name)
    }
}
