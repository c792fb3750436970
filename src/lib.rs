//! `embed-blocks`: the logic behind a block editor's embed block.
//!
//! An embed block shows content hosted elsewhere (a video, a post, a track)
//! from nothing but its URL. This crate provides the pieces that do not need
//! a browser:
//!
//! - [`find_more_suitable_block`] classifies a URL against the ordered table
//!   of known providers;
//! - [`get_class_names`] derives the aspect-ratio classes of a responsive
//!   embed from its iframe;
//! - [`create_upgraded_embed_block`] turns a generic embed block into a
//!   provider variation, if the host registered the target block type;
//! - [`get_embed_info_by_provider`] returns a provider's title and icon;
//! - [`render_edit`] and [`render_save`] produce the block's editor and saved
//!   HTML.
//!
//! # Quick start
//!
//! ```
//! use embed_blocks::{
//!     Block, BlockMetadata, BlockType, BlockTypeRegistry, InMemoryRegistry,
//!     create_upgraded_embed_block,
//! };
//!
//! let mut registry = InMemoryRegistry::new();
//! registry.register(BlockType::from_metadata(BlockMetadata::embed())).unwrap();
//!
//! let mut attributes = embed_blocks::Attrs::new();
//! attributes.insert("url".into(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ".into());
//! let block = Block::new("core/embed", attributes);
//!
//! let upgraded = create_upgraded_embed_block(&block, &registry).unwrap();
//! assert_eq!(upgraded.attr_string("providerNameSlug").as_deref(), Some("youtube"));
//! ```

pub mod class_names;
pub mod error;
pub mod icons;
pub mod providers;
pub mod registry;
pub mod render;
pub mod types;
pub mod upgrade;

pub use class_names::{get_class_names, remove_aspect_ratio_classes};
pub use error::EmbedError;
pub use providers::{
    Pattern, ProviderTable, Variation, find_more_suitable_block, get_embed_info_by_provider,
    matches_patterns,
};
pub use registry::{BlockType, BlockTypeRegistry, InMemoryRegistry};
pub use render::{EditState, render_edit, render_save};
pub use types::*;
pub use upgrade::{
    EmbedUpgrader, create_upgraded_embed_block, fallback_block, get_attributes_from_preview,
    get_photo_html, is_from_wordpress,
};

/// Bundled provider table, see [`ProviderTable::from_json`] for the format.
pub const VARIATIONS_JSON: &str = include_str!("../data/variations.json");

/// Bundled `block.json` of the `core/embed` block.
pub const EMBED_BLOCK_JSON: &str = include_str!("../data/block.json");
