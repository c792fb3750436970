//! End-to-end checks of the embed block through the public API, mirroring how
//! an editor host drives it.

use embed_blocks::{
    AttrValue, Attrs, Block, BlockMetadata, BlockType, BlockTypeRegistry, DEFAULT_EMBED_BLOCK,
    EditState, InMemoryRegistry, ProviderTable, create_upgraded_embed_block,
    find_more_suitable_block, get_class_names, get_embed_info_by_provider, icons, render_edit,
    render_save,
};
use pretty_assertions::assert_eq;

fn url_block(url: &str) -> Block {
    let mut attributes = Attrs::new();
    attributes.insert("url".into(), AttrValue::from(url));
    Block::new(DEFAULT_EMBED_BLOCK, attributes)
}

fn embed_block_type() -> BlockType {
    BlockType::from_metadata(BlockMetadata::embed())
        .with_variations(ProviderTable::builtin().variations().to_vec())
}

#[test]
fn edit_view_of_new_block_is_the_placeholder() {
    let html = render_edit(&EditState::default());
    assert!(html.starts_with("<div class=\"components-placeholder wp-block-embed is-large\">"));
    assert!(html.contains("Embed URL"));
    assert!(html.contains("Learn more about embeds"));
}

#[test]
fn find_more_suitable_block_matches_a_url_to_a_provider() {
    let twitter = find_more_suitable_block("https://twitter.com/notnownikki").unwrap();
    assert_eq!(twitter.name, "twitter");

    let youtube = find_more_suitable_block("https://www.youtube.com/watch?v=bNnfuvC1LlU").unwrap();
    assert_eq!(youtube.name, "youtube");

    assert!(find_more_suitable_block("https://example.com/").is_none());
}

#[test]
fn get_class_names_handles_responsive_and_not() {
    let html = r#"<iframe height="9" width="16"></iframe>"#;
    assert_eq!(
        get_class_names(html, "", true),
        "wp-embed-aspect-16-9 wp-has-aspect-ratio"
    );
    assert_eq!(get_class_names(html, "", false), "");
    assert_eq!(
        get_class_names(html, "lovely wp-embed-aspect-16-9 wp-has-aspect-ratio", false),
        "lovely"
    );
}

#[test]
fn no_upgrade_when_block_type_does_not_exist() {
    let registry = InMemoryRegistry::new();
    let block = url_block("https://www.youtube.com/watch?v=dQw4w");
    assert_eq!(create_upgraded_embed_block(&block, &registry), None);
}

#[test]
fn no_upgrade_when_no_url_provided() {
    let registry = InMemoryRegistry::new();
    let block = Block::new("some name", Attrs::new());
    assert_eq!(create_upgraded_embed_block(&block, &registry), None);
}

#[test]
fn youtube_url_upgrades_once_embed_is_registered() {
    let mut registry = InMemoryRegistry::new();
    registry.register(embed_block_type()).unwrap();

    let result =
        create_upgraded_embed_block(&url_block("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), &registry);

    registry.unregister(DEFAULT_EMBED_BLOCK);

    let result = result.expect("block should upgrade");
    assert_eq!(result.name, DEFAULT_EMBED_BLOCK);
    assert_eq!(
        result.attributes.get("providerNameSlug"),
        Some(&AttrValue::from("youtube"))
    );

    // once unregistered, the same URL no longer upgrades
    assert_eq!(
        create_upgraded_embed_block(&url_block("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), &registry),
        None
    );
}

#[test]
fn embed_info_from_existing_variation() {
    let info = get_embed_info_by_provider("instagram").unwrap();
    assert_eq!(info.title, "Instagram");
    assert_eq!(info.icon, icons::EMBED_INSTAGRAM);

    assert!(get_embed_info_by_provider("i do not exist").is_none());
}

#[test]
fn upgraded_block_saves_with_provider_classes() {
    let mut registry = InMemoryRegistry::new();
    registry.register(embed_block_type()).unwrap();

    let upgraded =
        create_upgraded_embed_block(&url_block("https://open.spotify.com/track/abc"), &registry).unwrap();
    let saved = render_save(&upgraded.attributes);
    assert!(saved.starts_with(
        "<figure class=\"wp-block-embed is-provider-spotify wp-block-embed-spotify\">"
    ));
    assert!(saved.contains("\nhttps://open.spotify.com/track/abc\n"));
}
