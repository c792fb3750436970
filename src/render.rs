//! HTML for the embed block in the editor and in saved post content.
//!
//! [`render_edit`] produces the editor view for a given [`EditState`]: the URL
//! placeholder, a spinner while the oEmbed preview is fetched, the "cannot
//! embed" error, or the preview itself. [`render_save`] produces the markup
//! stored in the post, where the server later swaps the bare URL for the
//! provider's embed code.

use crate::class_names::join_class_names;
use crate::icons;
use crate::providers::get_embed_info_by_provider;
use crate::types::{Attrs, BlockMetadata, Preview, attr_bool, attr_string};
use crate::upgrade::{get_attributes_from_preview, get_photo_html};

const INSTRUCTIONS: &str = "Paste a link to the content you want to display on your site.";
const INPUT_PLACEHOLDER: &str = "Enter URL to embed here…";
const CANNOT_EMBED: &str = "Sorry, this content could not be embedded.";
const LEARN_MORE_URL: &str = "https://wordpress.org/documentation/article/embeds/";

/// Everything the editor view depends on.
#[derive(Debug, Clone, Default)]
pub struct EditState {
    pub attributes: Attrs,
    /// oEmbed response for the current URL, once fetched.
    pub preview: Option<Preview>,
    pub fetching: bool,
    /// The provider refused the URL or returned nothing embeddable.
    pub cannot_embed: bool,
    /// The user reopened the URL field on an existing embed.
    pub editing_url: bool,
}

/// Escape HTML special characters to prevent XSS.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Title and icon for the block's provider, or the generic embed ones.
fn embed_info(attributes: &Attrs) -> (String, &'static str) {
    attr_string(attributes, "providerNameSlug")
        .as_deref()
        .and_then(get_embed_info_by_provider)
        .map(|v| (v.title.clone(), v.icon))
        .unwrap_or_else(|| (BlockMetadata::embed().title.clone(), icons::EMBED_CONTENT))
}

fn non_empty(attributes: &Attrs, key: &str) -> Option<String> {
    attr_string(attributes, key).filter(|s| !s.is_empty())
}

/// Render the editor view of an embed block.
pub fn render_edit(state: &EditState) -> String {
    let url = non_empty(&state.attributes, "url");

    if state.fetching {
        return String::from(
            "<div class=\"wp-block-embed is-loading\"><span class=\"components-spinner\"></span><p>Embedding…</p></div>",
        );
    }

    let preview = state.preview.as_ref().filter(|p| is_embeddable(p));
    match (url, preview) {
        (Some(url), Some(preview)) if !state.cannot_embed && !state.editing_url => {
            render_preview(&state.attributes, &url, preview)
        }
        (url, _) => {
            let cannot_embed = url.is_some()
                && !state.editing_url
                && (state.cannot_embed || state.preview.is_some());
            render_placeholder(&state.attributes, url.as_deref().unwrap_or_default(), cannot_embed)
        }
    }
}

fn is_embeddable(preview: &Preview) -> bool {
    preview.html.as_deref().is_some_and(|h| !h.is_empty())
        || preview.kind.as_deref() == Some("photo")
}

fn render_placeholder(attributes: &Attrs, url: &str, cannot_embed: bool) -> String {
    let (title, icon) = embed_info(attributes);
    let label = escape_html(&format!("{title} URL"));

    let mut html = String::from("<div class=\"components-placeholder wp-block-embed is-large\">");
    html.push_str(&format!(
        "<div class=\"components-placeholder__label\"><span class=\"block-editor-block-icon\">{icon}</span>{label}</div>"
    ));
    html.push_str(&format!(
        "<div class=\"components-placeholder__instructions\">{INSTRUCTIONS}</div>"
    ));
    html.push_str(&format!(
        "<form><input type=\"url\" value=\"{}\" class=\"components-placeholder__input\" aria-label=\"{label}\" placeholder=\"{INPUT_PLACEHOLDER}\"/><button type=\"submit\" class=\"components-button is-primary\">Embed</button></form>",
        escape_html(url),
    ));
    html.push_str(&format!(
        "<div class=\"components-placeholder__learn-more\"><a href=\"{LEARN_MORE_URL}\" target=\"_blank\" rel=\"external noreferrer noopener\">Learn more about embeds</a></div>"
    ));
    if cannot_embed {
        html.push_str(&format!(
            "<div class=\"components-placeholder__error\"><div class=\"components-placeholder__instructions\">{CANNOT_EMBED}</div><button type=\"button\" class=\"components-button is-secondary\">Try again</button><button type=\"button\" class=\"components-button is-secondary\">Convert to link</button></div>"
        ));
    }
    html.push_str("</div>");
    html
}

fn render_preview(attributes: &Attrs, url: &str, preview: &Preview) -> String {
    let (title, _) = embed_info(attributes);
    let existing = attr_string(attributes, "className").unwrap_or_default();
    let merged = get_attributes_from_preview(
        Some(preview),
        &title,
        &existing,
        attr_bool(attributes, "responsive", false),
        attr_bool(attributes, "allowResponsive", true),
    );

    let kind = non_empty(&merged, "type");
    let body = if kind.as_deref() == Some("photo") {
        get_photo_html(preview)
    } else {
        preview.html.clone().unwrap_or_default()
    };

    let classes = figure_classes(
        &attr_string(&merged, "className").unwrap_or_default(),
        kind.as_deref(),
        non_empty(&merged, "providerNameSlug").as_deref(),
    );
    let mut html = format!(
        "<figure class=\"{}\" data-url=\"{}\"><div class=\"wp-block-embed__wrapper\">{body}</div>",
        escape_html(&classes),
        escape_html(url),
    );
    push_caption(&mut html, attributes);
    html.push_str("</figure>");
    html
}

fn figure_classes(class_name: &str, kind: Option<&str>, slug: Option<&str>) -> String {
    let type_class = kind.map(|k| format!("is-type-{k}")).unwrap_or_default();
    let provider_class = slug.map(|s| format!("is-provider-{s}")).unwrap_or_default();
    let block_class = slug.map(|s| format!("wp-block-embed-{s}")).unwrap_or_default();
    join_class_names([
        "wp-block-embed",
        class_name,
        type_class.as_str(),
        provider_class.as_str(),
        block_class.as_str(),
    ])
}

fn push_caption(html: &mut String, attributes: &Attrs) {
    // caption is rich text and already HTML
    if let Some(caption) = non_empty(attributes, "caption") {
        html.push_str(&format!(
            "<figcaption class=\"wp-element-caption\">{caption}</figcaption>"
        ));
    }
}

/// Render the markup stored in post content. Empty when there is no URL.
pub fn render_save(attributes: &Attrs) -> String {
    let Some(url) = non_empty(attributes, "url") else {
        return String::new();
    };

    let classes = figure_classes(
        &attr_string(attributes, "className").unwrap_or_default(),
        non_empty(attributes, "type").as_deref(),
        non_empty(attributes, "providerNameSlug").as_deref(),
    );
    let mut html = format!(
        "<figure class=\"{}\"><div class=\"wp-block-embed__wrapper\">\n{}\n</div>",
        escape_html(&classes),
        escape_html(&url),
    );
    push_caption(&mut html, attributes);
    html.push_str("</figure>");
    html
}
