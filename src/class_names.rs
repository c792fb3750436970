//! Aspect-ratio class names for responsive embeds.
//!
//! An embed whose preview HTML contains an iframe with `width` and `height`
//! gets `wp-embed-aspect-{w}-{h}` (the ratio reduced to lowest terms) and
//! `wp-has-aspect-ratio`, so themes can keep the iframe's proportions when it
//! is scaled to the content width.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

pub const ASPECT_RATIO_CLASS_PREFIX: &str = "wp-embed-aspect-";
pub const HAS_ASPECT_RATIO_CLASS: &str = "wp-has-aspect-ratio";

// quoted attribute values may contain '>'
static IFRAME_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<iframe\b(?:[^>"']|"[^"]*"|'[^']*')*>"#).expect("valid iframe regex")
});

static DIMENSION_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s(width|height)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("valid dimension regex")
});

/// Reconcile `existing` class names with the aspect ratio of the iframe in `html`.
///
/// - `allow_responsive == false`: aspect-ratio classes are stripped from
///   `existing`, whatever the HTML contains.
/// - an iframe with positive integer `width` and `height`: old aspect-ratio
///   classes are replaced by the ones for this iframe.
/// - otherwise `existing` is returned untouched.
pub fn get_class_names(html: &str, existing: &str, allow_responsive: bool) -> String {
    if !allow_responsive {
        return remove_aspect_ratio_classes(existing);
    }

    match iframe_dimensions(html) {
        Some((width, height)) => {
            let ratio_class = aspect_ratio_class(width, height);
            trace!(width, height, class = %ratio_class, "derived embed aspect ratio");
            join_class_names([
                remove_aspect_ratio_classes(existing).as_str(),
                ratio_class.as_str(),
                HAS_ASPECT_RATIO_CLASS,
            ])
        }
        None => existing.to_string(),
    }
}

/// Drop every `wp-embed-aspect-*` class and `wp-has-aspect-ratio`.
pub fn remove_aspect_ratio_classes(existing: &str) -> String {
    join_class_names(
        existing
            .split_whitespace()
            .filter(|c| !is_aspect_ratio_class(c)),
    )
}

fn is_aspect_ratio_class(class: &str) -> bool {
    class == HAS_ASPECT_RATIO_CLASS || class.starts_with(ASPECT_RATIO_CLASS_PREFIX)
}

/// `wp-embed-aspect-{w}-{h}` with the ratio reduced by the greatest common divisor.
///
/// Both dimensions must be non-zero.
pub fn aspect_ratio_class(width: u64, height: u64) -> String {
    let divisor = gcd(width, height);
    format!(
        "{ASPECT_RATIO_CLASS_PREFIX}{}-{}",
        width / divisor,
        height / divisor
    )
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `width` and `height` of the first iframe in `html`, when both are positive integers.
pub fn iframe_dimensions(html: &str) -> Option<(u64, u64)> {
    let tag = IFRAME_TAG.find(html)?.as_str();

    let mut width = None;
    let mut height = None;
    for caps in DIMENSION_ATTR.captures_iter(tag) {
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().trim());
        let slot = if caps[1].eq_ignore_ascii_case("width") {
            &mut width
        } else {
            &mut height
        };
        // first occurrence wins, as in an HTML parser
        if slot.is_none() {
            *slot = Some(value.and_then(parse_dimension));
        }
    }

    match (width.flatten(), height.flatten()) {
        (Some(w), Some(h)) => Some((w, h)),
        _ => None,
    }
}

/// Positive integer dimension. Integral decimals such as `16.0` count; `16.5` does not.
fn parse_dimension(value: &str) -> Option<u64> {
    if let Ok(n) = value.parse::<u64>() {
        return (n > 0).then_some(n);
    }
    let n: f64 = value.parse().ok()?;
    (n.is_finite() && n >= 1.0 && n.fract() == 0.0 && n <= u32::MAX as f64).then_some(n as u64)
}

/// Join class lists into one space-separated string.
///
/// Each item may itself hold several classes. Empty items are skipped and
/// repeated classes keep only their first position.
pub fn join_class_names<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen = HashSet::new();
    let mut out: Vec<&str> = Vec::new();
    for item in items {
        for class in item.split_whitespace() {
            if seen.insert(class) {
                out.push(class);
            }
        }
    }
    out.join(" ")
}
