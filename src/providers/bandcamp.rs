use crate::constants::embeds::{IFRAME_SRC_REGEX, IFRAME_TAG_REGEX};

/// Turns a Bandcamp `EmbeddedPlayer` URL (or the iframe snippet around one) into a
/// themed player URL. `theme_suffix` is appended unless the URL already carries colours.
///
/// Album and track page URLs can't be embedded without the numeric album id, so
/// they yield `None`.
pub fn embed_url(raw: &str, theme_suffix: &str) -> Option<String> {
    let url = if is_iframe(raw) {
        iframe_src(raw)?
    } else {
        raw
    };

    if url.contains("bandcamp.com/EmbeddedPlayer") {
        if url.contains("bgcol=") || url.contains("linkcol=") {
            return Some(url.to_owned());
        }

        let mut themed = String::with_capacity(url.len() + theme_suffix.len() + 1);
        themed.push_str(url);
        if !themed.ends_with('/') {
            themed.push('/');
        }
        themed.push_str(theme_suffix);

        return Some(themed);
    }

    if url.contains("bandcamp.com") {
        tracing::debug!(url = %url, "bandcamp link is a page, not an embedded player");
    }

    None
}

fn is_iframe(raw: &str) -> bool {
    IFRAME_TAG_REGEX
        .is_match(raw)
        .inspect_err(
            |e| tracing::warn!(err = ?e, "an error occurred when matching bandcamp iframe snippet"),
        )
        .unwrap_or(false)
}

fn iframe_src(html: &str) -> Option<&str> {
    match IFRAME_SRC_REGEX.captures(html) {
        Ok(Some(captures)) => (1..=3)
            .find_map(|group| captures.get(group))
            .map(|src| src.as_str())
            .filter(|src| !src.is_empty()),
        Ok(None) => {
            tracing::debug!("bandcamp iframe snippet has no src attribute");
            None
        }
        Err(e) => {
            tracing::warn!(err = ?e, "an error occurred when matching bandcamp iframe snippet");
            None
        }
    }
}
