use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::constants::{
    embeds::{
        YOUTUBE_CHANNEL_REGEX, YOUTUBE_EMBED_REGEX, YOUTUBE_MUSIC_CHANNEL_REGEX,
        YOUTUBE_MUSIC_PLAYLIST_REGEX, YOUTUBE_MUSIC_WATCH_REGEX, YOUTUBE_WATCH_REGEX,
        YOUTU_BE_REGEX,
    },
    YOUTUBE_EMBED_BASE,
};

type Rewrite = fn(&str) -> String;

// tried top to bottom, the first pattern that matches decides the url.
// each pattern captures the id the rewrite needs as group 1.
static REWRITES: [(&LazyLock<Regex>, Rewrite); 6] = [
    (&YOUTUBE_MUSIC_CHANNEL_REGEX, uploads_playlist),
    (&YOUTUBE_MUSIC_WATCH_REGEX, video),
    (&YOUTUBE_MUSIC_PLAYLIST_REGEX, playlist),
    (&YOUTUBE_CHANNEL_REGEX, uploads_playlist),
    (&YOUTUBE_WATCH_REGEX, video),
    (&YOUTU_BE_REGEX, video),
];

/// Accepts YouTube Music and plain YouTube links to a video, a playlist or a channel.
/// A channel plays its uploads playlist.
pub fn embed_url(raw: &str) -> Option<String> {
    if matches(&YOUTUBE_EMBED_REGEX, raw) {
        return Some(raw.to_owned());
    }

    REWRITES
        .iter()
        .find_map(|(regex, rewrite)| match regex.captures(raw) {
            Ok(Some(captures)) => Some(rewrite(&captures[1])),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(err = ?e, url = %raw, "an error occurred when matching youtube link");
                None
            }
        })
}

fn matches(regex: &Regex, raw: &str) -> bool {
    regex
        .is_match(raw)
        .inspect_err(
            |e| tracing::warn!(err = ?e, url = %raw, "an error occurred when matching youtube link"),
        )
        .unwrap_or(false)
}

fn video(id: &str) -> String {
    format!("{YOUTUBE_EMBED_BASE}/{id}")
}

fn playlist(list: &str) -> String {
    format!("{YOUTUBE_EMBED_BASE}/videoseries?list={list}")
}

/// A channel's uploads playlist shares its id, with `UU` in place of the `UC` prefix.
fn uploads_playlist(channel_id: &str) -> String {
    let id = channel_id.strip_prefix("UC").unwrap_or(channel_id);

    playlist(&format!("UU{id}"))
}
