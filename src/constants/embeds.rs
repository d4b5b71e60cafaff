use std::sync::LazyLock;

use fancy_regex::Regex;

pub static IFRAME_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<iframe\b").unwrap());

// the src value may be double quoted, single quoted or bare
pub static IFRAME_SRC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<iframe\b[^>]*?\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

pub static YOUTUBE_EMBED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/embed").unwrap());

pub static YOUTUBE_MUSIC_CHANNEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"music\.youtube\.com/channel/(UC[a-zA-Z0-9_-]{22})").unwrap()
});

pub static YOUTUBE_MUSIC_WATCH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"music\.youtube\.com/watch\?v=([a-zA-Z0-9_-]+)").unwrap()
});

pub static YOUTUBE_MUSIC_PLAYLIST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"music\.youtube\.com/playlist\?list=([a-zA-Z0-9_-]+)").unwrap()
});

pub static YOUTUBE_CHANNEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/channel/(UC[a-zA-Z0-9_-]{22})").unwrap());

pub static YOUTUBE_WATCH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/watch\?v=([a-zA-Z0-9_-]+)").unwrap());

pub static YOUTU_BE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtu\.be/([a-zA-Z0-9_-]+)").unwrap());
