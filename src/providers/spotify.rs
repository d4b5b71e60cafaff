pub fn embed_url(raw: &str) -> Option<String> {
    if raw.contains("open.spotify.com/embed") {
        Some(raw.to_owned())
    } else if raw.contains("open.spotify.com") {
        Some(raw.replacen("open.spotify.com/", "open.spotify.com/embed/", 1))
    } else {
        None
    }
}
