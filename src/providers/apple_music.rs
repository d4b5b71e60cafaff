pub fn embed_url(raw: &str) -> Option<String> {
    if raw.contains("embed.music.apple.com") {
        Some(raw.to_owned())
    } else if raw.contains("music.apple.com") {
        Some(raw.replacen("music.apple.com", "embed.music.apple.com", 1))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_host_for_embed_host() {
        assert_eq!(
            embed_url("https://music.apple.com/us/album/x/123").as_deref(),
            Some("https://embed.music.apple.com/us/album/x/123")
        );
    }

    #[test]
    fn keeps_embed_host() {
        let embed = "https://embed.music.apple.com/gb/artist/y/456";
        assert_eq!(embed_url(embed).as_deref(), Some(embed));
    }

    #[test]
    fn rejects_other_hosts() {
        assert_eq!(embed_url("https://itunes.apple.com/us/album/x/123"), None);
    }
}
