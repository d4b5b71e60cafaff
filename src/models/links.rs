use serde::{Deserialize, Serialize};

/// The streaming links attached to a band or user profile.
///
/// Clients pass these around in camelCase, the backend API answers in snake_case;
/// both shapes deserialize.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreamingLinkSet {
    /// An embed URL, or the whole iframe snippet copied from Bandcamp's share dialog.
    #[serde(alias = "bandcamp_embed")]
    pub bandcamp_embed: Option<String>,
    #[serde(alias = "bandcamp_link")]
    pub bandcamp_link: Option<String>,
    #[serde(alias = "spotify_link")]
    pub spotify_link: Option<String>,
    #[serde(alias = "youtube_music_link")]
    pub youtube_music_link: Option<String>,
    #[serde(alias = "apple_music_link")]
    pub apple_music_link: Option<String>,
}

impl StreamingLinkSet {
    pub fn bandcamp_embed(&self) -> Option<&str> {
        non_empty(&self.bandcamp_embed)
    }

    pub fn bandcamp_link(&self) -> Option<&str> {
        non_empty(&self.bandcamp_link)
    }

    pub fn spotify_link(&self) -> Option<&str> {
        non_empty(&self.spotify_link)
    }

    pub fn youtube_music_link(&self) -> Option<&str> {
        non_empty(&self.youtube_music_link)
    }

    pub fn apple_music_link(&self) -> Option<&str> {
        non_empty(&self.apple_music_link)
    }
}

// an empty string counts as "not set"
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|link| !link.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_read_as_absent() {
        let links = StreamingLinkSet {
            bandcamp_embed: Some(String::new()),
            spotify_link: Some("https://open.spotify.com/track/abc".to_string()),
            ..Default::default()
        };

        assert_eq!(links.bandcamp_embed(), None);
        assert_eq!(links.bandcamp_link(), None);
        assert_eq!(
            links.spotify_link(),
            Some("https://open.spotify.com/track/abc")
        );
    }

    #[test]
    fn deserializes_client_props() {
        let links: StreamingLinkSet = serde_json::from_str(
            r#"{"bandcampEmbed": null, "spotifyLink": "https://open.spotify.com/album/xyz", "youtubeMusicLink": ""}"#,
        )
        .unwrap();

        assert_eq!(links.bandcamp_embed, None);
        assert_eq!(
            links.spotify_link.as_deref(),
            Some("https://open.spotify.com/album/xyz")
        );
        assert_eq!(links.youtube_music_link(), None);
        assert_eq!(links.apple_music_link, None);
    }

    #[test]
    fn deserializes_backend_band_record() {
        let links: StreamingLinkSet = serde_json::from_str(
            r#"{
                "id": 42,
                "name": "The Example Band",
                "bandcamp_link": "https://example.bandcamp.com/album/first",
                "apple_music_link": "https://music.apple.com/us/album/x/123"
            }"#,
        )
        .unwrap();

        assert_eq!(
            links.bandcamp_link(),
            Some("https://example.bandcamp.com/album/first")
        );
        assert_eq!(
            links.apple_music_link(),
            Some("https://music.apple.com/us/album/x/123")
        );
    }
}
