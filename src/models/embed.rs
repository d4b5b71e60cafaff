use std::fmt;

use serde::Serialize;

use crate::constants::{
    APPLE_MUSIC_PLAYER_HEIGHT, BANDCAMP_PLAYER_HEIGHT, PLAYER_WIDTH, SPOTIFY_PLAYER_HEIGHT,
    YOUTUBE_PLAYER_HEIGHT,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Platform {
    Bandcamp,
    Spotify,
    YoutubeMusic,
    AppleMusic,
    /// Nothing in the link set could be turned into a player.
    None,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Bandcamp => "bandcamp",
            Platform::Spotify => "spotify",
            Platform::YoutubeMusic => "youtubeMusic",
            Platform::AppleMusic => "appleMusic",
            Platform::None => "none",
        }
    }

    /// Size of the frame the player is rendered in.
    pub fn dimensions(&self) -> Dimensions {
        let height = match self {
            Platform::Bandcamp => BANDCAMP_PLAYER_HEIGHT,
            Platform::Spotify => SPOTIFY_PLAYER_HEIGHT,
            Platform::YoutubeMusic => YOUTUBE_PLAYER_HEIGHT,
            Platform::AppleMusic => APPLE_MUSIC_PLAYER_HEIGHT,
            Platform::None => 0,
        };

        Dimensions {
            width: PLAYER_WIDTH,
            height,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    /// CSS width, always relative to the container.
    pub width: &'static str,
    /// Height in pixels.
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEmbed {
    pub platform: Platform,
    pub embed_url: Option<String>,
    pub dimensions: Dimensions,
}

impl ResolvedEmbed {
    pub fn new(platform: Platform, embed_url: String) -> Self {
        ResolvedEmbed {
            platform,
            embed_url: Some(embed_url),
            dimensions: platform.dimensions(),
        }
    }

    pub fn none() -> Self {
        ResolvedEmbed {
            platform: Platform::None,
            embed_url: None,
            dimensions: Platform::None.dimensions(),
        }
    }

    pub fn is_playable(&self) -> bool {
        self.platform != Platform::None
    }
}
