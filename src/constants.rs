pub mod embeds;
pub mod version;

pub static YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Every player fills the width of its container.
pub static PLAYER_WIDTH: &str = "100%";
pub const BANDCAMP_PLAYER_HEIGHT: u32 = 120;
pub const SPOTIFY_PLAYER_HEIGHT: u32 = 155;
pub const YOUTUBE_PLAYER_HEIGHT: u32 = 155;
pub const APPLE_MUSIC_PLAYER_HEIGHT: u32 = 175;

pub static DEFAULT_BANDCAMP_SIZE: &str = "large";
pub static DEFAULT_BANDCAMP_BGCOL: &str = "f8f0fc";
pub static DEFAULT_BANDCAMP_LINKCOL: &str = "9c36b5";
pub const DEFAULT_BANDCAMP_TRACKLIST: bool = false;
pub static DEFAULT_BANDCAMP_ARTWORK: &str = "small";
pub const DEFAULT_BANDCAMP_TRANSPARENT: bool = true;
