//! Turns the streaming links on a Goodsongs band profile into the one inline player
//! the web and mobile clients render.
//!
//! ```
//! use goodsongs_embed::{EmbedResolver, Platform, StreamingLinkSet};
//!
//! let links = StreamingLinkSet {
//!     spotify_link: Some("https://open.spotify.com/track/abc".to_string()),
//!     ..Default::default()
//! };
//!
//! let resolved = EmbedResolver::default().resolve(&links);
//! assert_eq!(resolved.platform, Platform::Spotify);
//! assert_eq!(
//!     resolved.embed_url.as_deref(),
//!     Some("https://open.spotify.com/embed/track/abc")
//! );
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod providers;
pub mod resolver;

pub use config::{BandcampTheme, EmbedConfig};
pub use models::{
    embed::{Dimensions, Platform, ResolvedEmbed},
    links::StreamingLinkSet,
};
pub use resolver::EmbedResolver;
