//! Per-provider conversion of a user-pasted link into an embeddable player URL.
//!
//! Every function here is total: a link it doesn't recognise yields `None`.

pub mod apple_music;
pub mod bandcamp;
pub mod spotify;
pub mod youtube;
