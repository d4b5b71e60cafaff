use anyhow::{anyhow, bail};

use crate::constants::{
    DEFAULT_BANDCAMP_ARTWORK, DEFAULT_BANDCAMP_BGCOL, DEFAULT_BANDCAMP_LINKCOL,
    DEFAULT_BANDCAMP_SIZE, DEFAULT_BANDCAMP_TRACKLIST, DEFAULT_BANDCAMP_TRANSPARENT,
};

/// Look and feel of the Bandcamp player, rendered into the path segments
/// Bandcamp reads after `EmbeddedPlayer/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandcampTheme {
    pub size: String,
    /// Background colour, six hex digits without `#`.
    pub bgcol: String,
    /// Link colour, six hex digits without `#`.
    pub linkcol: String,
    pub tracklist: bool,
    pub artwork: String,
    pub transparent: bool,
}

impl Default for BandcampTheme {
    fn default() -> Self {
        BandcampTheme {
            size: DEFAULT_BANDCAMP_SIZE.to_string(),
            bgcol: DEFAULT_BANDCAMP_BGCOL.to_string(),
            linkcol: DEFAULT_BANDCAMP_LINKCOL.to_string(),
            tracklist: DEFAULT_BANDCAMP_TRACKLIST,
            artwork: DEFAULT_BANDCAMP_ARTWORK.to_string(),
            transparent: DEFAULT_BANDCAMP_TRANSPARENT,
        }
    }
}

impl BandcampTheme {
    pub fn suffix(&self) -> String {
        format!(
            "size={}/bgcol={}/linkcol={}/tracklist={}/artwork={}/transparent={}/",
            self.size, self.bgcol, self.linkcol, self.tracklist, self.artwork, self.transparent
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedConfig {
    pub bandcamp_theme: BandcampTheme,
}

impl EmbedConfig {
    /// Reads `BANDCAMP_EMBED_*` from the process environment. Call `dotenvy::dotenv()`
    /// first to pick up a `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EmbedConfig::from_env`], reading values through `lookup`.
    /// Unset keys keep their default; a set but malformed value is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut theme = BandcampTheme::default();

        if let Some(size) = lookup("BANDCAMP_EMBED_SIZE") {
            theme.size = path_segment("BANDCAMP_EMBED_SIZE", size)?;
        }

        if let Some(bgcol) = lookup("BANDCAMP_EMBED_BGCOL") {
            theme.bgcol = hex_colour("BANDCAMP_EMBED_BGCOL", bgcol)?;
        }

        if let Some(linkcol) = lookup("BANDCAMP_EMBED_LINKCOL") {
            theme.linkcol = hex_colour("BANDCAMP_EMBED_LINKCOL", linkcol)?;
        }

        if let Some(tracklist) = lookup("BANDCAMP_EMBED_TRACKLIST") {
            theme.tracklist = flag("BANDCAMP_EMBED_TRACKLIST", &tracklist)?;
        }

        if let Some(artwork) = lookup("BANDCAMP_EMBED_ARTWORK") {
            theme.artwork = path_segment("BANDCAMP_EMBED_ARTWORK", artwork)?;
        }

        if let Some(transparent) = lookup("BANDCAMP_EMBED_TRANSPARENT") {
            theme.transparent = flag("BANDCAMP_EMBED_TRANSPARENT", &transparent)?;
        }

        if theme == BandcampTheme::default() {
            tracing::debug!("using the default bandcamp player theme.");
        } else {
            tracing::info!(suffix = %theme.suffix(), "using a custom bandcamp player theme.");
        }

        Ok(EmbedConfig {
            bandcamp_theme: theme,
        })
    }
}

fn hex_colour(key: &str, value: String) -> anyhow::Result<String> {
    let value = value.trim_start_matches('#').to_string();

    if value.len() != 6 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("{key} must be a six digit hex colour, got {value:?}");
    }

    Ok(value.to_ascii_lowercase())
}

fn flag(key: &str, value: &str) -> anyhow::Result<bool> {
    value
        .parse::<bool>()
        .map_err(|_| anyhow!("{key} must be `true` or `false`, got {value:?}"))
}

fn path_segment(key: &str, value: String) -> anyhow::Result<String> {
    if value.is_empty() || value.contains(['/', '=']) {
        bail!("{key} must be a single non-empty path value, got {value:?}");
    }

    Ok(value)
}
