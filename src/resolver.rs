use crate::{
    config::BandcampTheme,
    models::{
        embed::{Platform, ResolvedEmbed},
        links::StreamingLinkSet,
    },
    providers::{apple_music, bandcamp, spotify, youtube},
};

/// What happens when a link is set but can't be turned into a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OnFailure {
    /// Try the next link in line.
    FallThrough,
    /// Give up and render nothing.
    Stop,
}

type Transform<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Picks the single player to show for a band's streaming links.
///
/// Links are tried in a fixed order: Bandcamp embed, Bandcamp link, Spotify,
/// YouTube Music, Apple Music. The first one that converts into an embed URL wins.
/// A Bandcamp embed that is set but unusable stops the search: the band asked for
/// that player specifically, so nothing else is shown in its place.
#[derive(Clone, Debug)]
pub struct EmbedResolver {
    bandcamp_suffix: String,
}

impl Default for EmbedResolver {
    fn default() -> Self {
        EmbedResolver::new(&BandcampTheme::default())
    }
}

impl EmbedResolver {
    pub fn new(bandcamp_theme: &BandcampTheme) -> Self {
        EmbedResolver {
            bandcamp_suffix: bandcamp_theme.suffix(),
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn resolve(&self, links: &StreamingLinkSet) -> ResolvedEmbed {
        let bandcamp = |raw: &str| bandcamp::embed_url(raw, &self.bandcamp_suffix);

        let steps: [(Option<&str>, Platform, Transform<'_>, OnFailure); 5] = [
            (
                links.bandcamp_embed(),
                Platform::Bandcamp,
                &bandcamp,
                OnFailure::Stop,
            ),
            (
                links.bandcamp_link(),
                Platform::Bandcamp,
                &bandcamp,
                OnFailure::FallThrough,
            ),
            (
                links.spotify_link(),
                Platform::Spotify,
                &spotify::embed_url,
                OnFailure::FallThrough,
            ),
            (
                links.youtube_music_link(),
                Platform::YoutubeMusic,
                &youtube::embed_url,
                OnFailure::FallThrough,
            ),
            (
                links.apple_music_link(),
                Platform::AppleMusic,
                &apple_music::embed_url,
                OnFailure::FallThrough,
            ),
        ];

        for (link, platform, transform, on_failure) in steps {
            let Some(raw) = link else {
                continue;
            };

            match transform(raw) {
                Some(embed_url) => {
                    tracing::debug!(%platform, embed_url = %embed_url, "resolved embed");
                    return ResolvedEmbed::new(platform, embed_url);
                }
                None if on_failure == OnFailure::Stop => {
                    tracing::debug!(%platform, link = %raw, "unusable link blocks lower priority links");
                    return ResolvedEmbed::none();
                }
                None => {
                    tracing::debug!(%platform, link = %raw, "skipping unusable link");
                }
            }
        }

        tracing::debug!("no playable link");
        ResolvedEmbed::none()
    }
}
