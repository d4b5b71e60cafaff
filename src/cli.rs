//! The pieces of the `goodsongs-embed` binary that don't touch the process:
//! argument parsing, input reading and output rendering.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use clap::Parser;

use crate::{constants::version::LONG_VERSION, EmbedResolver, StreamingLinkSet};

/// Resolve a band's streaming links into the player the apps would show.
///
/// Reads the links as JSON (camelCase client props or a snake_case band record)
/// and prints the resolved embed as JSON.
#[derive(Debug, Parser)]
#[command(name = "goodsongs-embed", version, long_version = LONG_VERSION.as_str())]
pub struct Args {
    /// JSON file to read; stdin when omitted.
    pub file: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Reads the whole of `file`, or of `stdin` when no file is given.
pub fn read_input(file: Option<&Path>, mut stdin: impl Read) -> anyhow::Result<String> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path).inspect_err(
            |e| tracing::error!(err = ?e, path = %path.display(), "an error occurred when reading input file"),
        )?,
        None => {
            let mut input = String::new();
            stdin
                .read_to_string(&mut input)
                .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when reading stdin"))?;
            input
        }
    };

    Ok(input)
}

/// Decodes a link set, resolves it and encodes the result. A link set with nothing
/// playable is not an error; only undecodable input is.
pub fn render(input: &str, resolver: &EmbedResolver, pretty: bool) -> anyhow::Result<String> {
    let links: StreamingLinkSet = serde_json::from_str(input)
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when decoding link set"))?;

    let resolved = resolver.resolve(&links);
    if !resolved.is_playable() {
        tracing::info!("none of the links can be embedded.");
    }

    let output = if pretty {
        serde_json::to_string_pretty(&resolved)?
    } else {
        serde_json::to_string(&resolved)?
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::error::ErrorKind;

    use super::*;

    const NONE_JSON: &str =
        r#"{"platform":"none","embedUrl":null,"dimensions":{"width":"100%","height":0}}"#;

    #[test]
    fn unresolvable_links_render_as_none() {
        let resolver = EmbedResolver::default();

        assert_eq!(render("{}", &resolver, false).unwrap(), NONE_JSON);
        assert_eq!(
            render(
                r#"{"bandcampEmbed": "https://artist.bandcamp.com/album/foo", "spotifyLink": "https://open.spotify.com/track/abc"}"#,
                &resolver,
                false
            )
            .unwrap(),
            NONE_JSON
        );
    }

    #[test]
    fn renders_resolved_embed() {
        let output = render(
            r#"{"spotify_link": "https://open.spotify.com/track/abc"}"#,
            &EmbedResolver::default(),
            false,
        )
        .unwrap();

        assert_eq!(
            output,
            r#"{"platform":"spotify","embedUrl":"https://open.spotify.com/embed/track/abc","dimensions":{"width":"100%","height":155}}"#
        );
    }

    #[test]
    fn pretty_output_is_the_same_document() {
        let resolver = EmbedResolver::default();
        let input = r#"{"appleMusicLink": "https://music.apple.com/us/album/x/123"}"#;

        let pretty = render(input, &resolver, true).unwrap();
        let compact = render(input, &resolver, false).unwrap();

        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap(),
            serde_json::from_str::<serde_json::Value>(&compact).unwrap()
        );
    }

    #[test]
    fn undecodable_input_is_an_error() {
        let resolver = EmbedResolver::default();

        assert!(render("not json", &resolver, false).is_err());
        assert!(render(r#"{"spotifyLink": 42}"#, &resolver, false).is_err());
        assert!(render("", &resolver, false).is_err());
    }

    #[test]
    fn reads_stdin_without_a_file() {
        let input = read_input(None, &b"{\"spotifyLink\": null}"[..]).unwrap();

        assert_eq!(input, "{\"spotifyLink\": null}");
    }

    #[test]
    fn reads_file_over_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("band.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(br#"{"youtubeMusicLink": "https://youtu.be/abc"}"#)
            .unwrap();

        let input = read_input(Some(path.as_path()), &b"ignored"[..]).unwrap();

        assert_eq!(input, r#"{"youtubeMusicLink": "https://youtu.be/abc"}"#);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(read_input(Some(dir.path().join("missing.json").as_path()), &b""[..]).is_err());
    }

    #[test]
    fn parses_arguments() {
        let args = Args::try_parse_from(["goodsongs-embed", "band.json", "--pretty"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("band.json")));
        assert!(args.pretty);

        let args = Args::try_parse_from(["goodsongs-embed"]).unwrap();
        assert_eq!(args.file, None);
        assert!(!args.pretty);
    }

    #[test]
    fn version_flag_prints_version() {
        let err = Args::try_parse_from(["goodsongs-embed", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(err.to_string().contains(env!("CARGO_PKG_VERSION")));

        let err = Args::try_parse_from(["goodsongs-embed", "-V"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
