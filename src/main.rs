use clap::Parser;
use goodsongs_embed::{
    cli::{read_input, render, Args},
    constants::version::get_version,
    EmbedConfig, EmbedResolver,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    tracing::debug!(version = %get_version(), "starting goodsongs-embed");

    let config = EmbedConfig::from_env().inspect_err(
        |e| tracing::error!(err = ?e, "an error occurred when loading configuration"),
    )?;

    let input = read_input(args.file.as_deref(), std::io::stdin().lock())?;
    let output = render(
        &input,
        &EmbedResolver::new(&config.bandcamp_theme),
        args.pretty,
    )?;
    println!("{output}");

    Ok(())
}
