use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use starwheel::catalogue::Catalogue;
use starwheel::cli::Args;
use starwheel::color::ThemeTable;
use starwheel::config::Config;
use starwheel::i18n::Translations;
use starwheel::renderer::{StarWheel, SvgSurface};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let directive = if args.verbose {
        "starwheel=debug"
    } else {
        "starwheel=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .init();

    if args.init_config {
        let path = Config::init_default_config()?;
        info!("Created config file at {}", path.display());
        return Ok(());
    }

    // Load or create config
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_from_default_path().unwrap_or_default(),
    };
    config.merge_args(&args);

    let themes = ThemeTable::with_custom(&config.themes)?;
    if args.list_themes {
        for name in themes.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let catalogue = match &config.data.directory {
        Some(dir) => Catalogue::load_dir(dir)?,
        None => Catalogue::bundled(),
    };
    let translations = Translations::bundled()?;

    let mut wheel = StarWheel::new(&catalogue, &translations, &themes);
    wheel.geometry = config.geometry.to_geometry();
    wheel.star_style = config.stars;

    let mut surface = SvgSurface::new(wheel.bounding_box(), config.render.font_size_mm);
    let summary = wheel.render(&config.render_settings(), &mut surface)?;

    let output = &config.render.output;
    surface
        .write_to(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "Wrote {} ({} stars, {} stick segments, {} labels, {} grid rings)",
        output.display(),
        summary.stars,
        summary.stick_segments,
        summary.labels,
        summary.grid_rings
    );

    Ok(())
}
