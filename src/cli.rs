use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "starwheel")]
#[command(author, version, about = "Draw the star wheel of a printable planisphere")]
pub struct Args {
    /// Observer latitude in degrees; negative for the southern hemisphere
    #[arg(short, long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    /// Language code for constellation names
    #[arg(short = 'L', long)]
    pub language: Option<String>,

    /// Color theme: default, dark, or one defined in the config file
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Output SVG file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing the star, stick-figure and label data files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Write a default config file to ~/.config/starwheel/config.toml and exit
    #[arg(long)]
    pub init_config: bool,

    /// List available themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
