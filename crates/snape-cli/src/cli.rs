use clap::{Parser, Subcommand};
use snape_core::config::validate_size;
use snape_core::Theme;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "snape",
    version = env!("CARGO_PKG_VERSION"),
    about = "Snape - A Severus Snippet Manager",
    long_about = "Handle your snippets with Severus precision.\n\n\
        Every file in the snippets directory (default: ~/.config/snape/) becomes a \
        snippet; subfolders become groups. Pick one and it is copied to the clipboard."
)]
pub struct Snape {
    #[clap(long, help = "Enable verbose output messages")]
    pub verbose: bool,

    #[clap(long, value_name = "PATH", help = "Use a different snippets directory")]
    pub dir: Option<PathBuf>,

    #[clap(
        long = "width-size",
        value_name = "WIDTH",
        value_parser = parse_width,
        help = "Set window width (200-600, default: 420)"
    )]
    pub width_size: Option<u32>,

    #[clap(
        long = "height-size",
        value_name = "HEIGHT",
        value_parser = parse_height,
        help = "Set window height (200-600, default: 550)"
    )]
    pub height_size: Option<u32>,

    #[clap(subcommand)]
    pub commands: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the snippets directory
    Path,
    /// Open the snippets directory in the file manager
    Open,
    /// Show or change the saved settings
    Settings {
        #[clap(long, value_parser = parse_theme, help = "Theme: system, light or dark")]
        theme: Option<Theme>,

        #[clap(long, value_parser = parse_width, help = "Saved window width (200-600)")]
        width: Option<u32>,

        #[clap(long, value_parser = parse_height, help = "Saved window height (200-600)")]
        height: Option<u32>,
    },
}

fn parse_size(name: &str, value: &str) -> Result<u32, String> {
    let parsed = value
        .parse::<u32>()
        .map_err(|_| format!("{} must be a number (got {})", name, value))?;
    validate_size(name, parsed).map_err(|e| e.to_string())
}

fn parse_width(value: &str) -> Result<u32, String> {
    parse_size("width-size", value)
}

fn parse_height(value: &str) -> Result<u32, String> {
    parse_size("height-size", value)
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    value.parse().map_err(|e: snape_core::SnapeError| e.to_string())
}
