//! CLI argument parsing via clap.

use brandsvg::Mode;
use clap::Parser;
use std::path::PathBuf;

/// Recolor SVG icons onto a brand palette.
#[derive(Debug, Parser)]
#[command(name = "brandsvg", version)]
pub struct Args {
    /// SVG files to recolor. Reads stdin and writes stdout when omitted.
    pub files: Vec<PathBuf>,

    /// primary, secondary, gradient, duo-primary or duo-secondary.
    #[arg(short = 'm', long = "mode", default_value = "primary", value_parser = parse_mode)]
    pub mode: Mode,

    /// Brand primary color.
    #[arg(long = "primary")]
    pub primary: Option<String>,

    /// Brand secondary color.
    #[arg(long = "secondary")]
    pub secondary: Option<String>,

    /// Brand accent color.
    #[arg(long = "accent")]
    pub accent: Option<String>,

    /// JSON brand catalog to pick a preset from.
    #[arg(long = "brands", requires = "brand")]
    pub brands: Option<PathBuf>,

    /// Preset name in the brand catalog.
    #[arg(short = 'b', long = "brand", requires = "brands")]
    pub brand: Option<String>,

    /// Directory for recolored files (default: next to each input).
    #[arg(short = 'o', long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Print a data URI per icon instead of writing files.
    #[arg(long = "data-uri")]
    pub data_uri: bool,

    /// Log substitution details to stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_str(s).ok_or_else(|| {
        let names: Vec<&str> = Mode::ALL.iter().map(|m| m.as_str()).collect();
        format!("unknown mode \"{}\" (expected one of: {})", s, names.join(", "))
    })
}
