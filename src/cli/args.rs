//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use crate::ascii::clamp_aspect;

/// Parse a column count. Values below 1 are raised to 1.
fn parse_width(s: &str) -> Result<u32, String> {
    let width: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid column count", s))?;
    Ok(width.clamp(1, u32::MAX as i64) as u32)
}

/// Parse a character aspect ratio, raised to the minimum if too small.
fn parse_aspect(s: &str) -> Result<f32, String> {
    let aspect: f32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !aspect.is_finite() {
        return Err(format!("Aspect ratio must be finite, got {}", s));
    }
    Ok(clamp_aspect(aspect))
}

/// Convert an image to ASCII art
#[derive(Parser, Debug)]
#[command(name = "ascii-render")]
#[command(version, about = "Render an image as ASCII art", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "EXAMPLES:
    ascii-render photo.jpg -w 100
    ascii-render photo.jpg -w 80 -a 0.45 -c \"MWNXK0Okxol:,. \" -o out.txt")]
pub struct Args {
    /// Input image path
    pub input: PathBuf,

    /// Target width in characters (default: terminal width, or 120 when writing to a file)
    #[arg(short, long, value_parser = parse_width, allow_negative_numbers = true)]
    pub width: Option<u32>,

    /// Character width/height aspect ratio (default 0.5, minimum 0.05)
    #[arg(short, long, value_parser = parse_aspect, allow_negative_numbers = true)]
    pub aspect: Option<f32>,

    /// Characters from dark to light (default "@%#*+=-:. ")
    #[arg(short, long, allow_hyphen_values = true)]
    pub charset: Option<String>,

    /// Invert mapping (light pixels use the start of the charset)
    #[arg(short, long)]
    pub invert: bool,

    /// Write result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (default: ascii-render/config.toml in the platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
