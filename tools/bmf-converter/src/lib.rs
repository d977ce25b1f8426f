//! Tool for converting BMF bitmap font descriptions into C source declaring the packed bitmap,
//! `FONTGlyph` array and `FONTInfo` descriptor of the font.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

pub mod error;
pub mod pack;
pub mod parse;
pub mod render;
pub mod token;

/// Description of a single conversion.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ConvertConfig {
    /// The height of every glyph in pixels.
    pub height: u8,
    /// The width of every glyph in pixels.
    pub width: u8,
    /// The path of the BMF description to convert.
    pub input: PathBuf,
}

impl ConvertConfig {
    /// Returns the C identifier the generated declarations are named after.
    pub fn identifier(&self) -> String {
        identifier(&self.input, self.height)
    }
}

/// Derives the C identifier for the font at `input` rendered `height` pixels tall.
///
/// The identifier is the lowercased file name, stripped of any `.bmf`, wrapped as
/// `_<name>_<height>pt7b`.
pub fn identifier(input: &Path, height: u8) -> String {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
        .replace(".bmf", "");

    let name = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>();
    format!("_{name}_{height}pt7b")
}

/// Reads the BMF description named by `config` and writes its C declarations to `writer`.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not a valid BMF description, does not fit
/// in the generated tables, or if writing fails.
pub fn convert_file<W: Write>(config: &ConvertConfig, writer: W) -> Result<()> {
    let source = fs::read_to_string(&config.input)
        .with_context(|| format!("error reading {}", config.input.display()))?;
    log::debug!(
        "converting {} as {}x{} glyphs",
        config.input.display(),
        config.width,
        config.height
    );

    convert(
        &source,
        &config.identifier(),
        config.width,
        config.height,
        writer,
    )
    .with_context(|| format!("error converting {}", config.input.display()))
}

/// Parses `source`, packs it as `width` by `height` glyphs and writes the C declarations named
/// after `identifier` to `writer`.
///
/// Nothing is written unless parsing and packing succeed.
///
/// # Errors
///
/// Returns an error if `source` is not a valid BMF description, does not fit in the generated
/// tables, or if writing fails.
pub fn convert<W: Write>(
    source: &str,
    identifier: &str,
    width: u8,
    height: u8,
    writer: W,
) -> Result<()> {
    let font = parse::parse(source)?;
    let packed = pack::pack(&font, width, height)?;
    render::render(identifier, &packed, writer)?;

    Ok(())
}
