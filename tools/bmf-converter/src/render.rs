//! Rendering of a [`PackedFont`] as C `FONTGlyph`/`FONTInfo` declarations.

use std::io::{self, Write};

use crate::pack::PackedFont;

/// Writes the bitmap array, the glyph array and the font descriptor of `font`, in that order,
/// naming them after `identifier`.
///
/// # Errors
///
/// Returns any error produced while writing to `writer`.
pub fn render<W: Write>(identifier: &str, font: &PackedFont, mut writer: W) -> io::Result<()> {
    write!(writer, "const uint8_t {identifier}Bitmaps[] = {{ ")?;
    for (index, byte) in font.bitmap().iter().enumerate() {
        if index != 0 {
            writer.write_all(b",")?;
        }
        write!(writer, "{byte}")?;
    }
    writeln!(writer, " }};\n\n")?;

    writeln!(writer, "const FONTGlyph {identifier}Glyphs[] = {{\n")?;
    let records = font.glyph_records();
    for (index, record) in records.iter().enumerate() {
        let separator = if index + 1 < records.len() { "," } else { "" };
        writeln!(writer, "\t\t{record}{separator}")?;
    }
    writeln!(writer, "}};\n\n")?;

    let info = font.font_info(&records);
    writeln!(writer, "const FONTInfo {identifier} = {{")?;
    writeln!(writer, "\t\t(uint8_t  *){identifier}Bitmaps,")?;
    writeln!(writer, "\t\t(FONTGlyph *){identifier}Glyphs,")?;
    writeln!(
        writer,
        "\t\t{},{},{} }};\n\n",
        info.first, info.last, info.y_advance
    )?;

    Ok(())
}
