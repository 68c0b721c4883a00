pub mod emit;
pub mod error;
pub mod glyph;
pub mod sheet;

use std::io::Write;
use std::path::Path;

use error::ConvertError;

/// Convert the font sheet at `path` into a packed glyph table on `out`.
///
/// Nothing is written until the image has decoded and validated, so a
/// failed run leaves `out` untouched.
pub fn convert<W: Write>(
    path: &Path,
    out: &mut W,
    syntax: &emit::Syntax,
) -> Result<(), ConvertError> {
    let grid = sheet::PixelGrid::load(path)?;
    let glyphs = glyph::pack(&grid);
    emit::write_table(out, &path.display().to_string(), &glyphs, syntax)?;
    Ok(())
}
