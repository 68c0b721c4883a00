use std::io::{self, Write};

use itertools::Itertools;

use crate::glyph::Glyph;

/// Comment tokens for the emitted table.
///
/// The byte literals themselves (`0x..` plus separating commas) read the
/// same in most curly-brace languages; only the comment syntax and the line
/// indent vary per target, so that is all the emitter abstracts over.
pub struct Syntax {
    pub comment_open: &'static str,
    pub comment_close: &'static str,
    pub indent: &'static str,
}

impl Syntax {
    /// Block comments as consumed by the C sprite-data tooling.
    pub const C: Syntax = Syntax {
        comment_open: "/*",
        comment_close: "*/",
        indent: "    ",
    };
}

/// Write the packed table: a three-line header comment naming the source
/// sheet and describing the byte layout, a blank line, then one line per
/// glyph in index order.
pub fn write_table<W: Write>(
    out: &mut W,
    source_name: &str,
    glyphs: &[Glyph],
    syntax: &Syntax,
) -> io::Result<()> {
    let (open, close) = (syntax.comment_open, syntax.comment_close);
    writeln!(out, "{} Font sheet data generated from {} {}", open, source_name, close)?;
    writeln!(
        out,
        "{} 256 glyphs, 8 bytes each: one byte per 8-pixel row, top row first {}",
        open, close
    )?;
    writeln!(
        out,
        "{} Bit 0 of a row byte is its leftmost pixel, bit 7 its rightmost {}",
        open, close
    )?;
    writeln!(out)?;

    for glyph in glyphs {
        writeln!(out, "{}", table_line(glyph, syntax))?;
    }
    Ok(())
}

/// One table line: eight hex literals, a trailing comma, the index comment.
fn table_line(glyph: &Glyph, syntax: &Syntax) -> String {
    let bytes = glyph.rows.iter().map(|b| format!("0x{:02x}", b)).join(", ");
    let mut label = format!("{:03} 0x{:02x}", glyph.index, glyph.index);
    if let Some(ch) = glyph.ascii() {
        label.push_str(&format!(" '{}'", ch));
    }
    format!(
        "{}{}, {} {} {}",
        syntax.indent, bytes, syntax.comment_open, label, syntax.comment_close
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn glyph(index: u8, rows: [u8; 8]) -> Glyph {
        Glyph { index, rows }
    }

    #[test]
    fn test_table_line_for_blank_glyph() {
        assert_eq!(
            table_line(&glyph(0, [0; 8]), &Syntax::C),
            "    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, /* 000 0x00 */"
        );
    }

    #[test]
    fn test_table_line_annotates_printable_ascii() {
        assert_eq!(
            table_line(&glyph(65, [0xff; 8]), &Syntax::C),
            "    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, /* 065 0x41 'A' */"
        );
    }

    #[test]
    fn test_table_line_skips_annotation_outside_printable_range() {
        assert_eq!(
            table_line(&glyph(10, [0; 8]), &Syntax::C),
            "    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, /* 010 0x0a */"
        );
        assert_eq!(
            table_line(&glyph(200, [0; 8]), &Syntax::C),
            "    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, /* 200 0xc8 */"
        );
    }

    #[test]
    fn test_write_table_layout() {
        let glyphs = vec![glyph(0, [0x01, 0, 0, 0, 0, 0, 0, 0]), glyph(1, [0; 8])];
        let mut out = Vec::new();
        write_table(&mut out, "font.png", &glyphs, &Syntax::C).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "/* Font sheet data generated from font.png */\n\
             /* 256 glyphs, 8 bytes each: one byte per 8-pixel row, top row first */\n\
             /* Bit 0 of a row byte is its leftmost pixel, bit 7 its rightmost */\n\
             \n\
             \x20   0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, /* 000 0x00 */\n\
             \x20   0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, /* 001 0x01 */\n"
        );
    }
}
