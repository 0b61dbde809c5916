//! Terminal rendering of highlighted blocks using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Attribute, Print, SetAttribute, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::{segments, BlockDocument, Color, Style, StyledSpan};

fn term_color(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
    }
}

fn set_style<W: Write>(out: &mut W, style: Style) -> Result<()> {
    queue!(out, SetForegroundColor(term_color(style.fg)))?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    Ok(())
}

/// Write one block with its spans applied
pub fn render_block<W: Write>(out: &mut W, text: &str, spans: &[StyledSpan]) -> Result<()> {
    for (range, tag) in segments(text, spans) {
        match tag {
            Some(tag) => {
                set_style(out, tag.default_style())?;
                queue!(out, Print(&text[range]), SetAttribute(Attribute::Reset))?;
            }
            None => queue!(out, Print(&text[range]))?,
        }
    }
    Ok(())
}

/// Write every block of a document, one per line
pub fn render_document<W: Write>(out: &mut W, doc: &BlockDocument) -> Result<()> {
    for (text, spans) in doc.iter() {
        render_block(out, text, spans)?;
        queue!(out, Print('\n'))?;
    }
    out.flush()?;
    Ok(())
}
