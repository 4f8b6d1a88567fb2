//! Fixed markup emitted around and inside the transcoded body.

use std::io::{self, Write};

use crate::style::Style;

/// Opening wrapper, written after the stylesheet link.
pub const OPEN_WRAPPER: &str = r#"<pre><code class="ansi">"#;

/// Closing wrapper, followed by a newline.
pub const CLOSE_WRAPPER: &str = "</code></pre>";

pub const CLOSE_SPAN: &str = "</span>";

/// Write the stylesheet link line and the opening wrapper.
pub fn write_preamble<W: Write>(out: &mut W, stylesheet: &str) -> io::Result<()> {
    writeln!(out, r#"<link rel="stylesheet" href="{}" />"#, stylesheet)?;
    out.write_all(OPEN_WRAPPER.as_bytes())
}

pub fn write_postamble<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", CLOSE_WRAPPER)
}

/// Write the opening span tag for a non-empty style.
pub fn write_open_span<W: Write>(out: &mut W, style: &Style) -> io::Result<()> {
    write!(out, r#"<span class="{}">"#, style)
}

/// Write one character of body text.
///
/// With `escape` set, the HTML-special characters are written as entities.
pub fn write_text<W: Write>(out: &mut W, c: char, escape: bool) -> io::Result<()> {
    if escape {
        if let Some(entity) = entity(c) {
            return out.write_all(entity.as_bytes());
        }
    }
    let mut buf = [0u8; 4];
    out.write_all(c.encode_utf8(&mut buf).as_bytes())
}

fn entity(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}
