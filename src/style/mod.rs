//! Style data model.
//!
//! Contains the value types describing the active rendition at a point in
//! the stream:
//! - Color: palette or RGB colour descriptor
//! - Style: the eight boolean attributes plus foreground/background colour
//!
//! A `Style` renders to the space-separated class list that the stylesheet
//! matches on, e.g. `ansi ansi-bold ansi-fg-red`.

mod color;

use std::fmt;

pub use color::{Color, PALETTE, PALETTE_SIZE};

/// Class every styled span carries.
pub const BASE_CLASS: &str = "ansi";

/// The complete set of active SGR attributes.
///
/// `Style::default()` is the empty style: nothing set, no colours. An
/// empty style needs no wrapping span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub inverse: bool,
    pub hidden: bool,
    pub strikethrough: bool,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Style {
    /// Whether no attribute and no colour is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Boolean attributes paired with their class names, in render order.
    fn flags(&self) -> [(bool, &'static str); 8] {
        [
            (self.bold, "ansi-bold"),
            (self.dim, "ansi-dim"),
            (self.italic, "ansi-italic"),
            (self.underline, "ansi-underline"),
            (self.blink, "ansi-blink"),
            (self.inverse, "ansi-inverse"),
            (self.hidden, "ansi-hidden"),
            (self.strikethrough, "ansi-strikethrough"),
        ]
    }
}

/// Renders the class attribute value.
///
/// The order is fixed: `ansi`, the boolean attributes, then `ansi-fg-*` and
/// `ansi-bg-*`.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BASE_CLASS)?;
        for (_, class) in self.flags().iter().filter(|(set, _)| *set) {
            write!(f, " {}", class)?;
        }
        if let Some(fg) = &self.fg {
            write!(f, " ansi-fg-{}", fg)?;
        }
        if let Some(bg) = &self.bg {
            write!(f, " ansi-bg-{}", bg)?;
        }
        Ok(())
    }
}
