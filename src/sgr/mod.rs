//! SGR (Select Graphic Rendition) resolver.
//!
//! Folds the parameter list of one `CSI ... m` sequence into a new style:
//! - Reset (0, or an empty list)
//! - Bold, dim and their shared reset (1, 2, 22)
//! - Italic, underline, blink, inverse, hidden, strikethrough (3-9 / 23-29)
//! - Standard foreground/background colors (30-37, 40-47)
//! - Bright foreground/background colors (90-97, 100-107)
//! - Default foreground/background (39, 49)
//! - Extended colors - 256-color mode (38;5;n, 48;5;n)
//! - Extended colors - RGB mode (38;2;r;g;b, 48;2;r;g;b)
//!
//! Anything else is ignored.

mod extended;

use tracing::debug;

use crate::style::{Color, Style};
use extended::Extended;

/// Separator between parameters.
pub const PARAM_SEPARATOR: char = ';';

/// One classified SGR parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sgr {
    Reset,
    Bold,
    Dim,
    NormalIntensity,
    Italic(bool),
    Underline(bool),
    Blink(bool),
    Inverse(bool),
    Hidden(bool),
    Strikethrough(bool),
    Foreground(Color),
    Background(Color),
    DefaultForeground,
    DefaultBackground,
    ExtendedForeground,
    ExtendedBackground,
    Unknown,
}

impl Sgr {
    /// Classify a single parameter token.
    pub fn from_token(token: &str) -> Self {
        code_value(token).map_or(Self::Unknown, Self::from_code)
    }

    /// Classify a numeric SGR code.
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Self::Reset,
            1 => Self::Bold,
            2 => Self::Dim,
            22 => Self::NormalIntensity,
            3 => Self::Italic(true),
            23 => Self::Italic(false),
            4 => Self::Underline(true),
            24 => Self::Underline(false),
            5 => Self::Blink(true),
            25 => Self::Blink(false),
            7 => Self::Inverse(true),
            27 => Self::Inverse(false),
            8 => Self::Hidden(true),
            28 => Self::Hidden(false),
            9 => Self::Strikethrough(true),
            29 => Self::Strikethrough(false),
            38 => Self::ExtendedForeground,
            48 => Self::ExtendedBackground,
            39 => Self::DefaultForeground,
            49 => Self::DefaultBackground,
            30..=37 | 90..=97 => {
                Color::from_standard_code(code).map_or(Self::Unknown, Self::Foreground)
            }
            40..=47 | 100..=107 => {
                Color::from_standard_code(code).map_or(Self::Unknown, Self::Background)
            }
            _ => Self::Unknown,
        }
    }
}

/// Numeric value of a parameter token.
///
/// An empty token stands for 0. Returns `None` for anything that is not a
/// plain decimal number.
pub(crate) fn code_value(token: &str) -> Option<u16> {
    if token.is_empty() {
        return Some(0);
    }
    if !is_decimal(token) {
        return None;
    }
    token.parse().ok()
}

/// Whether `token` consists of ASCII digits only (no sign, no spaces).
pub(crate) fn is_decimal(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit())
}

/// Resolve the style produced by applying `params` on top of `previous`.
///
/// `params` is the raw text between `CSI` and the `m` terminator. A missing
/// previous style is treated as the empty style. The returned value does
/// not share anything with `previous`.
pub fn resolve(params: &str, previous: Option<Style>) -> Style {
    let tokens: Vec<&str> = params.split(PARAM_SEPARATOR).collect();
    let mut style = previous.unwrap_or_default();

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        i += 1;

        match Sgr::from_token(token) {
            Sgr::ExtendedForeground => {
                if let Some((color, consumed)) = extended_color(token, &tokens[i..]) {
                    if color.is_some() {
                        style.fg = color;
                    }
                    i += consumed;
                }
            }
            Sgr::ExtendedBackground => {
                if let Some((color, consumed)) = extended_color(token, &tokens[i..]) {
                    if color.is_some() {
                        style.bg = color;
                    }
                    i += consumed;
                }
            }
            Sgr::Unknown => debug!(token, "ignoring unrecognized SGR parameter"),
            code => style = apply(style, code),
        }
    }

    style
}

/// Read the extended colour form after `introducer`.
///
/// Returns the colour (if usable) and how many tokens it consumed, or
/// `None` when only the introducer itself should be dropped.
fn extended_color(introducer: &str, rest: &[&str]) -> Option<(Option<Color>, usize)> {
    match extended::parse(rest) {
        Extended::Color { color, consumed } => Some((Some(color), consumed)),
        Extended::Invalid { consumed } => {
            debug!(
                introducer,
                args = ?&rest[..consumed],
                "ignoring extended color with out-of-range values"
            );
            Some((None, consumed))
        }
        Extended::Short => {
            debug!(introducer, "ignoring incomplete extended color");
            None
        }
    }
}

/// Apply a single simple code to `style`.
///
/// Extended colour introducers need lookahead and are handled by `resolve`.
pub fn apply(mut style: Style, code: Sgr) -> Style {
    match code {
        Sgr::Reset => return Style::default(),
        Sgr::Bold => {
            style.bold = true;
            style.dim = false;
        }
        Sgr::Dim => {
            style.dim = true;
            style.bold = false;
        }
        Sgr::NormalIntensity => {
            style.bold = false;
            style.dim = false;
        }
        Sgr::Italic(on) => style.italic = on,
        Sgr::Underline(on) => style.underline = on,
        Sgr::Blink(on) => style.blink = on,
        Sgr::Inverse(on) => style.inverse = on,
        Sgr::Hidden(on) => style.hidden = on,
        Sgr::Strikethrough(on) => style.strikethrough = on,
        Sgr::Foreground(color) => style.fg = Some(color),
        Sgr::Background(color) => style.bg = Some(color),
        Sgr::DefaultForeground => style.fg = None,
        Sgr::DefaultBackground => style.bg = None,
        Sgr::ExtendedForeground | Sgr::ExtendedBackground | Sgr::Unknown => {}
    }
    style
}
