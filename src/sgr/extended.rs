//! Extended colour sub-grammar for `38` / `48`.
//!
//! - `38;5;n` / `48;5;n` selects palette entry `n`
//! - `38;2;r;g;b` / `48;2;r;g;b` selects a 24-bit colour

use super::{code_value, is_decimal};
use crate::style::Color;

/// Selector for the 256-colour form.
const SELECT_PALETTE: u16 = 5;
/// Selector for the RGB form.
const SELECT_RGB: u16 = 2;

/// Outcome of reading the tokens that follow a `38` / `48` introducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extended {
    /// A well-formed colour; `consumed` counts the tokens after the introducer.
    Color { color: Color, consumed: usize },
    /// Right shape, unusable values (e.g. `38;5;300`). The tokens are still
    /// consumed so they are not read as standalone codes.
    Invalid { consumed: usize },
    /// Unknown selector or not enough tokens. Only the introducer is dropped.
    Short,
}

/// Parse the extended colour form from the tokens following the introducer.
///
/// Never indexes past the end of `rest`.
pub fn parse(rest: &[&str]) -> Extended {
    match rest.first().and_then(|selector| code_value(selector)) {
        Some(SELECT_PALETTE) => match rest.get(1) {
            Some(index) => match component(index) {
                Some(index) => Extended::Color {
                    color: Color::Palette(index),
                    consumed: 2,
                },
                None => Extended::Invalid { consumed: 2 },
            },
            None => Extended::Short,
        },
        Some(SELECT_RGB) => match rest.get(1..4) {
            Some([r, g, b]) => match (component(r), component(g), component(b)) {
                (Some(r), Some(g), Some(b)) => Extended::Color {
                    color: Color::Rgb(r, g, b),
                    consumed: 4,
                },
                _ => Extended::Invalid { consumed: 4 },
            },
            _ => Extended::Short,
        },
        _ => Extended::Short,
    }
}

/// A single 0-255 value.
fn component(token: &str) -> Option<u8> {
    if !is_decimal(token) {
        return None;
    }
    token.parse().ok()
}
