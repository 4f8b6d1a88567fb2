//! Colour descriptors and the fixed lookup tables behind them.
//!
//! Every colour an SGR sequence can select ends up as one of two forms:
//! - a palette entry (0-255), where entries 0-15 are the sixteen named colours
//! - a literal RGB triple, rendered as a CSS `rgb()` expression
//!
//! The stylesheet only ever sees the rendered token (`Display`), so two
//! descriptors are equal exactly when their tokens are.

use std::fmt;

/// Number of entries in the 8-bit palette.
pub const PALETTE_SIZE: usize = 256;

/// Canonical tokens for the 256-colour palette.
///
/// Indices 0-15 carry the names used by the 3/4-bit codes (30-37, 90-97 and
/// 40-47, 100-107). The remaining entries (the 6x6x6 cube and the grey ramp)
/// are identified by their index.
pub static PALETTE: [&str; PALETTE_SIZE] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "bright-black",
    "bright-red", "bright-green", "bright-yellow", "bright-blue", "bright-magenta",
    "bright-cyan", "bright-white", "16", "17", "18", "19", "20", "21", "22", "23", "24", "25",
    "26", "27", "28", "29", "30", "31", "32", "33", "34", "35", "36", "37", "38", "39", "40",
    "41", "42", "43", "44", "45", "46", "47", "48", "49", "50", "51", "52", "53", "54", "55",
    "56", "57", "58", "59", "60", "61", "62", "63", "64", "65", "66", "67", "68", "69", "70",
    "71", "72", "73", "74", "75", "76", "77", "78", "79", "80", "81", "82", "83", "84", "85",
    "86", "87", "88", "89", "90", "91", "92", "93", "94", "95", "96", "97", "98", "99", "100",
    "101", "102", "103", "104", "105", "106", "107", "108", "109", "110", "111", "112", "113",
    "114", "115", "116", "117", "118", "119", "120", "121", "122", "123", "124", "125", "126",
    "127", "128", "129", "130", "131", "132", "133", "134", "135", "136", "137", "138", "139",
    "140", "141", "142", "143", "144", "145", "146", "147", "148", "149", "150", "151", "152",
    "153", "154", "155", "156", "157", "158", "159", "160", "161", "162", "163", "164", "165",
    "166", "167", "168", "169", "170", "171", "172", "173", "174", "175", "176", "177", "178",
    "179", "180", "181", "182", "183", "184", "185", "186", "187", "188", "189", "190", "191",
    "192", "193", "194", "195", "196", "197", "198", "199", "200", "201", "202", "203", "204",
    "205", "206", "207", "208", "209", "210", "211", "212", "213", "214", "215", "216", "217",
    "218", "219", "220", "221", "222", "223", "224", "225", "226", "227", "228", "229", "230",
    "231", "232", "233", "234", "235", "236", "237", "238", "239", "240", "241", "242", "243",
    "244", "245", "246", "247", "248", "249", "250", "251", "252", "253", "254", "255",
];

/// A foreground or background colour selected by an SGR sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Entry of the 256-colour palette (0-15 are the named colours)
    Palette(u8),
    /// 24-bit colour
    Rgb(u8, u8, u8),
}

impl Color {
    /// The standard colour for a 3/4-bit SGR code, if it is one.
    ///
    /// Maps 30-37 and 90-97 (foreground) as well as 40-47 and 100-107
    /// (background) onto palette entries 0-15. Returns `None` for every
    /// other code.
    pub fn from_standard_code(code: u16) -> Option<Self> {
        let index = match code {
            30..=37 => code - 30,
            40..=47 => code - 40,
            90..=97 => code - 90 + 8,
            100..=107 => code - 100 + 8,
            _ => return None,
        };
        // Bounded to 0..16 by the match above.
        Some(Self::Palette(index as u8))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(index) => f.write_str(PALETTE[usize::from(*index)]),
            Self::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
        }
    }
}
