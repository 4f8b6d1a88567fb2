//! Command-line interface definition.
//!
//! Lives in the library so the xtask crate can render the man page from the
//! same definition.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::Config;

/// Convert ANSI-styled terminal output into HTML.
///
/// Reads text containing SGR escape sequences (colors, bold, underline, ...)
/// and writes an HTML document where every styled run is wrapped in a
/// `<span>` with `ansi-*` classes.
#[derive(Debug, Parser)]
#[command(name = "ansi-html", version)]
pub struct Cli {
    /// Input file; `-` or omitted reads standard input
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write the HTML to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Load settings from a TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stylesheet href used in the link line (default: default.css)
    #[arg(long, value_name = "HREF")]
    pub stylesheet: Option<String>,

    /// Escape HTML-special characters in the text
    #[arg(long)]
    pub escape_html: bool,

    /// Emit only the transcoded body, without link line and wrapper
    #[arg(long)]
    pub fragment: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The input path, or `None` for standard input.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }

    /// Apply command-line overrides on top of `config`.
    ///
    /// Flags can only switch options on; a config file cannot be overridden
    /// back to `false` from the command line.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(stylesheet) = &self.stylesheet {
            config.stylesheet = stylesheet.clone();
        }
        config.escape_html |= self.escape_html;
        config.fragment |= self.fragment;
        config
    }

    /// Default `tracing` filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
