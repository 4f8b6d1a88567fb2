//! ansi-html - convert ANSI SGR styled text into HTML markup.
//!
//! The pipeline is a single pass over the input:
//! - [`scanner`] reads code points and cuts out `ESC [ ... m` parameter text
//! - [`sgr`] folds the parameters into a new [`Style`]
//! - [`transcode`] turns style transitions into `<span class="ansi ...">`
//!
//! ```
//! use ansi_html::{convert, Config};
//!
//! let config = Config { fragment: true, ..Default::default() };
//! let html = convert("\x1b[31mred\x1b[0m", &config).unwrap();
//! assert_eq!(html, r#"<span class="ansi ansi-fg-red">red</span>"#);
//! ```

pub mod cli;
pub mod config;
pub mod scanner;
pub mod sgr;
pub mod style;
pub mod transcode;

pub use config::Config;
pub use style::{Color, Style};
pub use transcode::{convert, Summary, TranscodeError, Transcoder};
