//! Transcoder loop.
//!
//! Drives the scanner over the input, feeds every SGR sequence to the
//! resolver and turns style transitions into `<span>` boundaries. Ordinary
//! characters go straight to the output.
//!
//! The loop is in one of two states: no span open, or a span open with some
//! non-empty style. A sequence that does not change the style emits nothing.

mod error;
mod html;

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::Config;
use crate::scanner::{scan_sequence, CharReader, Scan, ESC};
use crate::sgr;
use crate::style::Style;

pub use error::TranscodeError;

/// Counters collected during a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// SGR sequences seen, including ones that changed nothing
    pub sequences: usize,
    /// Opening span tags written (always equal to closing tags)
    pub spans: usize,
    /// Whether the input ended inside an SGR sequence
    pub unterminated: bool,
}

/// Single-pass ANSI to HTML transcoder writing into `W`.
pub struct Transcoder<W: Write> {
    out: W,
    config: Config,
    open: Option<Style>,
    summary: Summary,
}

impl<W: Write> Transcoder<W> {
    pub fn new(out: W, config: Config) -> Self {
        Self {
            out,
            config,
            open: None,
            summary: Summary::default(),
        }
    }

    /// Transcode all of `input`.
    ///
    /// Writes the framing (unless `fragment` is configured), the body, and
    /// closes a span that is still open at end of input before the closing
    /// wrapper. The writer is flushed on success.
    ///
    /// # Errors
    /// Any [`TranscodeError`] aborts the pass. Output written up to that
    /// point is left as is.
    pub fn run<R: BufRead>(mut self, input: R) -> Result<Summary, TranscodeError> {
        if !self.config.fragment {
            html::write_preamble(&mut self.out, &self.config.stylesheet)
                .map_err(TranscodeError::Write)?;
        }

        let mut reader = CharReader::new(input);
        self.body(&mut reader)?;
        self.close_span()?;

        if !self.config.fragment {
            html::write_postamble(&mut self.out).map_err(TranscodeError::Write)?;
        }
        self.out.flush().map_err(TranscodeError::Write)?;

        debug!(
            sequences = self.summary.sequences,
            spans = self.summary.spans,
            "transcoding finished"
        );
        Ok(self.summary)
    }

    fn body<R: BufRead>(&mut self, reader: &mut CharReader<R>) -> Result<(), TranscodeError> {
        while let Some(c) = reader.next_char().map_err(TranscodeError::Read)? {
            if c != ESC {
                self.text(c)?;
                continue;
            }

            match scan_sequence(reader)? {
                Scan::Sgr { params, terminated } => {
                    if !terminated {
                        warn!(params = %params, "input ended inside an SGR sequence");
                        self.summary.unterminated = true;
                    }
                    self.summary.sequences += 1;
                    let style = sgr::resolve(&params, self.open);
                    self.transition(style)?;
                }
                Scan::NotCsi(next) => {
                    debug!(next = ?next, "escape not followed by '[', passing through");
                    self.text(ESC)?;
                    reader.unread(next);
                }
            }
        }
        Ok(())
    }

    /// Move from the currently open style to `style`.
    fn transition(&mut self, style: Style) -> Result<(), TranscodeError> {
        let next = (!style.is_empty()).then_some(style);
        if next == self.open {
            return Ok(());
        }

        self.close_span()?;
        if let Some(style) = &next {
            html::write_open_span(&mut self.out, style).map_err(TranscodeError::Write)?;
            self.summary.spans += 1;
        }
        self.open = next;
        Ok(())
    }

    fn close_span(&mut self) -> Result<(), TranscodeError> {
        if self.open.take().is_some() {
            self.out
                .write_all(html::CLOSE_SPAN.as_bytes())
                .map_err(TranscodeError::Write)?;
        }
        Ok(())
    }

    fn text(&mut self, c: char) -> Result<(), TranscodeError> {
        html::write_text(&mut self.out, c, self.config.escape_html).map_err(TranscodeError::Write)
    }
}

/// Transcode an in-memory string.
///
/// # Errors
/// Fails only for [`TranscodeError::TruncatedEscape`]; in-memory I/O does
/// not fail.
pub fn convert(input: &str, config: &Config) -> Result<String, TranscodeError> {
    let mut out = Vec::with_capacity(input.len() + 64);
    Transcoder::new(&mut out, config.clone()).run(input.as_bytes())?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
