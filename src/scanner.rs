//! Sequence scanner.
//!
//! Reads the input one code point at a time and, once the caller has seen an
//! ESC, extracts the parameter text of the `CSI ... m` sequence that follows.
//! The parameters are not interpreted here; see [`crate::sgr`].

use std::io::{self, BufRead};

use crate::TranscodeError;

/// The escape character that starts every control sequence.
pub const ESC: char = '\x1b';

/// Second character of a Control Sequence Introducer (`ESC [`).
pub const CSI_INTRODUCER: char = '[';

/// Final character of an SGR sequence.
pub const SGR_TERMINATOR: char = 'm';

/// What followed an ESC in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    /// `ESC [` and everything up to the terminator (exclusive).
    ///
    /// `terminated` is false when the input ended first; `params` then holds
    /// whatever was read.
    Sgr { params: String, terminated: bool },
    /// ESC followed by something other than `[`.
    NotCsi(char),
}

/// Code-point reader over a buffered byte source.
///
/// Decodes UTF-8 lazily so multi-byte characters are never split around
/// escape sequences. Invalid bytes decode to U+FFFD. One character can be
/// pushed back with [`CharReader::unread`].
pub struct CharReader<R> {
    inner: R,
    pending: Option<char>,
}

impl<R: BufRead> CharReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: None,
        }
    }

    /// Read the next character, or `None` at end of input.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        if let Some(c) = self.pending.take() {
            return Ok(Some(c));
        }

        let Some(first) = self.peek_byte()? else {
            return Ok(None);
        };
        self.inner.consume(1);

        let width = utf8_width(first);
        match width {
            0 => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            1 => return Ok(Some(char::from(first))),
            _ => {}
        }

        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            match self.peek_byte()? {
                Some(byte) if is_continuation(byte) => {
                    *slot = byte;
                    self.inner.consume(1);
                }
                // Leave the offending byte for the next call.
                _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }

        let decoded = std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(Some(decoded))
    }

    /// Push `c` back so the next [`CharReader::next_char`] returns it.
    ///
    /// Holds a single character; a second call before reading replaces it.
    pub fn unread(&mut self, c: char) {
        self.pending = Some(c);
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Encoded length implied by a UTF-8 leading byte; 0 if it cannot lead.
fn utf8_width(byte: u8) -> usize {
    match byte {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Scan the sequence following an ESC that the caller already consumed.
///
/// # Errors
/// - [`TranscodeError::TruncatedEscape`] if the input ends right after the ESC
/// - [`TranscodeError::Read`] if the underlying reader fails
///
/// Running out of input while collecting parameters is not an error; the
/// partial buffer is returned with `terminated: false`.
pub fn scan_sequence<R: BufRead>(reader: &mut CharReader<R>) -> Result<Scan, TranscodeError> {
    let introducer = reader
        .next_char()
        .map_err(TranscodeError::Read)?
        .ok_or(TranscodeError::TruncatedEscape)?;

    if introducer != CSI_INTRODUCER {
        return Ok(Scan::NotCsi(introducer));
    }

    let mut params = String::new();
    while let Some(c) = reader.next_char().map_err(TranscodeError::Read)? {
        if c == SGR_TERMINATOR {
            return Ok(Scan::Sgr {
                params,
                terminated: true,
            });
        }
        params.push(c);
    }

    Ok(Scan::Sgr {
        params,
        terminated: false,
    })
}
