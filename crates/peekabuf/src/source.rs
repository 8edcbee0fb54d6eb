//! Decode-on-demand codepoint sources.
//!
//! A [`CodepointSource`] decodes one codepoint per call and signals
//! exhaustion by returning `Ok(None)`. Exhaustion is sticky: once a source
//! has reported it, every later call reports it again. Sources do no
//! buffering or lookahead of their own; [`PeekReader`](crate::PeekReader)
//! supplies all of that.

use alloc::{string::String, vec::Vec};

use crate::error::DecodeError;

/// Decode-on-demand supplier of codepoints.
pub trait CodepointSource {
    /// Decodes and returns the next codepoint.
    ///
    /// Returns `Ok(None)` once the input is exhausted, and keeps returning
    /// it on subsequent calls.
    ///
    /// # Errors
    ///
    /// Malformed input and I/O failures are reported as [`DecodeError`].
    /// An error does not count as exhaustion.
    fn next_codepoint(&mut self) -> Result<Option<char>, DecodeError>;
}

/// Source over an owned string. Decoding cannot fail.
#[derive(Debug)]
pub struct StrSource {
    text: String,
    pos: usize,
}

impl StrSource {
    /// Creates a source yielding the codepoints of `text` in order.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: 0,
        }
    }
}

impl CodepointSource for StrSource {
    fn next_codepoint(&mut self) -> Result<Option<char>, DecodeError> {
        let Some(c) = self.text[self.pos..].chars().next() else {
            return Ok(None);
        };
        self.pos += c.len_utf8();
        Ok(Some(c))
    }
}

/// Source that decodes raw bytes as UTF-8, one scalar at a time.
#[derive(Debug)]
pub struct Utf8Source {
    bytes: Vec<u8>,
    pos: usize,
}

impl Utf8Source {
    /// Creates a source decoding `bytes` as UTF-8.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            pos: 0,
        }
    }
}

impl CodepointSource for Utf8Source {
    fn next_codepoint(&mut self) -> Result<Option<char>, DecodeError> {
        if self.pos == self.bytes.len() {
            return Ok(None);
        }
        let (ch, len) = bstr::decode_utf8(&self.bytes[self.pos..]);
        match ch {
            Some(c) => {
                self.pos += len;
                Ok(Some(c))
            }
            // The cursor stays put, so a retry reports the same failure.
            None => Err(DecodeError::InvalidUtf8 { offset: self.pos }),
        }
    }
}

/// Source that decodes UTF-8 from an arbitrary [`std::io::Read`].
///
/// Bytes are pulled from the reader in chunks and decoded incrementally, so
/// a codepoint split across two reads is reassembled transparently. Once the
/// reader reports end of input it is not consulted again, keeping exhaustion
/// sticky even over readers that would yield more data later.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    buf: Vec<u8>,
    // Read cursor within `buf`; everything before it has been consumed.
    pos: usize,
    // Bytes consumed from the stream overall, for error offsets.
    offset: usize,
    done: bool,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ReadSource<R> {
    /// Creates a source decoding UTF-8 text from `reader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pos: 0,
            offset: 0,
            done: false,
        }
    }

    /// Ensures at least `want` unconsumed bytes are buffered, or that the
    /// reader is exhausted.
    fn fill(&mut self, want: usize) -> Result<(), DecodeError> {
        while self.buf.len() - self.pos < want && !self.done {
            if self.pos > 0 {
                self.buf.drain(..self.pos);
                self.pos = 0;
            }
            let mut chunk = [0u8; 4096];
            match self.reader.read(&mut chunk) {
                Ok(0) => self.done = true,
                Ok(n) => self.buf.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> CodepointSource for ReadSource<R> {
    fn next_codepoint(&mut self) -> Result<Option<char>, DecodeError> {
        // Four bytes are enough for any UTF-8 scalar.
        self.fill(4)?;
        if self.pos == self.buf.len() {
            return Ok(None);
        }
        let (ch, len) = bstr::decode_utf8(&self.buf[self.pos..]);
        match ch {
            Some(c) => {
                self.pos += len;
                self.offset += len;
                Ok(Some(c))
            }
            // Either malformed bytes, or a scalar truncated by end of input.
            None => Err(DecodeError::InvalidUtf8 {
                offset: self.offset,
            }),
        }
    }
}
