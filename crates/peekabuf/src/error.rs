use alloc::vec::Vec;

use thiserror::Error;

use crate::codepoint::Codepoint;

/// Failure to decode the next codepoint from a source.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input contained a byte sequence that is not valid UTF-8.
    #[error("invalid UTF-8 sequence at byte offset {offset}")]
    InvalidUtf8 {
        /// Byte offset of the offending sequence within the source input.
        offset: usize,
    },
    /// The underlying reader failed.
    #[cfg(feature = "std")]
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for DecodeError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidUtf8 { offset: a }, Self::InvalidUtf8 { offset: b }) => a == b,
            // io::Error carries no equality; compare by kind.
            #[cfg(feature = "std")]
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            #[cfg(feature = "std")]
            _ => false,
        }
    }
}

/// Error returned by [`PeekReader::peek`](crate::PeekReader::peek) when the
/// source fails mid-lookahead.
///
/// The codepoints decoded before the failure remain committed to the
/// reader's internal buffer; subsequent reads return them before the failure
/// point is reached again.
#[derive(Debug, Error, PartialEq)]
#[error("peek failed after {} codepoints: {source}", .gathered.len())]
pub struct PeekError {
    /// Codepoints decoded before the failure, in stream order.
    pub gathered: Vec<Codepoint>,
    /// The decode failure that ended the lookahead.
    #[source]
    pub source: DecodeError,
}
