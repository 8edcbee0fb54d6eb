//! Buffered codepoint reading with lookahead and unread.
//!
//! The crate provides [`PeekReader`], a buffered reader that decodes one
//! codepoint at a time from a [`CodepointSource`] and adds two capabilities
//! on top: pushing the most recently read codepoint back ([`PeekReader::unread`])
//! and looking ahead at upcoming codepoints without consuming them
//! ([`PeekReader::peek`]). End of input is reported as the reserved [`EOF`]
//! value through the normal success path, never as an error.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod codepoint;
mod error;
mod reader;
mod source;

#[cfg(test)]
mod tests;

pub use codepoint::{Codepoint, EOF};
pub use error::{DecodeError, PeekError};
pub use reader::PeekReader;
#[cfg(feature = "std")]
pub use source::ReadSource;
pub use source::{CodepointSource, StrSource, Utf8Source};
