//! The lookahead reader over a codepoint source.
//!
//! Overview
//! - `front` is a deque of codepoints that have been decoded but not yet
//!   consumed. [`PeekReader::peek`] appends to its back, [`PeekReader::unread`]
//!   pushes to its front, and [`PeekReader::read`] pops from its front.
//!   Buffered codepoints are always served before the source is asked for
//!   anything new.
//! - `last_read` is the single-slot undo register: the scalar handed back by
//!   the most recent read, or `None` when there is nothing to undo. Reading
//!   the sentinel clears it, so end of input can never be pushed back into
//!   the buffer.
//!
//! Invariants
//! - Every read refreshes the register, including reads of the sentinel.
//! - A successful unread clears the register; a second consecutive unread is
//!   a no-op.
//! - Peek never touches the register and never re-reports buffered content:
//!   each call decodes strictly new codepoints, so repeated peeks accumulate
//!   lookahead.

use alloc::{collections::VecDeque, string::String, vec::Vec};

use crate::{
    codepoint::Codepoint,
    error::PeekError,
    source::{CodepointSource, StrSource, Utf8Source},
};

/// Buffered reader over a [`CodepointSource`] with lookahead and unread.
///
/// ```
/// use peekabuf::{PeekReader, EOF};
///
/// let mut r = PeekReader::from_string("ab");
/// assert_eq!(r.read(), 'a');
/// r.unread();
/// assert_eq!(r.read(), 'a');
/// assert_eq!(r.read(), 'b');
/// assert_eq!(r.read(), EOF);
/// ```
#[derive(Debug)]
pub struct PeekReader<S> {
    source: S,
    front: VecDeque<Codepoint>,
    last_read: Option<char>,
}

impl<S: CodepointSource> PeekReader<S> {
    /// Wraps `source`. No decoding is performed until the first read or
    /// peek.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            front: VecDeque::new(),
            last_read: None,
        }
    }

    /// Reads and consumes the next codepoint.
    ///
    /// Codepoints buffered by earlier calls to [`peek`](Self::peek) or
    /// [`unread`](Self::unread) are served first; otherwise one codepoint is
    /// decoded from the source. Exhaustion is reported as
    /// [`EOF`](crate::EOF), not as an error, and a decode failure at this
    /// call collapses into the sentinel as well — use [`peek`](Self::peek)
    /// to observe the failure itself.
    pub fn read(&mut self) -> Codepoint {
        let result = match self.front.pop_front() {
            Some(cp) => cp,
            None => match self.source.next_codepoint() {
                Ok(Some(c)) => Codepoint::Scalar(c),
                // Read has no error channel.
                Ok(None) | Err(_) => Codepoint::EndOfInput,
            },
        };
        self.last_read = result.as_char();
        result
    }

    /// Pushes the most recently read codepoint back, undoing one
    /// [`read`](Self::read).
    ///
    /// A no-op when there is nothing to undo: before the first read, after a
    /// read that returned [`EOF`](crate::EOF), or when the previous read has
    /// already been unread. Only a single level of undo is kept.
    pub fn unread(&mut self) {
        if let Some(c) = self.last_read.take() {
            self.front.push_front(Codepoint::Scalar(c));
        }
    }

    /// Decodes up to `n` further codepoints without consuming them.
    ///
    /// Each decoded codepoint is appended to the back of the internal
    /// buffer, so subsequent reads return the peeked codepoints in the same
    /// order. If the source is exhausted before `n` codepoints are gathered,
    /// the result ends with a single [`EOF`](crate::EOF) and is shorter than
    /// `n`; exhaustion is not an error. `peek(0)` returns an empty sequence
    /// without consulting the source.
    ///
    /// Peeking always decodes `n` *new* codepoints: repeated peeks without
    /// intervening reads accumulate lookahead rather than re-reporting the
    /// same window. The undo register is untouched.
    ///
    /// # Errors
    ///
    /// If the source fails mid-lookahead, the returned [`PeekError`] carries
    /// the codepoints gathered so far; those stay committed to the buffer.
    pub fn peek(&mut self, n: usize) -> Result<Vec<Codepoint>, PeekError> {
        let mut gathered = Vec::with_capacity(n);
        for _ in 0..n {
            match self.source.next_codepoint() {
                Ok(Some(c)) => {
                    let cp = Codepoint::Scalar(c);
                    self.front.push_back(cp);
                    gathered.push(cp);
                }
                Ok(None) => {
                    self.front.push_back(Codepoint::EndOfInput);
                    gathered.push(Codepoint::EndOfInput);
                    break;
                }
                Err(source) => return Err(PeekError { gathered, source }),
            }
        }
        Ok(gathered)
    }
}

impl PeekReader<StrSource> {
    /// Creates a reader over the codepoints of `text`.
    #[must_use]
    pub fn from_string(text: impl Into<String>) -> Self {
        Self::new(StrSource::new(text))
    }
}

impl PeekReader<Utf8Source> {
    /// Creates a reader decoding `bytes` as UTF-8.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(Utf8Source::new(bytes))
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> PeekReader<crate::source::ReadSource<R>> {
    /// Creates a reader decoding UTF-8 text from `reader`.
    #[must_use]
    pub fn from_reader(reader: R) -> Self {
        Self::new(crate::source::ReadSource::new(reader))
    }
}

/// Iteration consumes scalars via [`PeekReader::read`], ending at the
/// sentinel, so the undo register stays coherent with iterated items.
impl<S: CodepointSource> Iterator for PeekReader<S> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.read().as_char()
    }
}
