/// One decoded unit of text, or the end-of-input marker.
///
/// `EndOfInput` is the reserved sentinel returned through the normal success
/// path of [`PeekReader::read`](crate::PeekReader::read) once the source is
/// exhausted. It is structurally distinct from every scalar value, so no
/// `char` can collide with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codepoint {
    /// A decoded Unicode scalar value.
    Scalar(char),
    /// The reserved end-of-input sentinel.
    EndOfInput,
}

/// The end-of-input sentinel.
pub const EOF: Codepoint = Codepoint::EndOfInput;

impl Codepoint {
    /// Returns `true` for the end-of-input sentinel.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Codepoint::EndOfInput)
    }

    /// Returns the scalar value, or `None` for the sentinel.
    #[must_use]
    pub const fn as_char(self) -> Option<char> {
        match self {
            Codepoint::Scalar(c) => Some(c),
            Codepoint::EndOfInput => None,
        }
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Codepoint::Scalar(c)
    }
}

impl PartialEq<char> for Codepoint {
    fn eq(&self, other: &char) -> bool {
        matches!(self, Codepoint::Scalar(c) if c == other)
    }
}

impl PartialEq<Codepoint> for char {
    fn eq(&self, other: &Codepoint) -> bool {
        other == self
    }
}
