use alloc::{collections::VecDeque, rc::Rc, vec::Vec};
use core::cell::Cell;

use crate::{Codepoint, CodepointSource, DecodeError};

pub(crate) fn scalars(text: &str) -> Vec<Codepoint> {
    text.chars().map(Codepoint::Scalar).collect()
}

pub(crate) fn scalars_then_eof(text: &str) -> Vec<Codepoint> {
    let mut cps = scalars(text);
    cps.push(Codepoint::EndOfInput);
    cps
}

/// Scripted source: yields the given steps in order, then sticky
/// exhaustion. Decode calls are counted through a shared cell.
pub(crate) struct ScriptSource {
    steps: VecDeque<Result<char, DecodeError>>,
    calls: Rc<Cell<usize>>,
}

impl ScriptSource {
    pub(crate) fn steps(steps: impl IntoIterator<Item = Result<char, DecodeError>>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn counted(text: &str) -> (Self, Rc<Cell<usize>>) {
        let source = Self::steps(text.chars().map(Ok));
        let calls = Rc::clone(&source.calls);
        (source, calls)
    }
}

impl CodepointSource for ScriptSource {
    fn next_codepoint(&mut self) -> Result<Option<char>, DecodeError> {
        self.calls.set(self.calls.get() + 1);
        match self.steps.pop_front() {
            Some(Ok(c)) => Ok(Some(c)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}
