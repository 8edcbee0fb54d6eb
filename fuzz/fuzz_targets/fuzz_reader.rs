#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use peekabuf::{Codepoint, PeekReader};

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    Read,
    Unread,
    Peek(u8),
}

// Drives a reader over arbitrary bytes with an arbitrary op script while a
// shadow model tracks what the front queue and undo register must contain.
// Reads with an empty shadow queue are unconstrained (they depend on the
// source), but everything buffered by peek or unread must come back verbatim.
fuzz_target!(|input: (Vec<u8>, Vec<Op>)| {
    let (bytes, ops) = input;
    let mut r = PeekReader::from_bytes(bytes);
    let mut pending: Vec<Codepoint> = Vec::new();
    let mut last: Option<char> = None;

    for op in ops {
        match op {
            Op::Read => {
                let got = r.read();
                if !pending.is_empty() {
                    assert_eq!(got, pending.remove(0));
                }
                last = got.as_char();
            }
            Op::Unread => {
                if let Some(c) = last.take() {
                    pending.insert(0, Codepoint::Scalar(c));
                }
            }
            Op::Peek(n) => {
                let n = usize::from(n % 8);
                match r.peek(n) {
                    Ok(peeked) => {
                        assert!(peeked.len() <= n);
                        pending.extend(peeked);
                    }
                    Err(err) => pending.extend(err.gathered),
                }
            }
        }
    }
});
