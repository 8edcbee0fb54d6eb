//! Read-path benchmarks: plain draining and peek-then-read batches.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use peekabuf::PeekReader;

fn bench_drain(c: &mut Criterion) {
    let text: String = "peekabuf ".repeat(4096);
    c.bench_function("drain_string", |b| {
        b.iter(|| {
            let mut r = PeekReader::from_string(text.clone());
            let mut n = 0usize;
            while !r.read().is_eof() {
                n += 1;
            }
            black_box(n)
        });
    });
}

fn bench_peek_then_read(c: &mut Criterion) {
    let bytes = "héllo wörld 👍 ".repeat(2048).into_bytes();
    c.bench_function("peek_then_read", |b| {
        b.iter(|| {
            let mut r = PeekReader::from_bytes(bytes.clone());
            let mut n = 0usize;
            'drain: loop {
                let peeked = r.peek(8).expect("input is valid UTF-8");
                for _ in 0..peeked.len() {
                    if r.read().is_eof() {
                        break 'drain;
                    }
                    n += 1;
                }
            }
            black_box(n)
        });
    });
}

criterion_group!(benches, bench_drain, bench_peek_then_read);
criterion_main!(benches);
