//! Buffer invariant and ownership contract tests
//!
//! These tests pin the observable contract of [`StringBuffer`]: the
//! termination and capacity invariants after every operation, deep-copy
//! independence, ownership-transfer semantics, the amortized growth
//! policy, and the fail-fast precondition contracts.

use string_core::StringBuffer;

// ===== Operation scripting =====

/// One step of a scripted operation sequence.
#[derive(Debug, Clone, Copy)]
pub enum Op {
    Push(u8),
    Pop,
    Clear,
    Take,
}

/// Applies one operation; a transferred buffer is dropped on the spot.
pub fn apply(buffer: &mut StringBuffer, op: Op) {
    match op {
        Op::Push(byte) => buffer.push(byte),
        Op::Pop => {
            let _ = buffer.pop();
        }
        Op::Clear => buffer.clear(),
        Op::Take => {
            let _ = buffer.take();
        }
    }
}

// ===== Contract Tests =====
