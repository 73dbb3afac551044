//! # String Core Contract Tests
//!
//! This crate provides "golden" tests for `string_core`'s public
//! contract to ensure it doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: the buffer's invariants are written as
//!   assertions, not prose
//! - **Testability first**: contract tests fail when observable behavior
//!   changes
//! - **Mechanism not policy**: define what must be stable, not how
//!   callers should use it
//!
//! ## Structure
//!
//! Each contract area has a module with tests that verify:
//! - Termination and capacity invariants after every operation
//! - Copy independence and ownership-transfer semantics
//! - The amortized growth policy
//! - The parse/split utility contracts

pub mod buffer_invariants;
pub mod text_utils;

#[cfg(feature = "serde_support")]
pub mod serde_contract;

/// Common test helpers for contract validation
pub mod test_helpers {
    use string_core::StringBuffer;

    /// Asserts the structural invariants that must hold after every
    /// public operation: strict `len < capacity` whenever a block
    /// exists, and a terminator reachable through the C view.
    pub fn assert_buffer_invariants(buffer: &StringBuffer) {
        if buffer.capacity() == 0 {
            // detached state: no block, nothing stored
            assert_eq!(
                buffer.len(),
                0,
                "Detached buffer reports {} stored bytes",
                buffer.len()
            );
            return;
        }
        assert!(
            buffer.len() < buffer.capacity(),
            "Terminator slot lost: len {} not below capacity {}",
            buffer.len(),
            buffer.capacity()
        );
        // the C view covers the content up to the first interior NUL,
        // which proves a terminator byte sits inside the block
        let first_nul = buffer
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(buffer.len());
        assert_eq!(
            buffer.as_c_str().to_bytes(),
            &buffer.as_bytes()[..first_nul],
            "Terminated view disagrees with content"
        );
    }

    /// Appends `count` bytes one at a time and returns how many times
    /// the capacity changed (the externally observable growth events).
    pub fn count_growth_events(buffer: &mut StringBuffer, count: usize) -> usize {
        let mut growths = 0;
        let mut last_capacity = buffer.capacity();
        for _ in 0..count {
            buffer.push(b'x');
            if buffer.capacity() != last_capacity {
                growths += 1;
                last_capacity = buffer.capacity();
            }
            assert_buffer_invariants(buffer);
        }
        growths
    }
}
