//! The growable, NUL-terminated byte buffer.
//!
//! ## Design
//!
//! A [`StringBuffer`] owns one contiguous heap block of exactly
//! `capacity` byte slots and tracks how many of them hold meaningful
//! content (`len`). The slot at index `len` always holds the terminator
//! byte `0`, so `len < capacity` strictly whenever a block exists and
//! [`StringBuffer::as_c_str`] is borrow-and-go — no copy, no scan-and-fix.
//!
//! Growth is a fixed doubling policy applied on single-byte appends
//! ([`StringBuffer::push`]): total copy work across any append sequence
//! is bounded by a constant multiple of the final length. The ratio is
//! part of the contract; changing it invalidates the amortized bound.
//!
//! ## Ownership
//!
//! - `Clone` produces an independent block of the source's capacity.
//! - `Clone::clone_from` reuses the destination block when its capacity
//!   already covers the source's, otherwise reallocates.
//! - [`StringBuffer::take`] transfers the block without copying bytes and
//!   leaves the source *detached*: no block, zero length, zero capacity.
//!   A detached buffer is still valid — it may be reassigned, appended to
//!   (the block regrows from nothing), or dropped.
//!
//! Allocation goes through `alloc`; exhaustion reaches the registered
//! allocation-error hook. There is no error channel at this layer.
//!
//! ## Aliasing and iteration
//!
//! Each live block has exactly one owner. Iterators borrow the buffer,
//! so mutating while iterating is rejected at compile time rather than
//! documented as invalidation.

use alloc::boxed::Box;
use alloc::vec;

use core::ffi::CStr;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Deref, DerefMut};
use core::slice;

/// Allocates a zero-filled block of exactly `capacity` slots.
///
/// Zero-filling means every slot is initialized from birth and any slot
/// that becomes the terminator position already holds `0`.
fn zeroed_block(capacity: usize) -> Box<[u8]> {
    vec![0u8; capacity].into_boxed_slice()
}

/// Growable, always NUL-terminated byte buffer.
///
/// The buffer stores `len` meaningful bytes followed by a terminator
/// byte at index `len`; `capacity` counts all allocated slots including
/// the terminator's. Interior `0` bytes may be stored like any other
/// byte — `len` counts them, while the C view ([`Self::as_c_str`]) ends
/// at the first `0` as any C consumer would observe.
///
/// ## Invariants
///
/// After every public operation, whenever a block exists
/// (`capacity > 0`):
///
/// 1. the block holds exactly `capacity` initialized slots,
/// 2. the slot at index `len` is `0`,
/// 3. `len < capacity` strictly.
///
/// A buffer without a block (the detached state left by [`Self::take`])
/// has `len == 0` and `capacity == 0` and supports every non-borrowing
/// operation; only [`Self::as_c_str`] refuses it, since there is no
/// terminator to point at.
pub struct StringBuffer {
    /// The owned block; its length is the buffer's capacity.
    block: Box<[u8]>,
    /// Meaningful bytes, excluding the terminator.
    len: usize,
}

impl StringBuffer {
    /// Creates an empty buffer holding a single terminator byte
    /// (length 0, capacity 1).
    pub fn new() -> Self {
        Self {
            block: zeroed_block(1),
            len: 0,
        }
    }

    /// Creates an empty buffer with exactly `capacity` allocated slots.
    ///
    /// The content is empty and the terminator sits at index 0.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 — one slot is always reserved for the
    /// terminator.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity > 0,
            "StringBuffer capacity must be at least 1 (terminator slot)"
        );
        let mut block = zeroed_block(capacity);
        block[0] = 0;
        Self { block, len: 0 }
    }

    /// The detached state: no block, nothing to release.
    fn detached() -> Self {
        Self {
            block: Box::default(),
            len: 0,
        }
    }

    /// Returns the number of meaningful bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots (0 for a detached buffer).
    pub fn capacity(&self) -> usize {
        self.block.len()
    }

    /// Returns true if no meaningful bytes are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the meaningful bytes, terminator excluded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.block[..self.len]
    }

    /// Returns the meaningful bytes mutably, terminator excluded.
    ///
    /// The terminator slot is not reachable through this view, so the
    /// termination invariant cannot be broken from here. Writing a `0`
    /// into the view stores an interior NUL, which shortens what
    /// [`Self::as_c_str`] reports without changing [`Self::len`].
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.block[..self.len]
    }

    /// Returns the borrowed NUL-terminated view of the content.
    ///
    /// The view is valid until the buffer is next mutated or dropped.
    /// If interior `0` bytes were stored, the view ends at the first of
    /// them; otherwise it covers all `len` bytes.
    ///
    /// # Panics
    ///
    /// Panics on a detached buffer: there is no block and therefore no
    /// terminator to borrow.
    pub fn as_c_str(&self) -> &CStr {
        assert!(
            self.capacity() > 0,
            "as_c_str on a detached StringBuffer (no backing block)"
        );
        match CStr::from_bytes_until_nul(&self.block[..=self.len]) {
            Ok(view) => view,
            // block[len] == 0 after every mutation, so a terminator is
            // always inside the scanned range
            Err(_) => unreachable!("terminator missing at index {}", self.len),
        }
    }

    /// Appends one byte, growing the block if needed.
    ///
    /// Growth doubles the capacity (a missing block counts as capacity
    /// 1 first) until the new byte and the terminator both fit, copies
    /// the `len` meaningful bytes into the new block, and releases the
    /// old one. The terminator is rewritten at the new length.
    ///
    /// Also available as `buffer += byte`.
    pub fn push(&mut self, byte: u8) {
        if self.capacity() <= self.len + 1 {
            self.grow_for_push();
        }
        self.block[self.len] = byte;
        self.len += 1;
        self.block[self.len] = 0;
    }

    /// Removes and returns the last byte, rewriting the terminator one
    /// slot earlier. Returns `None` on an empty buffer.
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let byte = self.block[self.len];
        self.block[self.len] = 0;
        Some(byte)
    }

    /// Resets the length to 0 and rewrites the terminator at index 0.
    ///
    /// Capacity and allocation are untouched and stay available for
    /// reuse. On a detached buffer there is nothing to clear.
    pub fn clear(&mut self) {
        self.len = 0;
        if !self.block.is_empty() {
            self.block[0] = 0;
        }
    }

    /// Transfers ownership of the block out of `self` without copying
    /// bytes.
    ///
    /// The returned buffer owns the block and carries the content and
    /// capacity; `self` is left detached (length 0, capacity 0, no
    /// block) and remains valid for reuse or destruction.
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::detached())
    }

    /// Replaces the block with one of doubled capacity that fits one
    /// more byte plus the terminator.
    fn grow_for_push(&mut self) {
        let needed = self.len + 2;
        let mut new_capacity = self.capacity().max(1);
        while new_capacity < needed {
            new_capacity *= 2;
        }
        let mut block = zeroed_block(new_capacity);
        // the terminator is rewritten by push, not copied
        block[..self.len].copy_from_slice(&self.block[..self.len]);
        self.block = block;
    }
}

impl Default for StringBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StringBuffer {
    /// Deep copy into a fresh block of the source's capacity; the
    /// `len + 1` content bytes (terminator included) are copied and the
    /// blocks never alias. Cloning a detached buffer yields a detached
    /// buffer.
    fn clone(&self) -> Self {
        if self.block.is_empty() {
            return Self::detached();
        }
        let mut block = zeroed_block(self.block.len());
        block[..=self.len].copy_from_slice(&self.block[..=self.len]);
        Self {
            block,
            len: self.len,
        }
    }

    /// Copy that reuses the destination block when its capacity already
    /// covers the source's capacity; otherwise the old block is released
    /// and a fresh one of the source's capacity is allocated. Either
    /// way exactly `len + 1` bytes are copied. A detached source empties
    /// the destination in place.
    fn clone_from(&mut self, source: &Self) {
        if source.block.is_empty() {
            self.clear();
            return;
        }
        if self.block.len() < source.block.len() {
            self.block = zeroed_block(source.block.len());
        }
        self.block[..=source.len].copy_from_slice(&source.block[..=source.len]);
        self.len = source.len;
    }
}

impl From<&CStr> for StringBuffer {
    /// Measures the source once, allocates exactly `length + 1` slots,
    /// and copies the `length + 1` bytes (terminator included) in one
    /// pass.
    fn from(source: &CStr) -> Self {
        let bytes = source.to_bytes_with_nul();
        let mut block = zeroed_block(bytes.len());
        block.copy_from_slice(bytes);
        Self {
            block,
            len: bytes.len() - 1,
        }
    }
}

impl From<&[u8]> for StringBuffer {
    /// Allocates exactly `length + 1` slots and copies the bytes; the
    /// terminator slot is already zero-filled.
    fn from(source: &[u8]) -> Self {
        let mut block = zeroed_block(source.len() + 1);
        block[..source.len()].copy_from_slice(source);
        Self {
            block,
            len: source.len(),
        }
    }
}

impl From<&str> for StringBuffer {
    fn from(source: &str) -> Self {
        Self::from(source.as_bytes())
    }
}

impl Deref for StringBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl DerefMut for StringBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl AsRef<[u8]> for StringBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMut<[u8]> for StringBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl PartialEq for StringBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StringBuffer {}

impl PartialEq<[u8]> for StringBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for StringBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<&str> for StringBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&CStr> for StringBuffer {
    fn eq(&self, other: &&CStr) -> bool {
        self.as_bytes() == other.to_bytes()
    }
}

impl PartialEq<StringBuffer> for [u8] {
    fn eq(&self, other: &StringBuffer) -> bool {
        self == other.as_bytes()
    }
}

impl PartialEq<StringBuffer> for &str {
    fn eq(&self, other: &StringBuffer) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Hash for StringBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Debug for StringBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

impl AddAssign<u8> for StringBuffer {
    /// In-place append: `buffer += byte` is [`StringBuffer::push`].
    fn add_assign(&mut self, byte: u8) {
        self.push(byte);
    }
}

impl Add<u8> for &StringBuffer {
    type Output = StringBuffer;

    /// Copy-then-append: builds an independent copy, appends to it, and
    /// never mutates the receiver.
    fn add(self, byte: u8) -> StringBuffer {
        let mut copy = StringBuffer::clone(self);
        copy.push(byte);
        copy
    }
}

impl Extend<u8> for StringBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.push(byte);
        }
    }
}

impl FromIterator<u8> for StringBuffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut buffer = Self::new();
        buffer.extend(iter);
        buffer
    }
}

impl<'a> IntoIterator for &'a StringBuffer {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_bytes().iter()
    }
}

impl<'a> IntoIterator for &'a mut StringBuffer {
    type Item = &'a mut u8;
    type IntoIter = slice::IterMut<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_bytes_mut().iter_mut()
    }
}
