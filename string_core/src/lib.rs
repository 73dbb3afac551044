#![no_std]

//! # String Core
//!
//! Freestanding text primitives: a growable, always NUL-terminated byte
//! buffer plus the two small utilities kernel-side code layers on top of
//! it (unsigned integer parsing and space splitting).
//!
//! ## Philosophy
//!
//! - **No_std first**: uses `alloc`, never `std`; suitable for kernel and
//!   bare-metal hosts
//! - **Deterministic storage**: capacity is tracked explicitly and grows
//!   by a fixed doubling policy, not by whatever the standard containers
//!   happen to do this release
//! - **C-compatible by construction**: the terminator is an invariant,
//!   not an afterthought, so handing text across an FFI boundary never
//!   needs a copy
//! - **Explicit ownership**: one buffer owns one block; copies are deep,
//!   transfers are free and leave the source detached
//!
//! ## Key Types
//!
//! - [`StringBuffer`]: the owned, growable, NUL-terminated byte buffer
//! - [`parse`]/[`parse_c_str`]/[`parse_bytes`]: decimal `u64` readers
//! - [`split`]: space-separated decomposition into owned buffers
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A Unicode string (bytes in, bytes out; no validation, no graphemes)
//! - A formatting sink (no `Display`, no `core::fmt::Write`)
//! - A concurrent type (synchronize externally or transfer by value)
//! - A pattern-matching or search layer

extern crate alloc;

pub mod buffer;
pub mod parse;
pub mod split;

#[cfg(feature = "serde_support")]
mod serde_impl;

pub use buffer::StringBuffer;
pub use parse::{parse, parse_bytes, parse_c_str};
pub use split::split;
