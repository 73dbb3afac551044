//! Parse and split utility contract tests
//!
//! These tests define the stable contract for the two free functions
//! layered on the buffer: decimal parsing (stop-at-non-digit, wrapping)
//! and space splitting (space byte only, no empty tokens).

use string_core::{parse, parse_bytes, parse_c_str, split, StringBuffer};

// ===== Contract Tests =====
