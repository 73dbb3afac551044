//! Decimal `u64` parsing over the buffer's views.
//!
//! Digits accumulate left to right; the first non-digit byte stops the
//! scan without failing, so `"12x3"` reads as `12` and a leading
//! non-digit reads as `0`. There is no sign handling and no overflow
//! detection: values wrap per unsigned arithmetic, which is why the
//! accumulation is spelled with wrapping operations — the wrap policy
//! holds regardless of the build profile's overflow checks.

use core::ffi::CStr;

use crate::buffer::StringBuffer;

/// Reads a `u64` from a buffer.
///
/// Delegates to [`parse_c_str`] through the buffer's terminated view,
/// so the scan covers at most the content before the first NUL byte.
pub fn parse(source: &StringBuffer) -> u64 {
    parse_c_str(source.as_c_str())
}

/// Reads a `u64` from a NUL-terminated source, scanning up to the
/// terminator or the first non-digit byte, whichever comes first.
pub fn parse_c_str(source: &CStr) -> u64 {
    parse_bytes(source.to_bytes())
}

/// Reads a `u64` from a half-open byte range.
pub fn parse_bytes(bytes: &[u8]) -> u64 {
    let mut value: u64 = 0;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value
            .wrapping_mul(10)
            .wrapping_add(u64::from(byte - b'0'));
    }
    value
}
