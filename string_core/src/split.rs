//! Space splitting into independently owned buffers.
//!
//! The separator class is the space byte `b' '` alone — not tabs, not
//! newlines. Consumers that need a wider class must pre-normalize;
//! widening here would silently change every caller's tokenization.

use alloc::vec::Vec;

use crate::buffer::StringBuffer;

/// Splits a buffer into its maximal space-free runs, left to right.
///
/// Each token is a newly built [`StringBuffer`], accumulated one byte at
/// a time and handed over without copying once complete. Whitespace runs
/// are discarded: leading, trailing, and consecutive spaces never
/// produce empty tokens. The input is not mutated and the returned
/// buffers hold no ties back to it.
pub fn split(source: &StringBuffer) -> Vec<StringBuffer> {
    let mut parts = Vec::new();
    let mut current = StringBuffer::new();

    for &byte in source {
        if byte == b' ' {
            if !current.is_empty() {
                parts.push(current.take());
            }
        } else {
            current.push(byte);
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_words() {
        let parts = split(&StringBuffer::from("hello world"));
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "hello");
        assert_eq!(parts[1], "world");
    }

    #[test]
    fn test_split_discards_leading_trailing_and_repeated_spaces() {
        let parts = split(&StringBuffer::from("  hello   world "));
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "hello");
        assert_eq!(parts[1], "world");
    }

    #[test]
    fn test_split_empty_input_yields_no_tokens() {
        assert!(split(&StringBuffer::new()).is_empty());
    }

    #[test]
    fn test_split_all_spaces_yields_no_tokens() {
        assert!(split(&StringBuffer::from("    ")).is_empty());
    }

    #[test]
    fn test_split_single_token_without_spaces() {
        let parts = split(&StringBuffer::from("alone"));
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], "alone");
    }

    #[test]
    fn test_split_space_is_the_only_separator() {
        let parts = split(&StringBuffer::from("a\tb\nc d"));
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "a\tb\nc");
        assert_eq!(parts[1], "d");
    }

    #[test]
    fn test_split_leaves_input_untouched() {
        let source = StringBuffer::from("ls -l /tmp");
        let _ = split(&source);
        assert_eq!(source.as_bytes(), b"ls -l /tmp");
    }

    #[test]
    fn test_split_tokens_are_independent_of_each_other() {
        let parts = split(&StringBuffer::from("aa bb"));
        let mut first = parts[0].clone();
        first.push(b'!');
        assert_eq!(parts[0], "aa");
        assert_eq!(parts[1], "bb");
    }

    #[test]
    fn test_split_command_line_shape() {
        let parts = split(&StringBuffer::from("write 3 512"));
        assert_eq!(parts.len(), 3);
        assert_eq!(crate::parse(&parts[1]), 3);
        assert_eq!(crate::parse(&parts[2]), 512);
    }
}
