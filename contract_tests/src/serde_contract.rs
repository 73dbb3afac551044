//! Serialization contract tests (`serde_support` feature)
//!
//! These tests pin the stable wire form of a buffer: its meaningful
//! bytes only, with capacity treated as an allocation detail that is
//! never encoded.

use string_core::StringBuffer;

// ===== Contract Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::assert_buffer_invariants;

    #[test]
    fn test_encoded_form_is_content_bytes() {
        let buffer = StringBuffer::from("hi");
        let encoded = serde_json::to_string(&buffer).expect("Failed to serialize buffer");
        assert_eq!(encoded, "[104,105]", "Stable encoding changed");
    }

    #[test]
    fn test_round_trip_preserves_content_and_drops_capacity() {
        let mut original = StringBuffer::with_capacity(128);
        original.extend(*b"round trip");

        let encoded = serde_json::to_string(&original).expect("Failed to serialize buffer");
        let decoded: StringBuffer =
            serde_json::from_str(&encoded).expect("Failed to deserialize buffer");

        assert_eq!(decoded, original);
        assert_eq!(
            decoded.capacity(),
            decoded.len() + 1,
            "Decoded capacity should be exact, not the source's"
        );
        assert_buffer_invariants(&decoded);
    }

    #[test]
    fn test_decodes_from_json_string_form() {
        let decoded: StringBuffer =
            serde_json::from_str("\"text\"").expect("Failed to deserialize from string form");
        assert_eq!(decoded, "text");
        assert_buffer_invariants(&decoded);
    }
}
