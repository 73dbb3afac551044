//! Optional serde support (`serde_support` feature).
//!
//! Content is serialized as the meaningful bytes only; capacity is an
//! allocation detail, not content, and is never encoded. Deserialization
//! accepts byte buffers, borrowed strings, and byte sequences (the form
//! self-describing text formats such as JSON produce), rebuilding a
//! buffer with exact `len + 1` capacity.

use alloc::vec::Vec;

use core::fmt;

use serde::de::{Error, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::buffer::StringBuffer;

impl Serialize for StringBuffer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(self.as_bytes())
    }
}

struct BufferVisitor;

impl<'de> Visitor<'de> for BufferVisitor {
    type Value = StringBuffer;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a byte buffer, a string, or a sequence of bytes")
    }

    fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(StringBuffer::from(bytes))
    }

    fn visit_byte_buf<E>(self, bytes: Vec<u8>) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(StringBuffer::from(bytes.as_slice()))
    }

    fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(StringBuffer::from(text))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(StringBuffer::from(bytes.as_slice()))
    }
}

impl<'de> Deserialize<'de> for StringBuffer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_bytes(BufferVisitor)
    }
}
