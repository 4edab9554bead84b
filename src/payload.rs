// Mon Oct 19 2026 - Alex

use crate::error::MalformedInputError;
use std::fmt;

/// Decoded packet payload. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PacketPayload {
    bytes: Vec<u8>,
}

impl PacketPayload {
    /// Decodes a case-insensitive hex string. No separators or whitespace are
    /// accepted; the empty string yields an empty payload.
    pub fn from_hex(input: &str) -> Result<Self, MalformedInputError> {
        if let Some((index, character)) = input.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(MalformedInputError::InvalidCharacter { character, index });
        }

        if input.len() % 2 != 0 {
            return Err(MalformedInputError::OddLength { length: input.len() });
        }

        let bytes = hex::decode(input)?;
        log::trace!("Decoded {} hex chars into {} bytes", input.len(), bytes.len());
        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    pub fn to_hex_upper(&self) -> String {
        hex::encode_upper(&self.bytes)
    }
}

impl AsRef<[u8]> for PacketPayload {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for PacketPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for PacketPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_upper())
    }
}

/// Lowercase form used wherever hex input serves as a lookup key.
pub fn normalize_hex(input: &str) -> String {
    input.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_case() {
        let payload = PacketPayload::from_hex("DeadBEEF").unwrap();
        assert_eq!(payload.as_bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(payload.to_hex(), "deadbeef");
        assert_eq!(payload.to_hex_upper(), "DEADBEEF");
    }

    #[test]
    fn test_empty_input() {
        let payload = PacketPayload::from_hex("").unwrap();
        assert!(payload.is_empty());
        assert_eq!(payload.to_hex(), "");
    }

    #[test]
    fn test_odd_length_rejected() {
        assert_eq!(
            PacketPayload::from_hex("abc"),
            Err(MalformedInputError::OddLength { length: 3 })
        );
    }

    #[test]
    fn test_invalid_character_rejected() {
        assert_eq!(
            PacketPayload::from_hex("00g1"),
            Err(MalformedInputError::InvalidCharacter { character: 'g', index: 2 })
        );
        assert!(PacketPayload::from_hex("00 11").is_err());
        assert!(PacketPayload::from_hex("0x11").is_err());
    }

    #[test]
    fn test_non_ascii_rejected_by_char_index() {
        assert_eq!(
            PacketPayload::from_hex("a\u{e9}"),
            Err(MalformedInputError::InvalidCharacter { character: '\u{e9}', index: 1 })
        );
    }

    #[test]
    fn test_round_trip_normalizes() {
        for input in ["00", "0aFf", "414243", "00F15365", "ffffffffffff"] {
            let payload = PacketPayload::from_hex(input).unwrap();
            assert_eq!(payload.to_hex(), normalize_hex(input));
        }
    }
}
