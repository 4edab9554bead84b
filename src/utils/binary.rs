// Mon Oct 19 2026 - Alex

pub struct BinaryUtils;

impl BinaryUtils {
    pub fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
        let end = offset.checked_add(4)?;
        if end > data.len() {
            return None;
        }
        Some(u32::from_le_bytes([
            data[offset], data[offset + 1], data[offset + 2], data[offset + 3]
        ]))
    }

    pub fn read_f32_le(data: &[u8], offset: usize) -> Option<f32> {
        Self::read_u32_le(data, offset).map(f32::from_bits)
    }

    /// Little-endian words at offsets 0, 4, 8, ... while a full word remains.
    pub fn aligned_words(data: &[u8]) -> impl Iterator<Item = (usize, u32)> + '_ {
        (0..data.len() / 4)
            .map(|i| i * 4)
            .filter_map(move |offset| Self::read_u32_le(data, offset).map(|word| (offset, word)))
    }

    pub fn is_printable_ascii(byte: u8) -> bool {
        (0x20..=0x7E).contains(&byte)
    }

    pub fn to_ascii_preview(data: &[u8]) -> String {
        data.iter()
            .map(|&b| if Self::is_printable_ascii(b) { b as char } else { '.' })
            .collect()
    }
}

pub fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
    BinaryUtils::read_u32_le(data, offset)
}

pub fn read_f32_le(data: &[u8], offset: usize) -> Option<f32> {
    BinaryUtils::read_f32_le(data, offset)
}

pub fn is_printable_ascii(byte: u8) -> bool {
    BinaryUtils::is_printable_ascii(byte)
}
