// Mon Oct 19 2026 - Alex

use crate::utils::BinaryUtils;
use itertools::Itertools;

/// Offset, hex bytes and ASCII gutter per row:
/// `00000000  41 42 43 00  |ABC.|`
pub fn hex_dump(data: &[u8], width: usize) -> String {
    let width = width.max(1);
    let mut result = String::new();

    for (row, chunk) in data.chunks(width).enumerate() {
        let hex = chunk.iter().map(|b| format!("{:02X}", b)).join(" ");
        result.push_str(&format!(
            "{:08X}  {:<pad$}  |{}|\n",
            row * width,
            hex,
            BinaryUtils::to_ascii_preview(chunk),
            pad = width * 3 - 1
        ));
    }

    result
}
