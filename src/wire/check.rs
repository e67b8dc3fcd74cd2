//! Helper for computing cyclic redundancy checks.

const CRC_TABLE: [u16; 16] = [
    0x0000, 0xCC01, 0xD801, 0x1400, 0xF001, 0x3C00, 0x2800, 0xE401, 0xA001, 0x6C00, 0x7800,
    0xB401, 0x5000, 0x9C01, 0x8801, 0x4400,
];

/// Accumulate a slice of bytes into a cyclic redundancy check value.
///
/// Both the header and trailer checks are seeded with zero. The fold is
/// strictly order-dependent, so record bytes must be accumulated in emission
/// order.
pub fn checksum(init: u16, bytes: &[u8]) -> u16 {
    bytes.iter().fold(init, |crc, b| {
        let crc = fold_nibble(crc, b & 0xF);
        fold_nibble(crc, b >> 4)
    })
}

/// Fold the low four bits of a byte into a check value.
fn fold_nibble(crc: u16, nibble: u8) -> u16 {
    let index = CRC_TABLE[(crc & 0xF) as usize];
    ((crc >> 4) & 0x0FFF) ^ index ^ CRC_TABLE[(nibble & 0xF) as usize]
}
