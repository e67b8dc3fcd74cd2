//! Assembly of complete documents.

use alloc::vec::Vec;

use zerocopy::byteorder::little_endian::{U16, U32};
use zerocopy::{Immutable, IntoBytes};

use super::check::checksum;

/// Protocol version written to document headers (major 1, minor 0).
pub const PROTOCOL_VERSION: u8 = 0x10;

/// Profile version written to document headers by the [`crate::encode`]
/// entry points.
pub const PROFILE_VERSION: u16 = 2132;

/// Assemble a header, record stream, and trailer into a complete document.
///
/// `declared` is the caller's accounting of the record stream length; it
/// must equal the length of `records` exactly. The header's length field is
/// load-bearing for readers, so a mismatch panics rather than producing a
/// corrupt document.
pub fn assemble(profile_version: u16, records: &[u8], declared: usize) -> Vec<u8> {
    assert_eq!(records.len(), declared, "declared record stream length diverged");

    #[repr(C)]
    #[derive(IntoBytes, Immutable)]
    struct FileHeader {
        header_size: u8,
        protocol_version: u8,
        profile_version: U16,
        data_size: U32,
        data_type: [u8; 4],
    }

    let header = FileHeader {
        header_size: 14,
        protocol_version: PROTOCOL_VERSION,
        profile_version: U16::new(profile_version),
        data_size: U32::new(records.len() as u32),
        data_type: *b".FIT",
    };

    let mut out = Vec::with_capacity(14 + records.len() + 2);

    out.extend_from_slice(header.as_bytes());
    let check = checksum(0, &out);
    out.extend_from_slice(&check.to_le_bytes());

    out.extend_from_slice(records);
    out.extend_from_slice(&checksum(0, records).to_le_bytes());

    out
}
