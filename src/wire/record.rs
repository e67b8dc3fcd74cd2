//! Serialization of definition and data records.

use alloc::vec::Vec;

use tartan_bitfield::bitfield;

// The leading byte of a normal (uncompressed) record.
bitfield! {
    struct RecordHeader(u8) {
        [0..4] local_message: u8,
        [6] is_definition,
    }
}

/// The wire layout of a single field, as carried in a definition record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub number: u8,
    pub size: u8,
    pub base_type: u8,
}

/// The wire layout of a message on a local message number.
///
/// Layouts exist to be compared: a definition record needs emitting only
/// when the layout on its local message number is absent or has changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub local: u8,
    pub global: u16,
    pub fields: Vec<FieldLayout>,
}

/// Serialize a definition record describing a layout.
///
/// The architecture byte is set to big-endian, and the global message
/// number written accordingly. Field payloads in the paired data records
/// are nonetheless little-endian, matching the convention of deployed
/// encoders.
pub fn definition_record(layout: &Layout) -> Vec<u8> {
    // The field count is carried in a single byte.
    debug_assert!(layout.fields.len() <= u8::MAX as usize);

    let mut header = RecordHeader::default();
    header.set_local_message(layout.local);
    header.set_is_definition(true);

    let mut out = Vec::with_capacity(6 + 3 * layout.fields.len());

    out.push(header.0);
    out.push(0); // Reserved.
    out.push(1); // Architecture.
    out.extend_from_slice(&layout.global.to_be_bytes());
    out.push(layout.fields.len() as u8);

    for field in &layout.fields {
        out.extend_from_slice(&[field.number, field.size, field.base_type]);
    }

    out
}

/// Serialize a data record from field payloads in definition order.
pub fn data_record<'a>(local: u8, payloads: impl IntoIterator<Item = &'a [u8]>) -> Vec<u8> {
    let mut header = RecordHeader::default();
    header.set_local_message(local);

    let mut out = Vec::new();

    out.push(header.0);
    for payload in payloads {
        out.extend_from_slice(payload);
    }

    out
}
