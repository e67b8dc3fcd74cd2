#![allow(dead_code)]

//! A minimal conformant reader used to verify emitted documents.

use std::collections::HashMap;

/// A decoded definition record.
#[derive(Debug, Clone)]
pub struct Definition {
    pub local: u8,
    pub global: u16,
    /// Field number, size, base type.
    pub fields: Vec<(u8, u8, u8)>,
}

/// A decoded data record.
#[derive(Debug)]
pub struct Message {
    pub global: u16,
    pub fields: Vec<(u8, Vec<u8>)>,
}

impl Message {
    pub fn field(&self, number: u8) -> Option<&[u8]> {
        self.fields
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, bytes)| bytes.as_slice())
    }
}

/// A decoded document.
#[derive(Debug)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub messages: Vec<Message>,
}

impl Document {
    pub fn definitions_of(&self, global: u16) -> usize {
        self.definitions.iter().filter(|d| d.global == global).count()
    }

    pub fn messages_of(&self, global: u16) -> Vec<&Message> {
        self.messages.iter().filter(|m| m.global == global).collect()
    }
}

/// Parse a document, validating its framing and checksums.
pub fn read(document: &[u8]) -> Document {
    assert_eq!(document[0], 14, "header length byte");
    assert_eq!(document[1], 0x10, "protocol version byte");
    assert_eq!(&document[8..12], b".FIT", "file type marker");

    let size = u32::from_le_bytes(document[4..8].try_into().unwrap()) as usize;
    assert_eq!(document.len(), 14 + size + 2, "declared record stream length");

    let header_check = u16::from_le_bytes(document[12..14].try_into().unwrap());
    assert_eq!(header_check, pannier::wire::check::checksum(0, &document[..12]));

    let records = &document[14..14 + size];
    let trailer = u16::from_le_bytes(document[14 + size..].try_into().unwrap());
    assert_eq!(trailer, pannier::wire::check::checksum(0, records));

    let mut active: HashMap<u8, Definition> = HashMap::new();
    let mut definitions = Vec::new();
    let mut messages = Vec::new();

    let mut i = 0;
    while i < records.len() {
        let header = records[i];
        i += 1;

        let local = header & 0x0F;

        if header & 0x40 != 0 {
            assert_eq!(records[i], 0, "reserved byte");
            let architecture = records[i + 1];
            let global = [records[i + 2], records[i + 3]];
            let global = if architecture == 0 {
                u16::from_le_bytes(global)
            } else {
                u16::from_be_bytes(global)
            };
            let count = records[i + 4] as usize;
            i += 5;

            let mut fields = Vec::new();
            for _ in 0..count {
                fields.push((records[i], records[i + 1], records[i + 2]));
                i += 3;
            }

            let definition = Definition { local, global, fields };
            definitions.push(definition.clone());
            active.insert(local, definition);
        } else {
            let definition = active
                .get(&local)
                .unwrap_or_else(|| panic!("data record without definition on local {local}"));

            let mut fields = Vec::new();
            for (number, size, _) in &definition.fields {
                let size = *size as usize;
                fields.push((*number, records[i..i + size].to_vec()));
                i += size;
            }

            messages.push(Message { global: definition.global, fields });
        }
    }

    assert_eq!(i, records.len(), "record stream ends on a record boundary");

    Document { definitions, messages }
}
