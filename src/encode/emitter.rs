//! Per-document session state for emitting a record stream.

use alloc::string::String;
use alloc::vec::Vec;

use crate::profile;
use crate::wire::document::{self, PROFILE_VERSION};
use crate::wire::record::{Layout, data_record, definition_record};
use crate::wire::types::Value;

use super::message::{BuildError, Instance};

/// Accumulates the record stream of one document.
///
/// An emitter owns all per-document state: the local message numbers
/// assigned to message names, the last layout written on each, and the
/// record bytes emitted so far. Construct a fresh emitter per document and
/// consume it with [`Emitter::finish`]; state is never shared or carried
/// across documents.
#[derive(Debug, Default)]
pub struct Emitter {
    /// Message name per local number, in assignment order.
    locals: Vec<&'static str>,
    /// Last layout written per local number.
    layouts: Vec<Option<Layout>>,
    stream: Vec<u8>,
    /// Summed record lengths, checked against the stream on assembly.
    emitted: usize,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one message instance from a sparse value set.
    ///
    /// A definition record precedes the data record only when the layout on
    /// the message's local number is absent or has changed.
    pub fn emit(&mut self, message: &str, values: &[(&str, Option<Value>)]) -> Result<(), BuildError> {
        let message =
            profile::lookup(message).ok_or_else(|| BuildError::UnknownMessage(String::from(message)))?;

        let local = self.local_for(message.name);
        let instance = Instance::build(message, local, values)?;

        let layout = instance.layout();
        if self.layouts[local as usize].as_ref() != Some(&layout) {
            self.append(&definition_record(&layout));
            self.layouts[local as usize] = Some(layout);
        }

        self.append(&data_record(local, instance.fields.iter().map(|f| f.bytes.as_slice())));

        Ok(())
    }

    /// Assign a local message number, first-come-first-served. A name keeps
    /// its number for the life of the emitter.
    fn local_for(&mut self, name: &'static str) -> u8 {
        if let Some(local) = self.locals.iter().position(|n| *n == name) {
            return local as u8;
        }

        // The catalog tops out well below the sixteen concurrent local
        // message numbers the four-bit header field can address.
        debug_assert!(self.locals.len() < 16);

        self.locals.push(name);
        self.layouts.push(None);
        (self.locals.len() - 1) as u8
    }

    fn append(&mut self, record: &[u8]) {
        self.emitted += record.len();
        self.stream.extend_from_slice(record);
    }

    /// Assemble the emitted records into a complete document.
    pub fn finish(self) -> Vec<u8> {
        document::assemble(PROFILE_VERSION, &self.stream, self.emitted)
    }
}
