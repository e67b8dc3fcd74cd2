//! Construction of single message instances.

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

use crate::profile::Message;
use crate::wire::record::{FieldLayout, Layout};
use crate::wire::types::{self, Value, ValueError};

/// An error constructing a message instance.
///
/// These are programmer-facing: each indicates a disagreement between the
/// caller and the catalog, and aborts the encode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Message name not in the catalog.
    #[error("Message `{0}` is not in the catalog.")]
    UnknownMessage(String),
    /// Field name not in the message's catalog entry.
    #[error("Field `{field}` is not in the catalog entry for `{message}`.")]
    UnknownField { message: &'static str, field: String },
    /// Field declared with a semantic type the type system does not know.
    #[error("Field `{field}` of `{message}` is declared with unknown semantic type `{kind}`.")]
    UnknownType {
        message: &'static str,
        field: &'static str,
        kind: &'static str,
    },
    /// Value could not be converted into the field's wire payload.
    #[error("Value for field `{field}` of `{message}`: {source}")]
    InvalidValue {
        message: &'static str,
        field: &'static str,
        source: ValueError,
    },
}

/// A field resolved against a catalog entry, holding its wire payload.
#[derive(Debug)]
pub struct Resolved {
    pub number: u8,
    pub base_type: u8,
    pub bytes: Vec<u8>,
}

/// A single message instance, resolved and ready for serialization.
///
/// Instances are transient: serialize one into its definition and data
/// records, then discard it.
#[derive(Debug)]
pub struct Instance {
    pub local: u8,
    pub global: u16,
    pub fields: Vec<Resolved>,
}

impl Instance {
    /// Resolve a sparse value set against a catalog entry.
    ///
    /// Catalog fields absent from `values`, or present without a value, are
    /// dropped, never encoded as placeholders. A value name missing from the
    /// catalog entry is an error rather than a silent omission. Resolved
    /// fields keep catalog order.
    pub fn build(
        message: &'static Message,
        local: u8,
        values: &[(&str, Option<Value>)],
    ) -> Result<Self, BuildError> {
        for (name, _) in values {
            if !message.fields.iter().any(|f| f.name == *name) {
                return Err(BuildError::UnknownField {
                    message: message.name,
                    field: String::from(*name),
                });
            }
        }

        let mut fields = Vec::with_capacity(values.len());

        for field in message.fields {
            let value = values
                .iter()
                .find(|(name, _)| *name == field.name)
                .and_then(|(_, value)| value.as_ref());

            let Some(value) = value else { continue };

            let kind = types::kind(field.kind).ok_or(BuildError::UnknownType {
                message: message.name,
                field: field.name,
                kind: field.kind,
            })?;

            let bytes = kind.payload(value).map_err(|source| BuildError::InvalidValue {
                message: message.name,
                field: field.name,
                source,
            })?;

            fields.push(Resolved {
                number: field.number,
                base_type: kind.base_type,
                bytes,
            });
        }

        Ok(Self {
            local,
            global: message.number,
            fields,
        })
    }

    /// Derive the wire layout shared by this instance's definition and data
    /// records.
    pub fn layout(&self) -> Layout {
        Layout {
            local: self.local,
            global: self.global,
            fields: self
                .fields
                .iter()
                .map(|f| FieldLayout {
                    number: f.number,
                    size: f.bytes.len() as u8,
                    base_type: f.base_type,
                })
                .collect(),
        }
    }
}
