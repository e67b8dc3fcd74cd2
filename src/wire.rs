//! Byte-level building blocks for writing documents.
//!
//! This module is intended for advanced applications that need fine control
//! over the produced byte stream. See [`crate::encode`] for implementations
//! covering common encoding patterns.
//!
//! A FIT document is a 14-byte header, a stream of interleaved definition
//! and data records, and a two-byte trailing checksum. The pieces here map
//! one-to-one onto that layout:
//!
//! - [`types`] describes the semantic field types of the profile and
//! converts values into their wire payloads.
//!
//! - [`record`] serializes definition and data records from resolved field
//! layouts and payloads.
//!
//! - [`check`] computes the cyclic redundancy check applied to the header
//! and the record stream.
//!
//! - [`document`] assembles the header, record stream, and trailer into a
//! complete document.
//!
//! Callers are responsible for pairing each data record with a preceding
//! definition record of the same layout on the same local message number.
//! The [`crate::encode::Emitter`] upholds this automatically.

pub mod check;
pub mod document;
pub mod record;
pub mod types;
