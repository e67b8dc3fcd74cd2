#![no_std]

//! An efficient serializer for Garmin's Flexible and Interoperable Data
//! Transfer protocol.
//!
//! Pannier assembles FIT activity and course documents from an in-memory
//! track model, producing byte buffers that interoperate with the devices
//! and services consuming the format.
//!
//! Most users should begin with the model types and entry points in the
//! [`encode`] module. Applications emitting their own message sequences can
//! drive the [`encode::Emitter`] directly, and the byte-level machinery is
//! exposed in the [`wire`] and [`profile`] modules for finer control.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable writer-based entry points (default).

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod encode;
pub mod profile;
pub mod wire;
