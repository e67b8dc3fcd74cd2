//! The semantic field types of the emitted profile.
//!
//! Each message field in [`crate::profile`] names a semantic type, which
//! carries the wire code of its base type, its payload size, and any unit
//! conversion applied before encoding. Multi-byte payloads are written
//! little-endian.

use alloc::{string::String, vec::Vec};

use thiserror::Error;

/// Seconds from the Unix epoch to the FIT epoch (1989-12-31T00:00:00Z).
pub const EPOCH_OFFSET: u32 = 631_065_600;

/// Semicircles per decimal degree.
const SEMICIRCLES_PER_DEGREE: f64 = 2_147_483_648.0 / 180.0;

/// A value supplied for a message field, prior to unit conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Uint(u32),
    Sint(i32),
    Float(f64),
    Text(String),
}

impl Value {
    fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Uint(x) => Some(*x),
            _ => None,
        }
    }

    fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Sint(x) => Some(*x),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Uint(x) => Some(*x as f64),
            Self::Sint(x) => Some(*x as f64),
            Self::Float(x) => Some(*x),
            Self::Text(_) => None,
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(x) => Some(x),
            _ => None,
        }
    }
}

/// An error converting a value into its wire payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// The value's shape does not fit the field's semantic type.
    #[error("Value shape does not fit the field's semantic type.")]
    Mismatch,
    /// The converted value does not fit the field's base type.
    #[error("Converted value does not fit the field's base type.")]
    OutOfRange,
}

/// Descriptor for a semantic field type.
pub struct Kind {
    /// Wire code of the underlying base type.
    pub base_type: u8,
    /// Payload size in bytes, or `None` for strings, whose size is the
    /// NUL-terminated UTF-8 byte length of their value.
    pub size: Option<u8>,
    write: fn(&Value, &mut Vec<u8>) -> Result<(), ValueError>,
}

impl Kind {
    /// Convert a value into its wire payload, applying any unit conversion.
    pub fn payload(&self, value: &Value) -> Result<Vec<u8>, ValueError> {
        let mut bytes = Vec::with_capacity(self.size.unwrap_or(8).into());
        (self.write)(value, &mut bytes)?;
        Ok(bytes)
    }
}

/// Retrieve the descriptor for a semantic type, if one exists.
pub fn kind(semantic: &str) -> Option<&'static Kind> {
    const ENUM: Kind = Kind { base_type: 0x00, size: Some(1), write: write_u8 };
    const UINT8: Kind = Kind { base_type: 0x02, size: Some(1), write: write_u8 };
    const UINT16: Kind = Kind { base_type: 0x84, size: Some(2), write: write_u16 };
    const UINT32: Kind = Kind { base_type: 0x86, size: Some(4), write: write_u32 };
    const SINT8: Kind = Kind { base_type: 0x01, size: Some(1), write: write_i8 };
    const SINT16: Kind = Kind { base_type: 0x83, size: Some(2), write: write_i16 };
    const SINT32: Kind = Kind { base_type: 0x85, size: Some(4), write: write_i32 };
    const STRING: Kind = Kind { base_type: 0x07, size: None, write: write_string };
    const DATE_TIME: Kind = Kind { base_type: 0x86, size: Some(4), write: write_date_time };
    const SEMICIRCLES: Kind = Kind { base_type: 0x85, size: Some(4), write: write_semicircles };
    const DISTANCE: Kind = Kind { base_type: 0x86, size: Some(4), write: write_distance };
    const SPEED: Kind = Kind { base_type: 0x84, size: Some(2), write: write_speed };
    const ALTITUDE: Kind = Kind { base_type: 0x84, size: Some(2), write: write_altitude };
    const DURATION: Kind = Kind { base_type: 0x86, size: Some(4), write: write_duration };

    Some(match semantic {
        "enum" => &ENUM,
        "uint8" => &UINT8,
        "uint16" => &UINT16,
        "uint32" => &UINT32,
        "sint8" => &SINT8,
        "sint16" => &SINT16,
        "sint32" => &SINT32,
        "string" => &STRING,
        "date_time" => &DATE_TIME,
        "semicircles" => &SEMICIRCLES,
        "distance" => &DISTANCE,
        "speed" => &SPEED,
        "altitude" => &ALTITUDE,
        "duration" => &DURATION,
        _ => return None,
    })
}

macro_rules! write_int {
    ($name:ident, $int:ty, $from:ident, $(#[$attr:meta])*) => {
        $(#[$attr])*
        fn $name(value: &Value, out: &mut Vec<u8>) -> Result<(), ValueError> {
            let x: $int = value
                .$from()
                .ok_or(ValueError::Mismatch)?
                .try_into()
                .map_err(|_| ValueError::OutOfRange)?;

            out.extend_from_slice(&x.to_le_bytes());
            Ok(())
        }
    };
}

write_int!(write_u8, u8, as_u32, /** `enum`, `uint8` */);
write_int!(write_u16, u16, as_u32, /** `uint16` */);
write_int!(write_u32, u32, as_u32, /** `uint32` */);

write_int!(write_i8, i8, as_i32, /** `sint8` */);
write_int!(write_i16, i16, as_i32, /** `sint16` */);
write_int!(write_i32, i32, as_i32, /** `sint32` */);

macro_rules! write_scaled {
    ($name:ident, $int:ty, $scale:literal, $offset:literal, $(#[$attr:meta])*) => {
        $(#[$attr])*
        fn $name(value: &Value, out: &mut Vec<u8>) -> Result<(), ValueError> {
            let x = value.as_f64().ok_or(ValueError::Mismatch)?;
            let x: $int = round((x + $offset) * $scale)
                .try_into()
                .map_err(|_| ValueError::OutOfRange)?;

            out.extend_from_slice(&x.to_le_bytes());
            Ok(())
        }
    };
}

write_scaled!(write_distance, u32, 100.0, 0.0, /** `distance`, meters at 1/100 resolution */);
write_scaled!(write_speed, u16, 1000.0, 0.0, /** `speed`, meters per second at 1/1000 resolution */);
write_scaled!(write_altitude, u16, 5.0, 500.0, /** `altitude`, meters at 1/5 resolution, 500 below datum */);
write_scaled!(write_duration, u32, 1000.0, 0.0, /** `duration`, seconds at 1/1000 resolution */);

/// `string`, NUL-terminated UTF-8.
fn write_string(value: &Value, out: &mut Vec<u8>) -> Result<(), ValueError> {
    let x = value.as_text().ok_or(ValueError::Mismatch)?;

    out.extend_from_slice(x.as_bytes());
    out.push(0);
    Ok(())
}

/// `date_time`, Unix seconds rebased onto the FIT epoch.
fn write_date_time(value: &Value, out: &mut Vec<u8>) -> Result<(), ValueError> {
    let x = value.as_u32().ok_or(ValueError::Mismatch)?;
    let x = x.checked_sub(EPOCH_OFFSET).ok_or(ValueError::OutOfRange)?;

    out.extend_from_slice(&x.to_le_bytes());
    Ok(())
}

/// `semicircles`, decimal degrees in fixed point.
fn write_semicircles(value: &Value, out: &mut Vec<u8>) -> Result<(), ValueError> {
    let x = value.as_f64().ok_or(ValueError::Mismatch)?;

    out.extend_from_slice(&degrees_to_semicircles(x).to_le_bytes());
    Ok(())
}

/// Convert decimal degrees to the protocol's fixed-point angular unit.
pub fn degrees_to_semicircles(degrees: f64) -> i32 {
    round(degrees * SEMICIRCLES_PER_DEGREE).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Convert the protocol's fixed-point angular unit to decimal degrees.
pub fn semicircles_to_degrees(semicircles: i32) -> f64 {
    semicircles as f64 / SEMICIRCLES_PER_DEGREE
}

/// Round half away from zero. (`f64::round` is unavailable without `std`.)
fn round(x: f64) -> i64 {
    if x >= 0.0 { (x + 0.5) as i64 } else { (x - 0.5) as i64 }
}
