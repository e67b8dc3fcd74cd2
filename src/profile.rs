//! The message-definition catalog of the emitted profile subset.
//!
//! The catalog is the closed set of messages this crate emits, a small
//! slice of the FIT global profile. Field numbers here are the contract
//! shared with decoders; the order of each field table is the order fields
//! are laid out in definition and data records.

/// A field of a catalog message.
#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub number: u8,
    /// Semantic type, resolved through [`crate::wire::types::kind`].
    pub kind: &'static str,
}

/// A message of the catalog.
#[derive(Debug)]
pub struct Message {
    pub name: &'static str,
    /// Global message number.
    pub number: u16,
    pub fields: &'static [Field],
}

macro_rules! fields {
    ($(($name:literal, $number:literal, $kind:literal),)*) => {
        &[$(Field { name: $name, number: $number, kind: $kind },)*]
    };
}

const FILE_ID: Message = Message {
    name: "file_id",
    number: 0,
    fields: fields![
        ("type", 0, "enum"),
        ("manufacturer", 1, "uint16"),
        ("product", 2, "uint16"),
        ("serial_number", 3, "uint32"),
        ("time_created", 4, "date_time"),
    ],
};

const SESSION: Message = Message {
    name: "session",
    number: 18,
    fields: fields![
        ("timestamp", 253, "date_time"),
        ("event", 0, "enum"),
        ("event_type", 1, "enum"),
        ("start_time", 2, "date_time"),
        ("start_position_lat", 3, "semicircles"),
        ("start_position_long", 4, "semicircles"),
        ("sport", 5, "enum"),
        ("sub_sport", 6, "enum"),
        ("total_elapsed_time", 7, "duration"),
        ("total_timer_time", 8, "duration"),
        ("total_distance", 9, "distance"),
        ("total_calories", 11, "uint16"),
        ("avg_speed", 14, "speed"),
        ("max_speed", 15, "speed"),
        ("avg_heart_rate", 16, "uint8"),
        ("max_heart_rate", 17, "uint8"),
        ("avg_cadence", 18, "uint8"),
        ("avg_power", 20, "uint16"),
        ("max_power", 21, "uint16"),
        ("first_lap_index", 25, "uint16"),
        ("num_laps", 26, "uint16"),
    ],
};

const LAP: Message = Message {
    name: "lap",
    number: 19,
    fields: fields![
        ("timestamp", 253, "date_time"),
        ("event", 0, "enum"),
        ("event_type", 1, "enum"),
        ("start_time", 2, "date_time"),
        ("start_position_lat", 3, "semicircles"),
        ("start_position_long", 4, "semicircles"),
        ("end_position_lat", 5, "semicircles"),
        ("end_position_long", 6, "semicircles"),
        ("total_elapsed_time", 7, "duration"),
        ("total_timer_time", 8, "duration"),
        ("total_distance", 9, "distance"),
        ("total_calories", 11, "uint16"),
        ("avg_speed", 13, "speed"),
        ("max_speed", 14, "speed"),
        ("avg_heart_rate", 15, "uint8"),
        ("max_heart_rate", 16, "uint8"),
        ("avg_cadence", 17, "uint8"),
        ("avg_power", 19, "uint16"),
        ("max_power", 20, "uint16"),
    ],
};

const RECORD: Message = Message {
    name: "record",
    number: 20,
    fields: fields![
        ("timestamp", 253, "date_time"),
        ("position_lat", 0, "semicircles"),
        ("position_long", 1, "semicircles"),
        ("altitude", 2, "altitude"),
        ("heart_rate", 3, "uint8"),
        ("cadence", 4, "uint8"),
        ("distance", 5, "distance"),
        ("speed", 6, "speed"),
        ("power", 7, "uint16"),
        ("temperature", 13, "sint8"),
    ],
};

const EVENT: Message = Message {
    name: "event",
    number: 21,
    fields: fields![
        ("timestamp", 253, "date_time"),
        ("event", 0, "enum"),
        ("event_type", 1, "enum"),
        ("event_group", 4, "uint8"),
    ],
};

const COURSE: Message = Message {
    name: "course",
    number: 31,
    fields: fields![
        ("sport", 4, "enum"),
        ("name", 5, "string"),
    ],
};

const COURSE_POINT: Message = Message {
    name: "course_point",
    number: 32,
    fields: fields![
        ("timestamp", 1, "date_time"),
        ("position_lat", 2, "semicircles"),
        ("position_long", 3, "semicircles"),
        ("distance", 4, "distance"),
        ("type", 5, "enum"),
        ("name", 6, "string"),
    ],
};

const ACTIVITY: Message = Message {
    name: "activity",
    number: 34,
    fields: fields![
        ("timestamp", 253, "date_time"),
        ("total_timer_time", 0, "duration"),
        ("num_sessions", 1, "uint16"),
        ("type", 2, "enum"),
        ("event", 3, "enum"),
        ("event_type", 4, "enum"),
        ("local_timestamp", 5, "date_time"),
    ],
};

/// Retrieve the catalog entry for a message, if one exists.
pub fn lookup(name: &str) -> Option<&'static Message> {
    Some(match name {
        "file_id" => &FILE_ID,
        "session" => &SESSION,
        "lap" => &LAP,
        "record" => &RECORD,
        "event" => &EVENT,
        "course" => &COURSE,
        "course_point" => &COURSE_POINT,
        "activity" => &ACTIVITY,
        _ => return None,
    })
}
