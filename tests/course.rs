mod reader;

use pannier::encode::{Activity, Error, Lap, Point, Session, Sport, encode_course};
use pannier::wire::types::EPOCH_OFFSET;

const T0: u32 = 1_000_000_000;

fn point(timestamp: u32, distance: f64) -> Point {
    Point {
        timestamp: Some(timestamp),
        latitude: Some(45.0),
        longitude: Some(-122.0),
        distance: Some(distance),
        ..Default::default()
    }
}

fn course_with_laps(laps: Vec<Lap>) -> Activity {
    Activity {
        name: Some("Loop".into()),
        sport: Sport::Cycling,
        sessions: vec![Session { laps, ..Default::default() }],
        ..Default::default()
    }
}

#[test]
fn course_document_shape() {
    let lap = Lap {
        points: vec![point(T0, 0.0), point(T0 + 10, 55.0)],
        ..Default::default()
    };
    let document = encode_course(&course_with_laps(vec![lap])).unwrap();
    let decoded = reader::read(&document);

    let globals: Vec<u16> = decoded.messages.iter().map(|m| m.global).collect();
    assert_eq!(globals, [0, 31, 21, 20, 20, 21, 19]);

    let file_id = &decoded.messages_of(0)[0];
    assert_eq!(file_id.field(0).unwrap(), [6]);

    let course = &decoded.messages_of(31)[0];
    assert_eq!(course.field(4).unwrap(), [Sport::Cycling as u8]);
    assert_eq!(course.field(5).unwrap(), b"Loop\0");
}

#[test]
fn bracketing_events_take_terminal_timestamps() {
    let lap = Lap {
        points: vec![point(T0, 0.0), point(T0 + 10, 55.0)],
        ..Default::default()
    };
    let document = encode_course(&course_with_laps(vec![lap])).unwrap();
    let decoded = reader::read(&document);

    let events = decoded.messages_of(21);
    assert_eq!(events.len(), 2);

    let seconds = |bytes: &[u8]| u32::from_le_bytes(bytes.try_into().unwrap()) + EPOCH_OFFSET;

    assert_eq!(events[0].field(1).unwrap(), [0]); // Start.
    assert_eq!(seconds(events[0].field(253).unwrap()), T0);

    assert_eq!(events[1].field(1).unwrap(), [4]); // Stop all.
    assert_eq!(seconds(events[1].field(253).unwrap()), T0 + 10);
}

#[test]
fn merged_points_ordered_by_timestamp() {
    let late = Lap {
        points: vec![point(T0 + 20, 200.0), point(T0 + 30, 300.0)],
        ..Default::default()
    };
    let early = Lap {
        points: vec![point(T0, 0.0), point(T0 + 10, 100.0)],
        ..Default::default()
    };

    let document = encode_course(&course_with_laps(vec![late, early])).unwrap();
    let decoded = reader::read(&document);

    let timestamps: Vec<u32> = decoded
        .messages_of(20)
        .iter()
        .map(|m| u32::from_le_bytes(m.field(253).unwrap().try_into().unwrap()))
        .collect();

    assert_eq!(timestamps.len(), 4);
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn untimed_points_do_not_disorder_timestamps() {
    let lap = Lap {
        points: vec![
            Point {
                timestamp: None,
                distance: Some(5.0),
                ..Default::default()
            },
            point(T0 + 2, 1.0),
            point(T0 + 1, 10.0),
        ],
        ..Default::default()
    };

    let document = encode_course(&course_with_laps(vec![lap])).unwrap();
    let decoded = reader::read(&document);

    let records = decoded.messages_of(20);
    assert_eq!(records.len(), 3);

    // The untimed point sorts ahead of the timestamped ones.
    assert!(records[0].field(253).is_none());
    assert_eq!(
        u32::from_le_bytes(records[0].field(5).unwrap().try_into().unwrap()),
        500
    );

    let timestamps: Vec<u32> = records
        .iter()
        .filter_map(|m| m.field(253))
        .map(|bytes| u32::from_le_bytes(bytes.try_into().unwrap()) + EPOCH_OFFSET)
        .collect();

    assert_eq!(timestamps, [T0 + 1, T0 + 2]);
}

#[test]
fn tied_timestamps_fall_back_to_distance() {
    let lap = Lap {
        points: vec![point(T0, 300.0), point(T0, 100.0), point(T0, 200.0)],
        ..Default::default()
    };

    let document = encode_course(&course_with_laps(vec![lap])).unwrap();
    let decoded = reader::read(&document);

    // Centimeters on the wire.
    let distances: Vec<u32> = decoded
        .messages_of(20)
        .iter()
        .map(|m| u32::from_le_bytes(m.field(5).unwrap().try_into().unwrap()))
        .collect();

    assert_eq!(distances, [10_000, 20_000, 30_000]);
}

#[test]
fn only_first_lap_message_emitted() {
    let first = Lap {
        points: vec![point(T0, 0.0)],
        total_distance: Some(10.0),
        ..Default::default()
    };
    let second = Lap {
        points: vec![point(T0 + 10, 10.0)],
        total_distance: Some(20.0),
        ..Default::default()
    };

    let document = encode_course(&course_with_laps(vec![first, second])).unwrap();
    let decoded = reader::read(&document);

    let laps = decoded.messages_of(19);
    assert_eq!(laps.len(), 1);
    assert_eq!(
        u32::from_le_bytes(laps[0].field(9).unwrap().try_into().unwrap()),
        1_000
    );
}

#[test]
fn empty_course_rejected() {
    assert!(matches!(
        encode_course(&Activity::default()),
        Err(Error::EmptyCourse)
    ));

    let pointless = course_with_laps(vec![Lap::default()]);
    assert!(matches!(encode_course(&pointless), Err(Error::EmptyCourse)));
}
