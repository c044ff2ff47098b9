use idmef_core::{registry, ObjectNode};
use idmef_path::{resolver, PathParser};
use idmef_wire::{
    read_message, read_message_len, write_message, Decoder, Encoder, WireError,
};

fn build(fields: &[(&str, &str)]) -> ObjectNode {
    let mut message = ObjectNode::new(registry::root());
    for (path, value) in fields {
        let path = PathParser::parse(path).unwrap();
        resolver::set(&mut message, &path, Some(value)).unwrap();
    }
    message
}

fn sample_alert() -> ObjectNode {
    build(&[
        ("alert.classification.text", "My Message"),
        ("alert.source(0).node.address(0).address", "x.x.x.x"),
        ("alert.source(0).node.address(1).address", "y.y.y.y"),
        ("alert.source(0).spoofed", "no"),
        ("alert.target(0).node.address(0).address", "z.z.z.z"),
        ("alert.target(0).service.port", "22"),
        ("alert.analyzer.name", "sensor-1"),
        ("alert.additional_data(0).type", "string"),
        ("alert.additional_data(0).data", "payload"),
    ])
}

#[test]
fn round_trip_preserves_canonical_dump() {
    let message = sample_alert();
    let payload = Encoder::new().encode_payload(&message);
    let decoded = Decoder::new().decode(&payload).unwrap();
    assert_eq!(decoded.dump(), message.dump());
}

#[test]
fn round_trip_preserves_index_density() {
    // Placeholder elements from gap-filling survive the wire.
    let message = build(&[("alert.source(1).node.address(3).address", "v")]);
    let payload = Encoder::new().encode_payload(&message);
    let decoded = Decoder::new().decode(&payload).unwrap();

    let path = PathParser::parse("alert.source(1).node.address(3).address").unwrap();
    let got = resolver::get(&decoded, &path).unwrap().unwrap();
    assert_eq!(got.to_string(), "v");
    let wildcard = PathParser::parse("alert.source(1).node.address(*)").unwrap();
    match resolver::get(&decoded, &wildcard).unwrap().unwrap() {
        idmef_path::GetResult::List(items) => assert_eq!(items.len(), 4),
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn stream_loop_terminates_cleanly() {
    // Zero messages: immediate end of stream.
    let mut empty: &[u8] = &[];
    assert!(read_message(&mut empty).unwrap().is_none());

    // One message: one tree, then end of stream.
    let message = sample_alert();
    let mut bytes = Vec::new();
    write_message(&mut bytes, &message).unwrap();
    let mut stream = &bytes[..];
    let first = read_message(&mut stream).unwrap().unwrap();
    assert_eq!(first.dump(), message.dump());
    assert!(read_message(&mut stream).unwrap().is_none());
}

#[test]
fn multiple_messages_read_in_order() {
    let first = build(&[("alert.classification.text", "first")]);
    let second = build(&[("alert.classification.text", "second")]);
    let mut bytes = Vec::new();
    write_message(&mut bytes, &first).unwrap();
    write_message(&mut bytes, &second).unwrap();

    let mut stream = &bytes[..];
    assert!(read_message(&mut stream).unwrap().unwrap().dump().contains("first"));
    assert!(read_message(&mut stream).unwrap().unwrap().dump().contains("second"));
    assert!(read_message(&mut stream).unwrap().is_none());
}

#[test]
fn byte_count_loop_consumes_the_whole_stream() {
    let message = sample_alert();
    let mut bytes = Vec::new();
    write_message(&mut bytes, &message).unwrap();
    write_message(&mut bytes, &message).unwrap();

    let mut stream = &bytes[..];
    let mut slot = None;
    let mut total = 0;
    let mut count = 0;
    loop {
        let n = read_message_len(&mut stream, &mut slot).unwrap();
        if n == 0 {
            break;
        }
        assert!(slot.is_some());
        total += n;
        count += 1;
    }
    assert_eq!(count, 2);
    assert_eq!(total, bytes.len());
}

#[test]
fn truncated_stream_is_not_end_of_stream() {
    let message = sample_alert();
    let mut bytes = Vec::new();
    write_message(&mut bytes, &message).unwrap();

    for cut in [1, 3, bytes.len() / 2, bytes.len() - 1] {
        let mut stream = &bytes[..cut];
        assert!(
            matches!(read_message(&mut stream), Err(WireError::Truncated)),
            "cut at {cut} should be truncated"
        );
    }
}

#[test]
fn oversized_message_is_refused_at_write_time() {
    let mut message = ObjectNode::new(registry::root());
    let path = PathParser::parse("alert.additional_data(0).data").unwrap();
    let big = "x".repeat(17 * 1024 * 1024);
    resolver::set(&mut message, &path, Some(&big)).unwrap();

    // Refused before any bytes hit the stream, so a record this library
    // writes is always one it can read back.
    let mut bytes = Vec::new();
    assert!(matches!(
        write_message(&mut bytes, &message),
        Err(WireError::Oversized(_))
    ));
    assert!(bytes.is_empty());
}

#[test]
fn corrupt_record_is_rejected() {
    let message = sample_alert();
    let mut bytes = Vec::new();
    write_message(&mut bytes, &message).unwrap();

    // Flip the first entry kind byte of the payload to an unknown kind.
    bytes[4] = 0x7f;
    let mut stream = &bytes[..];
    assert!(matches!(read_message(&mut stream), Err(WireError::Corrupt(_))));
}
