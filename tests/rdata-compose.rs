//! Encoding record data and name compression.

mod common;

use common::{init_logging, with_len, SAMPLES};
use domain_rdata::base::name::{Compressor, NameOffsets};
use domain_rdata::base::{Name, NameTable, Rtype, Sink};
use domain_rdata::rdata::{compose_len_rdata, parse_rdata, Rdata};
use octseq::parse::Parser;

fn name(s: &str) -> Name {
    s.parse().unwrap()
}

#[test]
fn round_trip() {
    init_logging();
    let mut names = NameTable::new();
    for &(rtype, rdata) in SAMPLES {
        let decoded = Rdata::from_wire(rtype, rdata, &mut names).unwrap();

        // Without compression, the original data is reproduced.
        let mut target = Vec::new();
        compose_len_rdata(&decoded, &names, &mut target).unwrap();
        assert_eq!(target, with_len(rdata), "{}", rtype);

        // Decoding again gives the same handles.
        let mut parser = Parser::from_ref(target.as_slice());
        let (again, len) =
            parse_rdata(rtype, &mut parser, &mut names).unwrap();
        assert_eq!(len, target.len());
        assert_eq!(again, decoded, "{}", rtype);
        again.release(&mut names);
        decoded.release(&mut names);
    }
    assert!(names.is_empty());
}

#[test]
fn round_trip_compressed() {
    init_logging();
    let mut names = NameTable::new();
    let records: Vec<_> = SAMPLES
        .iter()
        .map(|&(rtype, rdata)| {
            (rtype, Rdata::from_wire(rtype, rdata, &mut names).unwrap())
        })
        .collect();

    // All records in one message, each preceded by a name to compress
    // against.
    let mut target = Compressor::new(Vec::new());
    target.write(&[0; 12]).unwrap();
    let mut positions = Vec::new();
    for (_, rdata) in &records {
        target.write_compressed_name(&name("example")).unwrap();
        positions.push(target.position());
        compose_len_rdata(rdata, &names, &mut target).unwrap();
    }
    let msg = target.into_target();

    for ((rtype, rdata), pos) in records.iter().zip(positions) {
        let mut parser = Parser::from_ref(msg.as_slice());
        parser.advance(pos).unwrap();
        let (decoded, _) =
            parse_rdata(*rtype, &mut parser, &mut names).unwrap();
        assert_eq!(&decoded, rdata, "{}", rtype);
        decoded.release(&mut names);
    }
}

#[test]
fn ns_pointer_reproduced() {
    init_logging();
    let mut msg = vec![0u8; 12];
    msg.extend_from_slice(b"\x07example\x03com\x00\x00\x02\x00\x01");
    msg.extend_from_slice(b"\xc0\x0c\x00\x02\x00\x01\x00\x00\x0e\x10");
    let rdlen_pos = msg.len();
    msg.extend_from_slice(b"\x00\x02\xc0\x0c");

    let mut names = NameTable::new();
    let mut parser = Parser::from_ref(msg.as_slice());
    parser.advance(rdlen_pos).unwrap();
    let (rdata, _) = parse_rdata(Rtype::NS, &mut parser, &mut names).unwrap();

    let mut target = Compressor::new(Vec::new());
    target.write(&[0; 12]).unwrap();
    target.write_compressed_name(&name("example.com")).unwrap();
    target.write(b"\x00\x02\x00\x01").unwrap();
    target.write_compressed_name(&name("example.com")).unwrap();
    target.write(b"\x00\x02\x00\x01\x00\x00\x0e\x10").unwrap();
    compose_len_rdata(&rdata, &names, &mut target).unwrap();
    assert_eq!(target.as_slice(), msg.as_slice());
}

#[test]
fn shared_suffix() {
    init_logging();
    let mut names = NameTable::new();
    let first = Rdata::from_wire(
        Rtype::MX,
        b"\x00\x0a\x04mail\x07example\x03com\x00",
        &mut names,
    )
    .unwrap();
    let second = Rdata::from_wire(
        Rtype::MX,
        b"\x00\x14\x02mx\x07EXAMPLE\x03com\x00",
        &mut names,
    )
    .unwrap();

    let mut target = Compressor::new(Vec::new());
    target.write(&[0; 12]).unwrap();
    compose_len_rdata(&first, &names, &mut target).unwrap();
    compose_len_rdata(&second, &names, &mut target).unwrap();

    // The first name starts at 16, example.com at 21.
    assert_eq!(
        &target.as_slice()[12..],
        b"\x00\x14\x00\x0a\x04mail\x07example\x03com\x00\
          \x00\x07\x00\x14\x02mx\xc0\x15"
    );
}

#[test]
fn offset_limit() {
    init_logging();
    let mut target = Compressor::new(Vec::new());
    target.write(&vec![0; NameOffsets::LIMIT - 4]).unwrap();

    // The first label is still in range, the second one isn’t.
    target.write_compressed_name(&name("example.com")).unwrap();
    assert_eq!(target.offsets().len(), 1);
    let pos = target.position();
    target.write_compressed_name(&name("example.com")).unwrap();
    assert_eq!(&target.as_slice()[pos..], b"\xff\xfc");
    let pos = target.position();
    target.write_compressed_name(&name("com")).unwrap();
    assert_eq!(&target.as_slice()[pos..], b"\x03com\x00");

    // Names entirely beyond the limit are written in full every time.
    target.write_compressed_name(&name("www.example.org")).unwrap();
    let pos = target.position();
    target.write_compressed_name(&name("www.example.org")).unwrap();
    assert_eq!(
        &target.as_slice()[pos..],
        b"\x03www\x07example\x03org\x00"
    );
    assert_eq!(target.offsets().len(), 1);
}

#[test]
fn pointers_stay_below_limit() {
    init_logging();
    let mut names = NameTable::new();
    let rdata = Rdata::from_wire(
        Rtype::CNAME,
        b"\x03www\x07example\x03com\x00",
        &mut names,
    )
    .unwrap();
    let mut target = Compressor::new(Vec::new());
    let mut starts = Vec::new();
    while target.position() < 2 * NameOffsets::LIMIT {
        starts.push(target.position());
        compose_len_rdata(&rdata, &names, &mut target).unwrap();
    }
    let msg = target.into_target();
    for start in starts {
        let len = u16::from_be_bytes([msg[start], msg[start + 1]]);
        let data = &msg[start + 2..start + 2 + usize::from(len)];
        if data.len() == 2 {
            let ptr = u16::from_be_bytes([data[0], data[1]]);
            assert_eq!(ptr & 0xC000, 0xC000);
            assert!(usize::from(ptr & 0x3FFF) < NameOffsets::LIMIT);
        } else if start >= NameOffsets::LIMIT {
            assert_eq!(data, b"\x03www\x07example\x03com\x00");
        }
    }
}
