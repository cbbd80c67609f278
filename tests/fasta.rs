#[macro_use]
extern crate matches;

#[macro_use]
mod common;

use common::*;
use seqid_io::fasta::{self, ErrorKind, Outcome, Reader, Record, NO_COMMENT};
use seqid_io::policy::Limited;
use std::io::{Cursor, Write};

#[test]
fn serial() {
    init_logger();
    // try different read buffer capacities
    for cap in [3, 4, 7, 16, 1 << 16].iter().cloned() {
        let mut reader = Reader::with_capacity(FASTA, cap);
        let mut record = Record::with_capacity(1);
        for exp in EXPECTED.iter() {
            let outcome = reader.read_serial(&mut record).unwrap();
            assert_eq!(outcome, Some(Outcome::Complete), "capacity {}", cap);
            validate_record!(record, exp);
        }
        assert_eq!(reader.read_serial(&mut record).unwrap(), None);
        assert_eq!(reader.read_serial(&mut record).unwrap(), None);
    }
}

#[test]
fn read_and_write_back() {
    let input = b">seq1 some comment\nACGT\nACGT\n";
    let mut reader = Reader::new(&input[..]);
    let mut record = Record::new();
    reader.read_serial(&mut record).unwrap().unwrap();
    assert_eq!(record.name(), "seq1");
    assert_eq!(record.comment(), "some comment");
    assert_eq!(record.len(), 8);
    assert_eq!(record.seq(), b"ACGTACGT");

    let mut out = vec![];
    record.write_wrap(&mut out, 4).unwrap();
    assert_eq!(&out[..], &input[..]);
}

#[test]
fn empty() {
    let mut reader = Reader::new(&b""[..]);
    let mut record = Record::new();
    assert_eq!(reader.read_serial(&mut record).unwrap(), None);
    assert_eq!(reader.records().count(), 0);
}

#[test]
fn no_header() {
    init_logger();
    let mut reader = Reader::new(&b"ACGT\n>id\nACGT\n"[..]);
    let mut record = Record::new();
    assert_eq!(reader.read_serial(&mut record).unwrap(), None);
    assert_eq!(reader.read_serial(&mut record).unwrap(), None);
}

#[test]
fn no_trailing_newline() {
    let mut reader = Reader::new(&b">id desc\nAC\nGT"[..]);
    let records: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].seq(), b"ACGT");
}

#[test]
fn records_iter() {
    let records: Vec<_> = Reader::new(FASTA)
        .into_records()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records.len(), EXPECTED.len());
    for (rec, exp) in records.iter().zip(EXPECTED.iter()) {
        validate_record!(rec, exp);
    }
}

#[test]
fn indexed() {
    let mut reader = Reader::new(Cursor::new(FASTA));
    let serial: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();

    let mut record = Record::new();
    for (rec, exp) in serial.iter().zip(EXPECTED.iter()).rev() {
        record.set_offset(rec.offset());
        reader.read_indexed(&mut record).unwrap();
        validate_record!(record, exp);
        assert_eq!(&record, rec);
    }
}

#[test]
fn indexed_errors() {
    let mut reader = Reader::new(Cursor::new(FASTA));
    let mut record = Record::new();

    let err = reader.read_indexed(&mut record).unwrap_err();
    assert_matches!(err.kind(), ErrorKind::MissingOffset);

    record.set_offset(Some(30));
    let err = reader.read_indexed(&mut record).unwrap_err();
    assert_matches!(err.kind(), ErrorKind::InvalidStart { offset: 30, found: Some(b's') });

    record.set_offset(Some(EMPTY_LINE_OFFSET));
    let err = reader.read_indexed(&mut record).unwrap_err();
    assert_matches!(err.kind(), ErrorKind::InvalidStart { found: None, .. });

    record.set_offset(Some(FASTA.len() as u64));
    let err = reader.read_indexed(&mut record).unwrap_err();
    assert_matches!(err.kind(), ErrorKind::UnexpectedEnd { .. });
    assert!(format!("{}", err).contains("unexpected end"));

    // still usable
    record.set_offset(Some(EXPECTED[1].offset));
    reader.read_indexed(&mut record).unwrap();
    validate_record!(record, EXPECTED[1]);
}

#[test]
fn seek() {
    let mut reader = Reader::new(Cursor::new(FASTA));
    let mut record = Record::new();
    while reader.read_serial(&mut record).unwrap().is_some() {}

    reader.seek(EXPECTED[2].offset).unwrap();
    assert_eq!(reader.offset(), EXPECTED[2].offset);
    for exp in &EXPECTED[2..] {
        reader.read_serial(&mut record).unwrap().unwrap();
        validate_record!(record, exp);
    }
    assert_eq!(reader.read_serial(&mut record).unwrap(), None);
}

#[test]
fn indexed_positioned_stream() {
    let mut cursor = Cursor::new(&b"junk\n>a\nACGT\n>b x\nGG\n"[..]);
    cursor.set_position(5);
    let mut reader = Reader::with_capacity(cursor, 3);
    let serial: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(serial[0].offset(), Some(0));
    assert_eq!(serial[1].offset(), Some(8));

    let mut record = Record::new();
    for rec in serial.iter().rev() {
        record.set_offset(rec.offset());
        reader.read_indexed(&mut record).unwrap();
        assert_eq!(&record, rec);
    }
}

#[test]
fn incomplete() {
    init_logger();
    let mut reader = Reader::new(FASTA).set_policy(Limited(8));
    let mut record = Record::with_capacity(4);

    assert_eq!(reader.read_serial(&mut record).unwrap(), Some(Outcome::Complete));
    validate_record!(record, EXPECTED[0]);

    // 12 bytes don't fit
    assert_eq!(reader.read_serial(&mut record).unwrap(), Some(Outcome::Incomplete));
    assert!(!record.is_valid());
    assert_eq!(record.name(), "seq2");
    assert!(record.len() < EXPECTED[1].seq.len());

    // the following records are not affected
    for exp in &EXPECTED[2..] {
        assert_eq!(reader.read_serial(&mut record).unwrap(), Some(Outcome::Complete));
        validate_record!(record, exp);
    }
    assert_eq!(reader.read_serial(&mut record).unwrap(), None);
}

#[test]
fn limit_below_default_capacity() {
    let mut reader = Reader::new(&b">a\nACGTACGTACGT\n>b\nACGT\n"[..]).set_policy(Limited(8));
    let mut record = Record::new();
    assert_eq!(reader.read_serial(&mut record).unwrap(), Some(Outcome::Incomplete));
    assert!(!record.is_valid());
    // lines are appended as a whole
    assert!(record.is_empty());
    assert_eq!(reader.read_serial(&mut record).unwrap(), Some(Outcome::Complete));
    assert_eq!(record.name(), "b");
    assert_eq!(record.seq(), b"ACGT");
}

#[test]
fn indexed_buffer_limit() {
    let mut reader = Reader::new(Cursor::new(FASTA)).set_policy(Limited(8));
    let mut record = Record::with_capacity(4);
    record.set_offset(Some(EXPECTED[1].offset));
    let err = reader.read_indexed(&mut record).unwrap_err();
    assert_matches!(err.kind(), ErrorKind::BufferLimit);
    assert!(!record.is_valid());

    record.set_offset(Some(EXPECTED[3].offset));
    reader.read_indexed(&mut record).unwrap();
    validate_record!(record, EXPECTED[3]);
}

#[test]
fn write_read_random() {
    let input = random_records(200, 300, 1);
    for width in [1, 3, 50, 61].iter().cloned() {
        let mut out = vec![];
        for (name, comment, seq) in &input {
            fasta::write_wrap(&mut out, name, comment, seq, width).unwrap();
        }

        let mut reader = Reader::new(Cursor::new(&out));
        let mut record = Record::with_capacity(0);
        let mut offsets = vec![];
        for (name, comment, seq) in &input {
            reader.read_serial(&mut record).unwrap().unwrap();
            assert_eq!(record.name(), name.as_str());
            let exp_comment = if comment.is_empty() { NO_COMMENT } else { comment.as_str() };
            assert_eq!(record.comment(), exp_comment);
            assert_eq!(record.seq(), seq.as_slice());
            if !record.is_empty() {
                assert!(record.seq_buffer().capacity() > record.len());
            }
            offsets.push(record.offset().unwrap());
        }
        assert!(reader.read_serial(&mut record).unwrap().is_none());
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));

        // indexed access in a different order
        for (i, offset) in offsets.iter().enumerate().rev().step_by(7) {
            record.set_offset(Some(*offset));
            reader.read_indexed(&mut record).unwrap();
            assert_eq!(record.seq(), input[i].2.as_slice());
        }
    }
}

#[test]
fn default_width() {
    let rec = Record::from_parts("id", "desc", &[b'C'; 101]);
    let mut out = vec![];
    rec.write(&mut out).unwrap();
    let lines: Vec<_> = out.split(|&b| b == b'\n').map(|l| l.len()).collect();
    assert_eq!(lines, vec![8, 50, 50, 1, 0]);
}

#[test]
fn check() {
    let mut reader = Reader::new(&b">a\nACGT\n>b\nacgt\n>c\nAC-T\n"[..]);
    let mut record = Record::new();
    let mut results = vec![];
    while reader.read_serial(&mut record).unwrap().is_some() {
        results.push((record.check(true), record.is_valid()));
    }
    assert_eq!(results, vec![(true, true), (false, false), (false, false)]);

    let mut rec = Record::from_parts("b", "", b"acgt");
    assert!(rec.check(false));
    assert!(rec.is_valid());
}

#[test]
fn long_header() {
    let name = "n".repeat(fasta::MAX_NAME_LEN + 100);
    let comment = "c".repeat(fasta::MAX_COMMENT_LEN + 100);
    let input = format!(">{} {}\nACGT\n", name, comment);
    let mut reader = Reader::new(input.as_bytes());
    let mut record = Record::new();
    reader.read_serial(&mut record).unwrap().unwrap();
    assert_eq!(record.name().len(), fasta::MAX_NAME_LEN);
    assert_eq!(record.comment().len(), fasta::MAX_COMMENT_LEN);
    assert_eq!(record.seq(), b"ACGT");
}

#[test]
fn from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FASTA).unwrap();
    file.flush().unwrap();

    let mut reader = Reader::from_path(file.path()).unwrap();
    let mut record = Record::new();
    for exp in EXPECTED.iter() {
        reader.read_serial(&mut record).unwrap().unwrap();
        validate_record!(record, exp);
    }
    record.set_offset(Some(EXPECTED[0].offset));
    reader.read_indexed(&mut record).unwrap();
    validate_record!(record, EXPECTED[0]);
}

#[test]
fn serde() {
    let rec = Record::from_parts("id", "desc", b"ACGT");
    let json = serde_json::to_string(&rec).unwrap();
    let back: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rec);
}
