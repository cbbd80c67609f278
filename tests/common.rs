#![allow(dead_code)]

use lazy_static::lazy_static;
use rand::{Rng, SeedableRng};
use rand_isaac::IsaacRng;

pub const FASTA: &[u8] = b">seq1 some comment
ACGT
ACGT
>seq2
TTTTTTTTTT
GG
>seq3 x
>seq4  spaced   comment\r
AC\r
\r
GT\r
";

pub struct ExpectedRecord {
    pub name: &'static str,
    pub comment: &'static str,
    pub seq: &'static [u8],
    pub offset: u64,
}

lazy_static! {
    pub static ref EXPECTED: Vec<ExpectedRecord> = vec![
        ExpectedRecord {
            name: "seq1",
            comment: "some comment",
            seq: b"ACGTACGT",
            offset: 0,
        },
        ExpectedRecord {
            name: "seq2",
            comment: "<no comment>",
            seq: b"TTTTTTTTTTGG",
            offset: 29,
        },
        ExpectedRecord {
            name: "seq3",
            comment: "x",
            seq: b"",
            offset: 49,
        },
        ExpectedRecord {
            name: "seq4",
            comment: "spaced   comment",
            seq: b"ACGT",
            offset: 57,
        },
    ];
}

/// Offset of the empty line within the last record of `FASTA`
pub const EMPTY_LINE_OFFSET: u64 = 86;

#[macro_export]
macro_rules! validate_record {
    ($record:expr, $exp:expr) => {
        assert_eq!($record.name(), $exp.name, "name mismatch");
        assert_eq!($record.comment(), $exp.comment, "comment mismatch");
        assert_eq!($record.seq(), $exp.seq, "sequence mismatch");
        assert_eq!($record.len(), $exp.seq.len(), "length mismatch");
        assert_eq!($record.offset(), Some($exp.offset), "offset mismatch");
        assert!($record.is_valid(), "record should be valid");
    };
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generates `n` records (name, comment, sequence) with random
/// sequences of up to `max_len` nucleotides. Every third comment is empty.
pub fn random_records(n: usize, max_len: usize, seed: u64) -> Vec<(String, String, Vec<u8>)> {
    let mut rng = IsaacRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let len = rng.gen_range(0..=max_len);
            let seq = (0..len).map(|_| b"ACGT"[rng.gen_range(0..4)]).collect();
            let comment = if i % 3 == 0 {
                String::new()
            } else {
                format!("random record {}", i)
            };
            (format!("rec{}", i), comment, seq)
        })
        .collect()
}
