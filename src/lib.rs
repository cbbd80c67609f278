//! This library reads and writes FASTA files record by record, and encodes
//! strand, reading frame and nucleotide length of a sequence in its name.
//!
//! # FASTA
//!
//! [`fasta::Reader`](fasta::Reader) fills a caller-owned
//! [`fasta::Record`](fasta::Record). The record is reused for every call,
//! its sequence buffer only grows when needed. There are two ways of
//! reading:
//!
//! * *Serial*: [`read_serial`](fasta::Reader::read_serial) reads the records
//!   in order and remembers the byte offset of each header.
//! * *Indexed*: [`read_indexed`](fasta::Reader::read_indexed) reads the
//!   record at a previously obtained offset again.
//!
//! ```no_run
//! use seqid_io::fasta::{Reader, Record};
//!
//! let mut reader = Reader::from_path("seqs.fasta").unwrap();
//! let mut record = Record::new();
//! let mut offsets = vec![];
//!
//! while let Some(outcome) = reader.read_serial(&mut record).unwrap() {
//!     if !outcome.is_complete() {
//!         eprintln!("skipping truncated record {}", record.name());
//!         continue;
//!     }
//!     offsets.push(record.offset());
//! }
//!
//! // read the first record again
//! record.set_offset(offsets[0]);
//! reader.read_indexed(&mut record).unwrap();
//! ```
//!
//! # Sequence identifiers
//!
//! The [`seqid`](seqid) module converts between a
//! [`SeqId`](seqid::SeqId) and a FASTA record name of the form
//! `name@SF@L` (e.g. `seq1@D2@150`), as well as a flat line-based format.
//!
//! # Large sequences
//!
//! The sequence buffer grows to `2 * needed + 1` bytes if a sequence does not
//! fit. This can be changed by applying another [`policy`](policy), e.g. to
//! limit the sequence size:
//!
//! ```no_run
//! use seqid_io::fasta::Reader;
//! use seqid_io::policy::Limited;
//!
//! // Sequences above 1 GiB will be reported as incomplete
//! let mut reader = Reader::from_path("input.fasta").unwrap()
//!     .set_policy(Limited(1 << 30));
//! // (...)
//! ```

macro_rules! try_opt {
    ($expr: expr) => {
        match $expr {
            Ok(item) => item,
            Err(e) => return Some(Err(::std::convert::From::from(e))),
        }
    };
}

#[macro_use]
mod error;

pub mod core;
pub mod fasta;
pub mod policy;
pub mod seqid;
