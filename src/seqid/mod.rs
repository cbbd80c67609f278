//! Structured sequence identifiers (SeqId)
//!
//! A [`SeqId`](SeqId) describes where a sequence comes from: the name of the
//! original nucleotide sequence, its strand, the reading frame, and its
//! nucleotide length. There are two textual representations:
//!
//! * **Header form**: `name@SF@L`, stored as the name of a FASTA record,
//!   e.g. `seq1@D2@150` (direct strand, frame 2, 150 nt). See
//!   [`encode_header`](encode_header), [`decode_header`](decode_header) and
//!   [`decode_header_safe`](decode_header_safe).
//! * **Flat form**: one identifier per line, `name strand frame length
//!   comment`, e.g. `seq1 D 2 150 note text`. See [`parse_line`](parse_line),
//!   [`read_one`](read_one), [`write_one`](write_one) and
//!   [`SeqIdReader`](SeqIdReader).
//!
//! # Example
//!
//! ```
//! use seqid_io::fasta::Record;
//! use seqid_io::seqid::{self, SeqId, Strand};
//!
//! let id = SeqId::new("seq1", Strand::Reverse, 3, 300);
//! let mut record = Record::from_parts("", "", b"MKV");
//! seqid::encode_header(&id, &mut record).unwrap();
//! assert_eq!(record.name(), "seq1@R3@300");
//!
//! let decoded = seqid::decode_header(&record).unwrap();
//! assert_eq!(decoded, id);
//!
//! // records without valid identifier
//! let other = Record::from_parts("abc", "", b"MKV");
//! assert!(seqid::decode_header(&other).is_err());
//! let lenient = seqid::decode_header_safe(&other);
//! assert_eq!((lenient.strand, lenient.frame, lenient.length), (Strand::Direct, 1, 3));
//! ```
use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::core::truncate_str;
use crate::fasta::{Record, MAX_COMMENT_LEN, MAX_NAME_LEN, NO_COMMENT};

mod error;
mod flat;
mod header;

pub use self::error::*;
pub use self::flat::*;
pub use self::header::*;

/// Strand of the original sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    Direct,
    Reverse,
    /// Only used by [`SeqId::from_record`](SeqId::from_record) before the
    /// strand is known.
    Unknown,
}

impl Strand {
    /// Parses `D` or `R`.
    #[inline]
    pub fn from_char(c: char) -> Option<Strand> {
        match c {
            'D' => Some(Strand::Direct),
            'R' => Some(Strand::Reverse),
            _ => None,
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Strand::Direct => 'D',
            Strand::Reverse => 'R',
            Strand::Unknown => '?',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Sequence identifier with strand, frame and nucleotide length.
///
/// Strand, frame and length belong together: the decoders always set all
/// three of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeqId {
    pub name: String,
    pub strand: Strand,
    /// 1, 2 or 3 (0 if unknown)
    pub frame: u8,
    /// Nucleotide length of the original sequence
    pub length: u64,
    pub comment: String,
}

impl SeqId {
    /// Creates a new identifier with [`NO_COMMENT`](crate::fasta::NO_COMMENT)
    /// as comment. The name is truncated to
    /// [`MAX_NAME_LEN`](crate::fasta::MAX_NAME_LEN) bytes.
    pub fn new(name: &str, strand: Strand, frame: u8, length: u64) -> Self {
        let mut name = name.to_string();
        truncate_str(&mut name, MAX_NAME_LEN);
        SeqId {
            name,
            strand,
            frame,
            length,
            comment: NO_COMMENT.to_string(),
        }
    }

    /// Replaces the comment (truncated to `MAX_COMMENT_LEN` bytes).
    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        truncate_str(&mut self.comment, MAX_COMMENT_LEN);
        self
    }

    /// Best-effort identifier of a record, before its name is decoded:
    /// name, comment and length are copied from the record, the strand is
    /// `Unknown` and the frame 0.
    pub fn from_record(record: &Record) -> Self {
        SeqId {
            name: record.name().to_string(),
            strand: Strand::Unknown,
            frame: 0,
            length: record.len() as u64,
            comment: record_comment(record),
        }
    }

    /// Returns `true` if strand, frame and length have valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.strand != Strand::Unknown && (1..=3).contains(&self.frame) && self.length > 0
    }

    /// Returns `true` unless the comment is empty or equals `NO_COMMENT`.
    #[inline]
    pub fn has_comment(&self) -> bool {
        !self.comment.is_empty() && self.comment != NO_COMMENT
    }

    /// Returns the flat representation without line terminator.
    ///
    /// ```
    /// use seqid_io::seqid::{SeqId, Strand};
    ///
    /// let id = SeqId::new("seq1", Strand::Direct, 2, 150).with_comment("note text");
    /// assert_eq!(id.to_flat_line(), "seq1 D 2 150 note text");
    /// ```
    pub fn to_flat_line(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.name,
            self.strand,
            self.frame,
            self.length,
            comment_or_default(&self.comment)
        )
    }
}

#[inline]
pub(crate) fn comment_or_default(comment: &str) -> &str {
    if comment.is_empty() {
        NO_COMMENT
    } else {
        comment
    }
}

#[inline]
fn record_comment(record: &Record) -> String {
    comment_or_default(record.comment()).to_string()
}
