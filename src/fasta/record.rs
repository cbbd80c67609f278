use std::io;

use memchr::memchr2;
use serde_derive::{Deserialize, Serialize};

use super::write::{write_head, write_wrap_seq, DEFAULT_LINE_WIDTH};
use crate::core::{truncate_str, SeqBuffer};
use crate::policy::StdPolicy;

/// Name used if a header has no name.
pub const NO_NAME: &str = "NO_NAME";
/// Comment used if a header has no comment.
pub const NO_COMMENT: &str = "<no comment>";
/// Record names longer than this (in bytes) are truncated.
pub const MAX_NAME_LEN: usize = 256;
/// Record comments longer than this (in bytes) are truncated.
pub const MAX_COMMENT_LEN: usize = 1024;

/// A FASTA record.
///
/// The same instance is meant to be filled again and again by
/// [`Reader::read_serial`](super::Reader::read_serial) or
/// [`Reader::read_indexed`](super::Reader::read_indexed): all fields are
/// overwritten, and the sequence buffer is reused (and grown, never shrunk).
///
/// Names and comments are bounded to [`MAX_NAME_LEN`](MAX_NAME_LEN) and
/// [`MAX_COMMENT_LEN`](MAX_COMMENT_LEN) bytes. Longer input is truncated at
/// a character boundary and reading continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub(crate) valid: bool,
    pub(crate) offset: Option<u64>,
    pub(crate) name: String,
    pub(crate) comment: String,
    pub(crate) seq: SeqBuffer,
}

impl Default for Record {
    fn default() -> Self {
        Record::new()
    }
}

impl Record {
    /// Creates an empty record with the default payload capacity.
    #[inline]
    pub fn new() -> Self {
        Self::from_buffer(SeqBuffer::new())
    }

    /// Creates an empty record with a given initial payload capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_buffer(SeqBuffer::with_capacity(capacity))
    }

    fn from_buffer(seq: SeqBuffer) -> Self {
        Record {
            valid: true,
            offset: None,
            name: String::new(),
            comment: String::new(),
            seq,
        }
    }

    /// Creates a record from its parts, e.g. for writing.
    ///
    /// ```
    /// use seqid_io::fasta::Record;
    ///
    /// let rec = Record::from_parts("seq1", "some comment", b"ACGT");
    /// let mut out = vec![];
    /// rec.write(&mut out).unwrap();
    /// assert_eq!(&out, b">seq1 some comment\nACGT\n");
    /// ```
    pub fn from_parts(name: &str, comment: &str, seq: &[u8]) -> Self {
        let mut rec = Self::with_capacity(seq.len() + 1);
        rec.set_name(name);
        rec.set_comment(comment);
        let ok = rec.seq.extend(seq, &mut StdPolicy);
        debug_assert!(ok);
        rec
    }

    /// Returns `false` if the payload is known to be unusable, either
    /// because it could not be read completely or because
    /// [`check`](Record::check) failed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Byte offset of the header line in the source, if known.
    #[inline]
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Sets the offset used by
    /// [`Reader::read_indexed`](super::Reader::read_indexed).
    #[inline]
    pub fn set_offset(&mut self, offset: Option<u64>) {
        self.offset = offset;
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name, truncating it to `MAX_NAME_LEN` bytes.
    pub fn set_name(&mut self, name: &str) {
        self.name.clear();
        self.name.push_str(name);
        if truncate_str(&mut self.name, MAX_NAME_LEN) {
            log::debug!("record name truncated to '{}'", self.name);
        }
    }

    /// Returns the comment. An empty string means that there is no comment.
    #[inline]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns `true` unless the comment is empty or equals
    /// [`NO_COMMENT`](NO_COMMENT).
    #[inline]
    pub fn has_comment(&self) -> bool {
        !self.comment.is_empty() && self.comment != NO_COMMENT
    }

    /// Sets the comment, truncating it to `MAX_COMMENT_LEN` bytes.
    pub fn set_comment(&mut self, comment: &str) {
        self.comment.clear();
        self.comment.push_str(comment);
        if truncate_str(&mut self.comment, MAX_COMMENT_LEN) {
            log::debug!("comment of record '{}' truncated", self.name);
        }
    }

    /// Returns the sequence (all lines joined).
    #[inline]
    pub fn seq(&self) -> &[u8] {
        self.seq.as_slice()
    }

    #[inline]
    pub fn seq_buffer(&self) -> &SeqBuffer {
        &self.seq
    }

    /// Number of sequence bytes accumulated for this record.
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Checks that the sequence contains only ASCII letters, and if
    /// `require_uppercase` is set, only uppercase ones. On failure, the
    /// record is marked as invalid. A successful check does not change
    /// the validity.
    ///
    /// ```
    /// use seqid_io::fasta::Record;
    ///
    /// let mut rec = Record::from_parts("id", "", b"ACGTn");
    /// assert!(rec.check(false));
    /// assert!(!rec.check(true));
    /// assert!(!rec.is_valid());
    /// ```
    pub fn check(&mut self, require_uppercase: bool) -> bool {
        let ok = self.seq().iter().all(|&b| {
            if require_uppercase {
                b.is_ascii_uppercase()
            } else {
                b.is_ascii_alphabetic()
            }
        });
        if !ok {
            self.valid = false;
        }
        ok
    }

    /// Writes the record, wrapping the sequence at
    /// [`DEFAULT_LINE_WIDTH`](super::DEFAULT_LINE_WIDTH) characters.
    #[inline]
    pub fn write<W: io::Write>(&self, writer: W) -> io::Result<()> {
        self.write_wrap(writer, DEFAULT_LINE_WIDTH)
    }

    /// Writes the record, wrapping the sequence at `chars_per_line`
    /// characters. Panics if `chars_per_line` is 0.
    pub fn write_wrap<W: io::Write>(&self, mut writer: W, chars_per_line: usize) -> io::Result<()> {
        write_head(&mut writer, &self.name, &self.comment)?;
        write_wrap_seq(writer, self.seq(), chars_per_line)
    }

    // Fills name and comment from a header line (without '>')
    pub(crate) fn set_header(&mut self, head: &[u8]) {
        let (name, comment) = match memchr2(b' ', b'\t', head) {
            Some(pos) => {
                let rest = &head[pos..];
                let start = rest
                    .iter()
                    .position(|&b| b != b' ' && b != b'\t')
                    .unwrap_or(rest.len());
                (&head[..pos], &rest[start..])
            }
            None => (head, &b""[..]),
        };
        if name.is_empty() {
            self.set_name(NO_NAME);
        } else {
            self.set_name(&String::from_utf8_lossy(name));
        }
        if comment.is_empty() {
            self.set_comment(NO_COMMENT);
        } else {
            self.set_comment(&String::from_utf8_lossy(comment));
        }
    }

    // Prepares the record for being filled by a reader
    pub(crate) fn reset(&mut self, offset: Option<u64>) {
        self.valid = true;
        self.offset = offset;
        self.seq.clear();
    }
}
