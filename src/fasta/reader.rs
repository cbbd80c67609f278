use std::fs::File;
use std::io::{self, Seek};
use std::path::Path;

use super::{Error, ErrorKind, Record, Result};
use crate::core::{LineSource, Mode, BUFSIZE};
use crate::policy::{BufPolicy, StdPolicy};

/// Result of a successful [`read_serial`](Reader::read_serial) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The record was read completely.
    Complete,
    /// The payload buffer could not grow while reading the sequence. The
    /// record has `is_valid() == false`, its sequence is truncated, and
    /// the rest of it was skipped. Reading can continue with the next
    /// record.
    Incomplete,
}

impl Outcome {
    #[inline]
    pub fn is_complete(self) -> bool {
        self == Outcome::Complete
    }
}

/// FASTA parser
///
/// Records are read into a caller-owned [`Record`](Record), which is
/// reused for every call. There are two modes of access:
///
/// * [`read_serial`](Reader::read_serial) reads the input from start to end.
///   The header of the following record is kept in the reader's lookahead
///   slot, so every line is read exactly once.
/// * [`read_indexed`](Reader::read_indexed) jumps to the offset stored in
///   the record (e.g. by a previous serial pass) and reads the record found
///   there.
pub struct Reader<R, P = StdPolicy>
where
    R: io::Read,
{
    lines: LineSource<R>,
    buf_policy: P,
}

impl<R> Reader<R>
where
    R: io::Read,
{
    /// Creates a new reader with the default buffer size of 64 KiB
    ///
    /// # Example:
    ///
    /// ```
    /// use seqid_io::fasta::{Reader, Record};
    ///
    /// let seq = b">id\nSEQUENCE\n";
    ///
    /// let mut reader = Reader::new(&seq[..]);
    /// let mut record = Record::new();
    /// reader.read_serial(&mut record).unwrap();
    /// assert_eq!(record.name(), "id");
    /// ```
    #[inline]
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, BUFSIZE)
    }

    /// Creates a new reader with a given read buffer capacity.
    #[inline]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Reader {
            lines: LineSource::with_capacity(reader, capacity),
            buf_policy: StdPolicy,
        }
    }
}

impl Reader<File> {
    /// Creates a reader from a file path.
    ///
    /// # Example:
    ///
    /// ```no_run
    /// use seqid_io::fasta::Reader;
    ///
    /// let mut reader = Reader::from_path("seqs.fasta").expect("File could not be opened.");
    ///
    /// // (... do something with the reader)
    /// ```
    #[inline]
    pub fn from_path<F: AsRef<Path>>(path: F) -> io::Result<Reader<File>> {
        LineSource::from_path(path).map(|lines| Reader {
            lines,
            buf_policy: StdPolicy,
        })
    }
}

impl<R, P> Reader<R, P>
where
    R: io::Read,
    P: BufPolicy,
{
    /// Applies a [`BufPolicy`](crate::policy::BufPolicy) to the payload
    /// buffers filled by this reader. The method consumes the reader and
    /// returns a new `Reader` instance.
    #[inline]
    pub fn set_policy<T: BufPolicy>(self, buf_policy: T) -> Reader<R, T> {
        Reader {
            lines: self.lines,
            buf_policy,
        }
    }

    /// Returns a reference to the underlying `BufPolicy` of the reader
    #[inline]
    pub fn policy(&self) -> &P {
        &self.buf_policy
    }

    /// Reads the next record into `record`.
    ///
    /// Returns `Ok(None)` if there is no further record, which is the case
    /// at the end of the input, but also if the next line does not start
    /// with `>` (this is logged as a warning). The record offset is set to
    /// the position of the header line.
    ///
    /// `Ok(Some(Outcome::Incomplete))` means that a record was found, but
    /// its sequence could not be stored completely. The loop can continue,
    /// but the record itself should be discarded.
    ///
    /// # Example:
    ///
    /// ```
    /// use seqid_io::fasta::{Reader, Record};
    ///
    /// let seq = b">seq1 some comment\nACGT\nACGT\n>seq2\nTTTT\n";
    ///
    /// let mut reader = Reader::new(&seq[..]);
    /// let mut record = Record::new();
    /// let mut names = vec![];
    /// while let Some(outcome) = reader.read_serial(&mut record).unwrap() {
    ///     if outcome.is_complete() {
    ///         names.push(record.name().to_string());
    ///     }
    /// }
    /// assert_eq!(names, vec!["seq1", "seq2"]);
    /// ```
    pub fn read_serial(&mut self, record: &mut Record) -> Result<Option<Outcome>> {
        let offset = self.lines.next_offset();
        let head = match self.lines.next_line(Mode::Serial)? {
            Some(line) => line,
            None => return Ok(None),
        };
        if head.first() != Some(&b'>') {
            log::warn!(
                "FASTA line at byte {} does not start with '>', stopping",
                offset
            );
            // repeated calls keep returning None
            self.lines.push_back();
            return Ok(None);
        }
        record.reset(Some(offset));
        record.set_header(&head[1..]);

        if self.read_seq(record, Mode::Serial)? {
            return Ok(Some(Outcome::Complete));
        }
        record.valid = false;
        log::warn!(
            "sequence of record '{}' could not be stored completely ({} bytes read)",
            record.name(),
            record.len()
        );
        self.skip_seq()?;
        Ok(Some(Outcome::Incomplete))
    }

    // Appends sequence lines until the next header or the end of input.
    // Returns false if the buffer could not grow.
    fn read_seq(&mut self, record: &mut Record, mode: Mode) -> io::Result<bool> {
        while let Some(line) = self.lines.next_line(mode)? {
            if line.first() == Some(&b'>') {
                if mode == Mode::Serial {
                    self.lines.push_back();
                }
                return Ok(true);
            }
            if !record.seq.extend(line, &mut self.buf_policy) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn skip_seq(&mut self) -> io::Result<()> {
        while let Some(line) = self.lines.next_line(Mode::Serial)? {
            if line.first() == Some(&b'>') {
                self.lines.push_back();
                break;
            }
        }
        Ok(())
    }

    /// Byte offset of the next record header (if there is one).
    #[inline]
    pub fn offset(&self) -> u64 {
        self.lines.next_offset()
    }

    /// Returns a borrowed iterator over all FASTA records. Each record is
    /// newly allocated, this is therefore slower than reusing a `Record`
    /// with `read_serial()`. Incomplete records are returned as well,
    /// check them with `Record::is_valid()`.
    ///
    /// # Example
    ///
    /// ```
    /// use seqid_io::fasta::Reader;
    ///
    /// let seq = b">id1\nACGT\n>id2\nTGCA\n";
    ///
    /// let mut reader = Reader::new(&seq[..]);
    ///
    /// let records: Vec<_> = reader
    ///     .records()
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    ///
    /// assert_eq!(records.len(), 2);
    /// assert_eq!(records[1].seq(), b"TGCA");
    /// ```
    #[inline]
    pub fn records(&mut self) -> RecordsIter<R, P> {
        RecordsIter { rdr: self }
    }

    /// Returns an iterator over all records like `Reader::records()`,
    /// but with the difference that it owns the underlying reader.
    #[inline]
    pub fn into_records(self) -> RecordsIntoIter<R, P> {
        RecordsIntoIter { rdr: self }
    }

    #[inline]
    pub fn get_ref(&self) -> &R {
        self.lines.get_ref()
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.lines.into_inner()
    }
}

impl<R, P> Reader<R, P>
where
    R: io::Read + Seek,
    P: BufPolicy,
{
    /// Reads the record starting at `record.offset()`. The offset is
    /// usually obtained from a previous `read_serial()` call. Offsets are
    /// relative to the position of the stream when the reader was created.
    ///
    /// Each call is self-contained: the stream is repositioned first, and
    /// no line is kept for later calls. To continue with `read_serial()`
    /// afterwards, call [`seek`](Reader::seek) first.
    ///
    /// # Errors
    ///
    /// * `MissingOffset` if the record has no offset,
    /// * `UnexpectedEnd` if there is no line at the offset,
    /// * `InvalidStart` if the line at the offset is not a header,
    /// * `BufferLimit` if the sequence could not be stored completely
    ///   (the record is then marked as invalid).
    ///
    /// # Example
    ///
    /// ```
    /// use seqid_io::fasta::{Reader, Record};
    /// use std::io::Cursor;
    ///
    /// let seq = b">id1\nACGT\n>id2\nTGCA\n";
    ///
    /// let mut reader = Reader::new(Cursor::new(&seq[..]));
    /// let mut first = Record::new();
    /// reader.read_serial(&mut first).unwrap();
    /// let mut second = Record::new();
    /// reader.read_serial(&mut second).unwrap();
    ///
    /// let mut again = Record::new();
    /// again.set_offset(first.offset());
    /// reader.read_indexed(&mut again).unwrap();
    /// assert_eq!(again, first);
    /// ```
    pub fn read_indexed(&mut self, record: &mut Record) -> Result<()> {
        let offset = record
            .offset
            .ok_or_else(|| Error::new(ErrorKind::MissingOffset))?;
        self.lines.seek_to(offset)?;
        let head = match self.lines.next_line(Mode::Indexed)? {
            Some(line) => line,
            None => return Err(Error::new(ErrorKind::UnexpectedEnd { offset })),
        };
        if head.first() != Some(&b'>') {
            return Err(Error::new(ErrorKind::InvalidStart {
                offset,
                found: head.first().cloned(),
            }));
        }
        record.reset(Some(offset));
        record.set_header(&head[1..]);

        if !self.read_seq(record, Mode::Indexed)? {
            record.valid = false;
            return Err(Error::new(ErrorKind::BufferLimit));
        }
        Ok(())
    }

    /// Moves to the given byte offset, which should be the start of a
    /// header line. Subsequent `read_serial()` calls continue from there.
    #[inline]
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        self.lines.seek_to(offset)?;
        Ok(())
    }
}

/// Borrowed iterator of `Record`
pub struct RecordsIter<'a, R, P = StdPolicy>
where
    P: 'a,
    R: io::Read + 'a,
{
    rdr: &'a mut Reader<R, P>,
}

impl<'a, R, P> Iterator for RecordsIter<'a, R, P>
where
    P: BufPolicy + 'a,
    R: io::Read + 'a,
{
    type Item = Result<Record>;
    fn next(&mut self) -> Option<Self::Item> {
        let mut record = Record::new();
        try_opt!(self.rdr.read_serial(&mut record)).map(|_| Ok(record))
    }
}

/// Iterator of `Record` that owns the underlying reader
pub struct RecordsIntoIter<R: io::Read, P = StdPolicy> {
    rdr: Reader<R, P>,
}

impl<R, P> Iterator for RecordsIntoIter<R, P>
where
    P: BufPolicy,
    R: io::Read,
{
    type Item = Result<Record>;
    fn next(&mut self) -> Option<Self::Item> {
        let mut record = Record::new();
        try_opt!(self.rdr.read_serial(&mut record)).map(|_| Ok(record))
    }
}
