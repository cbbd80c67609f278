use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use super::{Error, ErrorKind, Field, Result, SeqId, Strand};
use crate::core::truncate_str;
use crate::fasta::{MAX_COMMENT_LEN, MAX_NAME_LEN};

lazy_static! {
    // name strand frame length comment
    static ref FLAT_RE: Regex =
        Regex::new(r"^(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S.*?)\s*$").unwrap();
}

/// Parses a flat SeqId line: `name strand frame length comment`.
///
/// Fields are separated by whitespace, the comment is the rest of the line.
/// A trailing line terminator is ignored.
///
/// # Errors
///
/// `InvalidLine`, naming the first field that is missing or invalid.
/// The offending line is logged as a warning.
///
/// ```
/// use seqid_io::seqid::{parse_line, Strand};
///
/// let id = parse_line("seq1 D 2 150 note text").unwrap();
/// assert_eq!(id.name, "seq1");
/// assert_eq!(id.strand, Strand::Direct);
/// assert_eq!((id.frame, id.length), (2, 150));
/// assert_eq!(id.comment, "note text");
/// ```
pub fn parse_line(line: &str) -> Result<SeqId> {
    let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
    let caps = match FLAT_RE.captures(line) {
        Some(caps) => caps,
        None => return Err(invalid_line(line, missing_field(line))),
    };

    let mut strand_chars = caps[2].chars();
    let strand = match (strand_chars.next().and_then(Strand::from_char), strand_chars.next()) {
        (Some(s), None) => s,
        _ => return Err(invalid_line(line, Field::Strand)),
    };
    let frame = match caps[3].parse::<u8>() {
        Ok(f) if (1..=3).contains(&f) => f,
        _ => return Err(invalid_line(line, Field::Frame)),
    };
    let length = match caps[4].parse::<u64>() {
        Ok(l) if l > 0 => l,
        _ => return Err(invalid_line(line, Field::Length)),
    };

    let mut name = caps[1].to_string();
    truncate_str(&mut name, MAX_NAME_LEN);
    let mut comment = caps[5].to_string();
    truncate_str(&mut comment, MAX_COMMENT_LEN);
    Ok(SeqId {
        name,
        strand,
        frame,
        length,
        comment,
    })
}

// The first field absent from a line that did not match
fn missing_field(line: &str) -> Field {
    match line.split_whitespace().count() {
        0 => Field::Name,
        1 => Field::Strand,
        2 => Field::Frame,
        3 => Field::Length,
        _ => Field::Comment,
    }
}

fn invalid_line(line: &str, field: Field) -> Error {
    log::warn!("invalid or missing SeqId {}: '{}'", field, line);
    Error::new(ErrorKind::InvalidLine {
        line: line.to_string(),
        field,
    })
}

/// Reads one line and parses it with [`parse_line`](parse_line).
///
/// # Errors
///
/// `Eof` if there is no more input, `Io` if reading failed, otherwise the
/// errors of `parse_line`.
pub fn read_one<R: BufRead>(reader: &mut R) -> Result<SeqId> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::new(ErrorKind::Eof));
    }
    parse_line(&line)
}

/// Writes `id` as flat line: the five fields separated by a single space,
/// followed by a newline. An empty comment is written as
/// [`NO_COMMENT`](crate::fasta::NO_COMMENT).
///
/// ```
/// use seqid_io::seqid::{write_one, SeqId, Strand};
///
/// let mut out = vec![];
/// write_one(&mut out, &SeqId::new("seq1", Strand::Reverse, 3, 90)).unwrap();
/// assert_eq!(&out, b"seq1 R 3 90 <no comment>\n");
/// ```
pub fn write_one<W: io::Write>(mut writer: W, id: &SeqId) -> Result<()> {
    let mut line = id.to_flat_line();
    line.push('\n');
    // a writer accepting zero bytes results in io::ErrorKind::WriteZero
    writer.write_all(line.as_bytes())?;
    Ok(())
}

/// Reader of flat SeqId files, iterating over the identifiers.
///
/// # Example
///
/// ```
/// use seqid_io::seqid::SeqIdReader;
///
/// let data = b"a D 1 30 first\nb R 2 60 second\n";
/// let ids: Vec<_> = SeqIdReader::new(&data[..])
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(ids.len(), 2);
/// assert_eq!(ids[1].comment, "second");
/// ```
pub struct SeqIdReader<R: BufRead> {
    rdr: R,
}

impl SeqIdReader<buffer_redux::BufReader<File>> {
    /// Creates a reader from a file path.
    #[inline]
    pub fn from_path<F: AsRef<Path>>(path: F) -> io::Result<Self> {
        File::open(path).map(|f| SeqIdReader::new(buffer_redux::BufReader::new(f)))
    }
}

impl<R: BufRead> SeqIdReader<R> {
    #[inline]
    pub fn new(rdr: R) -> Self {
        SeqIdReader { rdr }
    }

    /// Reads the next identifier, see [`read_one`](read_one).
    #[inline]
    pub fn read_one(&mut self) -> Result<SeqId> {
        read_one(&mut self.rdr)
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.rdr
    }
}

impl<R: BufRead> Iterator for SeqIdReader<R> {
    type Item = Result<SeqId>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_one() {
            Err(ref e) if e.is_eof() => None,
            res => Some(res),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fasta::NO_COMMENT;

    fn field(line: &str) -> Field {
        match parse_line(line).unwrap_err().into_kind() {
            ErrorKind::InvalidLine { field, .. } => field,
            k => panic!("unexpected error kind {:?}", k),
        }
    }

    #[test]
    fn parse() {
        let id = parse_line("seq1 D 2 150 note text\r\n").unwrap();
        assert_eq!(id, SeqId::new("seq1", Strand::Direct, 2, 150).with_comment("note text"));
        assert_eq!(id.to_flat_line(), "seq1 D 2 150 note text");

        let id = parse_line("x\tR  3 7 <no comment>").unwrap();
        assert_eq!(id.comment, NO_COMMENT);
        assert!(!id.has_comment());
    }

    #[test]
    fn invalid_fields() {
        assert_eq!(field(""), Field::Name);
        assert_eq!(field("seq1"), Field::Strand);
        assert_eq!(field("seq1 D"), Field::Frame);
        assert_eq!(field("seq1 D 2"), Field::Length);
        assert_eq!(field("seq1 D 2 150"), Field::Comment);
        assert_eq!(field("seq1 X 2 150 c"), Field::Strand);
        assert_eq!(field("seq1 DR 2 150 c"), Field::Strand);
        assert_eq!(field("seq1 D 4 150 c"), Field::Frame);
        assert_eq!(field("seq1 D one 150 c"), Field::Frame);
        assert_eq!(field("seq1 D 1 0 c"), Field::Length);
        assert_eq!(field("seq1 D 1 -3 c"), Field::Length);
    }

    #[test]
    fn read_write() {
        let ids = vec![
            SeqId::new("a", Strand::Direct, 1, 3).with_comment("x y"),
            SeqId::new("b", Strand::Reverse, 3, 99),
        ];
        let mut out = vec![];
        for id in &ids {
            write_one(&mut out, id).unwrap();
        }
        let mut rdr = &out[..];
        assert_eq!(read_one(&mut rdr).unwrap(), ids[0]);
        assert_eq!(read_one(&mut rdr).unwrap(), ids[1]);
        assert!(read_one(&mut rdr).unwrap_err().is_eof());
    }

    #[test]
    fn write_zero() {
        let mut buf = [0u8; 4];
        let res = write_one(&mut buf[..], &SeqId::new("a", Strand::Direct, 1, 3));
        assert!(matches!(
            res.unwrap_err().into_kind(),
            ErrorKind::Io(ref e) if e.kind() == io::ErrorKind::WriteZero
        ));
    }
}
