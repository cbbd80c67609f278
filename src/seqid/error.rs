use std::fmt;
use std::io;

/// Field of a flat SeqId line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Strand,
    Frame,
    Length,
    Comment,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Field::Name => "name",
            Field::Strand => "strand",
            Field::Frame => "frame",
            Field::Length => "length",
            Field::Comment => "comment",
        };
        f.write_str(s)
    }
}

#[derive(Debug)]
pub enum ErrorKind {
    /// The header name does not have the form `name@SF@L`, or a SeqId
    /// name cannot be encoded. Contains the offending text.
    Parse(String),
    /// Strand character other than `D` or `R`
    Strand(char),
    /// Frame outside of 1..=3
    Frame(u8),
    /// Length not greater than zero
    Length(i64),
    /// A flat SeqId line could not be parsed. `field` is the first field
    /// that is missing or invalid.
    InvalidLine { line: String, field: Field },
    /// `std::io::Error`
    Io(io::Error),
    /// No more input. Not a failure, signals the end of a flat file.
    Eof,
}

impl_error!(ErrorKind);

impl Error {
    /// Returns `true` if the error only signals the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind(), ErrorKind::Eof)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::Parse(s) => {
                write!(f, "SeqId parse error: '{}' does not match 'name@SF@L'.", s)
            }
            ErrorKind::Strand(c) => write!(
                f,
                "SeqId parse error: invalid strand '{}' (expected 'D' or 'R').",
                c.escape_default()
            ),
            ErrorKind::Frame(n) => {
                write!(f, "SeqId parse error: invalid frame {} (expected 1-3).", n)
            }
            ErrorKind::Length(l) => write!(f, "SeqId parse error: invalid length {}.", l),
            ErrorKind::InvalidLine { line, field } => {
                write!(f, "SeqId format error: invalid or missing {} in line '{}'.", field, line)
            }
            ErrorKind::Io(ref e) => e.fmt(f),
            ErrorKind::Eof => write!(f, "end of input."),
        }
    }
}
