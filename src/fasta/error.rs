use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ErrorKind {
    /// `std::io::Error`
    Io(io::Error),
    /// The line at a record offset does not start with `>`. Only returned
    /// by indexed reading, serial reading treats this as the end of input.
    InvalidStart {
        /// Byte offset of the offending line
        offset: u64,
        /// Byte found instead (`None` if the line is empty)
        found: Option<u8>,
    },
    /// There is no line at the record offset.
    UnexpectedEnd {
        /// Byte offset that was requested
        offset: u64,
    },
    /// Indexed reading was requested for a record without offset.
    MissingOffset,
    /// The payload buffer could not grow, either because the
    /// [`BufPolicy`](crate::policy::BufPolicy) refused or the allocation
    /// failed.
    BufferLimit,
}

impl_error!(ErrorKind);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::Io(ref e) => e.fmt(f),
            ErrorKind::InvalidStart { offset, found } => {
                write!(f, "FASTA parse error: expected '>' at byte {} but found ", offset)?;
                match found {
                    Some(b) => write!(f, "'{}'.", (*b as char).escape_default()),
                    None => write!(f, "an empty line."),
                }
            }
            ErrorKind::UnexpectedEnd { offset } => write!(
                f,
                "FASTA parse error: unexpected end of input at byte {}.",
                offset
            ),
            ErrorKind::MissingOffset => write!(f, "FASTA read error: record has no offset."),
            ErrorKind::BufferLimit => write!(f, "FASTA parse error: buffer limit reached."),
        }
    }
}
