//! FASTA reading and writing
//!
//! # Example
//!
//! The following example reads all records and writes them back with
//! a line width of 4:
//!
//! ```rust
//! use seqid_io::fasta::{Reader, Record};
//!
//! let seq = b">id1 some description
//! ACGT
//! ACGT
//! >id2
//! TGCA
//! ";
//!
//! let mut reader = Reader::new(&seq[..]);
//! let mut record = Record::new();
//! let mut output = vec![];
//!
//! while let Some(outcome) = reader.read_serial(&mut record).unwrap() {
//!     assert!(outcome.is_complete());
//!     println!("name: '{}', comment: '{}'", record.name(), record.comment());
//!     record.write_wrap(&mut output, 4).unwrap();
//! }
//!
//! assert_eq!(
//!     std::str::from_utf8(&output).unwrap(),
//!     ">id1 some description\nACGT\nACGT\n>id2 <no comment>\nTGCA\n"
//! );
//! ```
//!
//! # Serial and indexed reading
//!
//! [`Reader::read_serial`](Reader::read_serial) stores the byte offset of
//! each header in the record. Given that offset, the same record can later be
//! read again with [`Reader::read_indexed`](Reader::read_indexed), provided
//! that the underlying reader implements `Seek`.
//!
//! # Details on parsing and writing
//!
//! * A record starts with a line whose first byte is `>`. The name is
//!   everything up to the first space or tab, the comment everything after
//!   the following run of spaces/tabs. An empty name becomes
//!   [`NO_NAME`](NO_NAME), a missing comment [`NO_COMMENT`](NO_COMMENT).
//! * All following lines up to the next header or the end of input are
//!   concatenated to the sequence, line terminators (LF or CRLF) removed.
//!   Empty lines are therefore ignored within sequences.
//! * If the first line read by `read_serial()` does not start with `>`,
//!   reading stops (`Ok(None)`).
//! * Whitespace at the end of header and sequence lines is never removed.
//! * The writer always uses UNIX line endings, writes the header as
//!   `>name comment` and wraps the sequence at
//!   [`DEFAULT_LINE_WIDTH`](DEFAULT_LINE_WIDTH) characters unless another
//!   width is given.
mod error;
mod reader;
mod record;
mod write;

pub use self::error::*;
pub use self::reader::*;
pub use self::record::*;
pub use self::write::*;
