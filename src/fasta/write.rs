use std::io;

use super::{NO_COMMENT, NO_NAME};

/// Default number of sequence characters per output line.
pub const DEFAULT_LINE_WIDTH: usize = 50;

/// Helper function for writing data (not necessarily stored in a `Record` instance)
/// to the FASTA format. Wraps the sequence to produce multi-line FASTA
/// with a maximum width specified by the `wrap` parameter.
#[inline]
pub fn write_wrap<W>(
    mut writer: W,
    name: &str,
    comment: &str,
    seq: &[u8],
    wrap: usize,
) -> io::Result<()>
where
    W: io::Write,
{
    write_head(&mut writer, name, comment)?;
    write_wrap_seq(writer, seq, wrap)
}

/// Writes only the header line. An empty name is written as
/// [`NO_NAME`](super::NO_NAME), an empty comment as
/// [`NO_COMMENT`](super::NO_COMMENT). Both are written verbatim otherwise.
#[inline]
pub fn write_head<W>(mut writer: W, name: &str, comment: &str) -> io::Result<()>
where
    W: io::Write,
{
    let name = if name.is_empty() { NO_NAME } else { name };
    let comment = if comment.is_empty() { NO_COMMENT } else { comment };
    writer.write_all(b">")?;
    writer.write_all(name.as_bytes())?;
    writer.write_all(b" ")?;
    writer.write_all(comment.as_bytes())?;
    writer.write_all(b"\n")
}

/// Writes the sequence line, and wraps the output to a maximum width specified by `wrap`.
/// An empty sequence produces no output.
#[inline]
pub fn write_wrap_seq<W>(mut writer: W, seq: &[u8], wrap: usize) -> io::Result<()>
where
    W: io::Write,
{
    assert!(wrap > 0);
    for chunk in seq.chunks(wrap) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
