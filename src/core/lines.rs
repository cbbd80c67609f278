use std::fs::File;
use std::io::{self, BufRead, Seek};
use std::path::Path;

use crate::core::trim_end;

/// The default capacity of the underlying read buffer.
pub const BUFSIZE: usize = 64 * 1024;

/// Line delivery mode of [`LineSource::next_line`](LineSource::next_line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A pushed back line is redelivered before reading further.
    Serial,
    /// Pushed back lines are ignored, every call reads from the stream.
    /// Used when the stream is explicitly repositioned before reading.
    Indexed,
}

/// Line reader wrapping `buffer_redux::BufReader` with one line of
/// lookahead.
///
/// The most recently delivered line stays in an internal slot and can be
/// marked for redelivery with [`push_back`](LineSource::push_back). There is
/// only one slot: the line that is pushed back is always the last one
/// returned, so pushing back twice before reading again has no further
/// effect (the second call returns `false`).
///
/// Line terminators (`\n` or `\r\n`) are not part of the returned lines.
///
/// Offsets are counted from the position of the stream at the time the
/// line source was created, which is not necessarily the start of the
/// stream.
pub struct LineSource<R>
where
    R: io::Read,
{
    buf_reader: buffer_redux::BufReader<R>,
    // last delivered line, without terminator
    line: Vec<u8>,
    has_line: bool,
    pushed_back: bool,
    // offset of the line in `line`
    line_offset: u64,
    // offset of the next unread byte
    offset: u64,
    // stream position corresponding to offset 0, determined on first seek
    base: Option<u64>,
}

impl LineSource<File> {
    /// Creates a line source from a file path.
    #[inline]
    pub fn from_path<F: AsRef<Path>>(path: F) -> io::Result<LineSource<File>> {
        File::open(path).map(LineSource::new)
    }
}

impl<R> LineSource<R>
where
    R: io::Read,
{
    #[inline]
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, BUFSIZE)
    }

    #[inline]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        LineSource {
            buf_reader: buffer_redux::BufReader::with_capacity(capacity, reader),
            line: Vec::new(),
            has_line: false,
            pushed_back: false,
            line_offset: 0,
            offset: 0,
            base: None,
        }
    }

    /// Returns the next line, or `None` at the end of the input.
    pub fn next_line(&mut self, mode: Mode) -> io::Result<Option<&[u8]>> {
        if mode == Mode::Serial && self.pushed_back {
            self.pushed_back = false;
            return Ok(Some(&self.line));
        }
        self.pushed_back = false;
        self.line.clear();
        let n = self.buf_reader.read_until(b'\n', &mut self.line)?;
        if n == 0 {
            self.has_line = false;
            self.line_offset = self.offset;
            return Ok(None);
        }
        self.line_offset = self.offset;
        self.offset += n as u64;
        let l = trim_end(&self.line).len();
        self.line.truncate(l);
        self.has_line = true;
        Ok(Some(&self.line))
    }

    /// Marks the most recently delivered line for redelivery by the next
    /// call to `next_line` in [`Mode::Serial`](Mode::Serial). Returns `false`
    /// if there is no line to push back or it is already pushed back.
    #[inline]
    pub fn push_back(&mut self) -> bool {
        if !self.has_line || self.pushed_back {
            return false;
        }
        self.pushed_back = true;
        true
    }

    /// Returns `true` if a line is waiting for redelivery.
    #[inline]
    pub fn is_pushed_back(&self) -> bool {
        self.pushed_back
    }

    /// Byte offset of the most recently delivered line (which is also the
    /// pushed back line, if any). At the end of the input, this is the
    /// input length.
    #[inline]
    pub fn line_offset(&self) -> u64 {
        self.line_offset
    }

    /// Byte offset of the next line that will be delivered, taking a
    /// pushed back line into account.
    #[inline]
    pub fn next_offset(&self) -> u64 {
        if self.pushed_back {
            self.line_offset
        } else {
            self.offset
        }
    }

    /// Byte offset of the next unread byte in the underlying stream.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    #[inline]
    pub fn get_ref(&self) -> &R {
        self.buf_reader.get_ref()
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.buf_reader.into_inner()
    }
}

impl<R> LineSource<R>
where
    R: io::Read + Seek,
{
    /// Moves to the given byte offset. The read buffer is discarded and a
    /// pushed back line is forgotten.
    pub fn seek_to(&mut self, offset: u64) -> io::Result<()> {
        let base = self.base()?;
        log::trace!("seeking to byte {} (stream position {})", offset, base + offset);
        self.buf_reader.seek(io::SeekFrom::Start(base + offset))?;
        self.offset = offset;
        self.line_offset = offset;
        self.line.clear();
        self.has_line = false;
        self.pushed_back = false;
        Ok(())
    }

    // Stream position of offset 0: the position of the underlying reader
    // minus everything consumed or buffered so far
    fn base(&mut self) -> io::Result<u64> {
        if let Some(base) = self.base {
            return Ok(base);
        }
        let pos = self.buf_reader.get_mut().stream_position()?;
        let read = self.offset + self.buf_reader.buf_len() as u64;
        let base = pos.checked_sub(read).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::Other,
                "stream position is before the start of the input",
            )
        })?;
        self.base = Some(base);
        Ok(base)
    }
}
