//! Core types shared by the readers: the line source with its single line
//! of lookahead, and the growable payload buffer.
mod lines;
mod seqbuf;

pub use self::lines::*;
pub use self::seqbuf::*;

/// Remove line ends ('\r\n' or '\n' or '\r') from a byte slice
#[inline]
pub(crate) fn trim_end(line: &[u8]) -> &[u8] {
    if let Some((&byte, remaining)) = line.split_last() {
        match byte {
            b'\n' => return trim_cr(remaining),
            b'\r' => return remaining,
            _ => {}
        }
    }
    line
}

/// Remove a final '\r' from a byte slice
#[inline]
pub(crate) fn trim_cr(line: &[u8]) -> &[u8] {
    if let Some((&b'\r', remaining)) = line.split_last() {
        remaining
    } else {
        line
    }
}

/// Truncates `s` to at most `max` bytes at a character boundary.
/// Returns `true` if something was cut off.
pub(crate) fn truncate_str(s: &mut String, max: usize) -> bool {
    if s.len() <= max {
        return false;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim() {
        assert_eq!(trim_end(b"ab\r\n"), b"ab");
        assert_eq!(trim_end(b"ab\n"), b"ab");
        assert_eq!(trim_end(b"ab"), b"ab");
        assert_eq!(trim_cr(b"\r"), b"");
    }

    #[test]
    fn truncate() {
        let mut s = "abcdef".to_string();
        assert!(truncate_str(&mut s, 4));
        assert_eq!(s, "abcd");
        assert!(!truncate_str(&mut s, 4));
        let mut s = "aé".to_string();
        assert!(truncate_str(&mut s, 2));
        assert_eq!(s, "a");
    }
}
