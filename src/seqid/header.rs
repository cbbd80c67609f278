use lazy_static::lazy_static;
use memchr::memchr;
use regex::Regex;

use super::{comment_or_default, record_comment, Error, ErrorKind, Result, SeqId, Strand};
use crate::fasta::{Record, MAX_NAME_LEN};

lazy_static! {
    // name @ strand frame @ length
    static ref HEADER_RE: Regex = Regex::new(r"^([^@]+)@(.)(\d)@(-?\d+)$").unwrap();
}

/// Decodes the `name@SF@L` identifier stored as record name.
///
/// The comment is copied from the record. Strand, frame and length are
/// validated in this order.
///
/// # Errors
///
/// * `Parse` if the name does not have the form `name@SF@L`,
/// * `Strand` if `S` is not `D` or `R`,
/// * `Frame` if `F` is not 1, 2 or 3,
/// * `Length` if `L` is not greater than 0.
///
/// If a best-effort identifier is needed in case of an error, use
/// [`SeqId::from_record`](SeqId::from_record) or
/// [`decode_header_safe`](decode_header_safe).
pub fn decode_header(record: &Record) -> Result<SeqId> {
    let parse_err = || Error::new(ErrorKind::Parse(record.name().to_string()));
    let caps = HEADER_RE.captures(record.name()).ok_or_else(parse_err)?;

    let strand_char = caps[2].chars().next().ok_or_else(parse_err)?;
    let strand = Strand::from_char(strand_char)
        .ok_or_else(|| Error::new(ErrorKind::Strand(strand_char)))?;

    let frame = caps[3].parse::<u8>().map_err(|_| parse_err())?;
    if !(1..=3).contains(&frame) {
        return Err(Error::new(ErrorKind::Frame(frame)));
    }
    // may overflow
    let length: i64 = caps[4].parse().map_err(|_| parse_err())?;
    if length <= 0 {
        return Err(Error::new(ErrorKind::Length(length)));
    }

    Ok(SeqId {
        name: caps[1].to_string(),
        strand,
        frame,
        length: length as u64,
        comment: record_comment(record),
    })
}

/// Like [`decode_header`](decode_header), but never fails. If decoding
/// fails, the identifier gets the name of the record (up to the first `@`
/// if there is one), `Strand::Direct`, frame 1, and the sequence length of
/// the record as length.
pub fn decode_header_safe(record: &Record) -> SeqId {
    match decode_header(record) {
        Ok(id) => id,
        Err(e) => {
            log::debug!("using default SeqId for '{}': {}", record.name(), e);
            let name = record.name();
            let name = match memchr(b'@', name.as_bytes()) {
                Some(pos) if pos > 0 => &name[..pos],
                _ => name,
            };
            SeqId {
                name: name.to_string(),
                strand: Strand::Direct,
                frame: 1,
                length: record.len() as u64,
                comment: record_comment(record),
            }
        }
    }
}

/// Stores `id` as `name@SF@L` in the name of `record`, and copies the
/// comment (`NO_COMMENT` if empty). The sequence and offset of the record
/// are not changed.
///
/// # Errors
///
/// The record stays unchanged if an error occurs.
///
/// * `Parse` if the name is empty, contains `@` or whitespace, or if the
///   encoded name would be longer than
///   [`MAX_NAME_LEN`](crate::fasta::MAX_NAME_LEN),
/// * `Strand` if the strand is `Unknown`,
/// * `Frame` if the frame is not 1, 2 or 3,
/// * `Length` if the length is 0.
pub fn encode_header(id: &SeqId, record: &mut Record) -> Result<()> {
    let invalid_name = id.name.is_empty()
        || id.name.bytes().any(|b| b == b'@' || b.is_ascii_whitespace());
    if invalid_name {
        return Err(Error::new(ErrorKind::Parse(id.name.clone())));
    }
    if id.strand == Strand::Unknown {
        return Err(Error::new(ErrorKind::Strand(id.strand.as_char())));
    }
    if !(1..=3).contains(&id.frame) {
        return Err(Error::new(ErrorKind::Frame(id.frame)));
    }
    if id.length == 0 {
        return Err(Error::new(ErrorKind::Length(0)));
    }
    let encoded = format!("{}@{}{}@{}", id.name, id.strand, id.frame, id.length);
    if encoded.len() > MAX_NAME_LEN {
        return Err(Error::new(ErrorKind::Parse(encoded)));
    }
    record.set_name(&encoded);
    record.set_comment(comment_or_default(&id.comment));
    Ok(())
}
