//! Growth policies for the record payload buffer.
//!
//! Every time a sequence line is appended to a record, the payload buffer
//! is asked to hold `needed` bytes. If it is too small, the policy decides
//! the new capacity. Returning `None` refuses the growth, which the readers
//! treat exactly like a failed allocation: in serial mode, the record is
//! returned as [`Outcome::Incomplete`](crate::fasta::Outcome), in indexed
//! mode [`ErrorKind::BufferLimit`](crate::fasta::ErrorKind) is returned.
//!
//! # Example
//!
//! ```no_run
//! use seqid_io::policy::BufPolicy;
//! use seqid_io::fasta::{Reader, Record};
//! use std::io::stdin;
//!
//! struct Max1G;
//!
//! // This policy doubles the requested size, but refuses
//! // sequences above 1 GiB. Note that this is similar to how
//! // `Limited` works.
//! impl BufPolicy for Max1G {
//!     fn grow_to(&mut self, needed: usize) -> Option<usize> {
//!         if needed > 1 << 30 {
//!             return None
//!         }
//!         Some(needed * 2 + 1)
//!     }
//! }
//!
//! let mut reader = Reader::new(stdin()).set_policy(Max1G);
//! let mut record = Record::new();
//!
//! while let Some(_) = reader.read_serial(&mut record).unwrap() {
//!     println!("{}", record.name());
//! }
//! ```
pub trait BufPolicy {
    /// Returns the new capacity for a buffer that has to hold `needed`
    /// bytes. The returned size must be greater than `needed`.
    fn grow_to(&mut self, needed: usize) -> Option<usize>;

    /// Maximum number of bytes a buffer may hold, regardless of its current
    /// capacity. `None` means no limit.
    fn max_size(&self) -> Option<usize> {
        None
    }
}

impl<'a, P: BufPolicy + ?Sized> BufPolicy for &'a mut P {
    fn grow_to(&mut self, needed: usize) -> Option<usize> {
        (**self).grow_to(needed)
    }

    fn max_size(&self) -> Option<usize> {
        (**self).max_size()
    }
}

/// Standard policy: the buffer grows to `2 * needed + 1` bytes, which
/// keeps appending amortized O(1) and always leaves room for a terminator
/// byte. Size is not limited.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdPolicy;

impl BufPolicy for StdPolicy {
    #[inline]
    fn grow_to(&mut self, needed: usize) -> Option<usize> {
        needed.checked_mul(2).and_then(|n| n.checked_add(1))
    }
}

/// Grows like [`StdPolicy`](StdPolicy), but refuses to hold more than
/// the given number of bytes, even if they would fit into the existing
/// allocation. The capacity is clamped to `limit + 1`.
#[derive(Debug, Clone, Copy)]
pub struct Limited(pub usize);

impl BufPolicy for Limited {
    #[inline]
    fn grow_to(&mut self, needed: usize) -> Option<usize> {
        if needed > self.0 {
            return None;
        }
        let clamp = self.0.saturating_add(1);
        Some(StdPolicy.grow_to(needed).map_or(clamp, |n| n.min(clamp)))
    }

    #[inline]
    fn max_size(&self) -> Option<usize> {
        Some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_policy() {
        assert_eq!(StdPolicy.grow_to(0), Some(1));
        assert_eq!(StdPolicy.grow_to(10), Some(21));
        assert_eq!(StdPolicy.grow_to(usize::MAX), None);
    }

    #[test]
    fn limited() {
        let mut p = Limited(100);
        assert_eq!(p.grow_to(10), Some(21));
        assert_eq!(p.grow_to(60), Some(101));
        assert_eq!(p.grow_to(100), Some(101));
        assert_eq!(p.grow_to(101), None);
        assert_eq!(p.max_size(), Some(100));
        assert_eq!(StdPolicy.max_size(), None);
    }
}
