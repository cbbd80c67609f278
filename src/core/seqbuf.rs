use crate::policy::BufPolicy;
use serde_derive::{Deserialize, Serialize};

/// Default initial capacity of a record payload in bytes.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Growable byte buffer holding the sequence of a record.
///
/// The buffer is reused between records: [`clear`](SeqBuffer::clear) keeps
/// the allocation, and growing never shrinks it. After every successful
/// growth step, the capacity is strictly greater than the requested size,
/// so there is always room for a terminating byte (see
/// [`with_nul`](SeqBuffer::with_nul)).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeqBuffer {
    data: Vec<u8>,
}

impl SeqBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        SeqBuffer {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Makes sure that `needed` bytes fit into the buffer. If `needed`
    /// meets or exceeds the current capacity, the buffer is reallocated to
    /// the size returned by `policy`, preserving its content.
    ///
    /// Returns `false` if `needed` is above the policy's
    /// [`max_size`](BufPolicy::max_size), if the policy refused to grow or
    /// the allocation failed. The buffer is left untouched in that case.
    pub fn ensure_capacity<P: BufPolicy>(&mut self, needed: usize, policy: &mut P) -> bool {
        if policy.max_size().map_or(false, |max| needed > max) {
            return false;
        }
        if needed < self.data.capacity() {
            return true;
        }
        let new_size = match policy.grow_to(needed) {
            Some(s) if s > needed => s,
            _ => return false,
        };
        self.data.try_reserve_exact(new_size - self.data.len()).is_ok()
    }

    /// Appends `bytes`, growing the buffer if necessary. On failure,
    /// nothing is appended and `false` is returned.
    #[inline]
    pub fn extend<P: BufPolicy>(&mut self, bytes: &[u8], policy: &mut P) -> bool {
        let needed = match self.data.len().checked_add(bytes.len()) {
            Some(n) => n,
            None => return false,
        };
        if !self.ensure_capacity(needed, policy) {
            return false;
        }
        self.data.extend_from_slice(bytes);
        true
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Returns a copy of the content followed by a null byte, for
    /// consumers expecting terminated text.
    pub fn with_nul(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() + 1);
        out.extend_from_slice(&self.data);
        out.push(0);
        out
    }
}

impl PartialEq for SeqBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for SeqBuffer {}

impl AsRef<[u8]> for SeqBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
