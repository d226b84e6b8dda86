//! Cyclic selection

/// An index into a fixed-size table that cycles forward and backward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CyclicIndex {
    index: usize,
    len: usize,
}

impl CyclicIndex {
    /// Creates a new cyclic index. The length is clamped to at least 1 and
    /// the index wraps around.
    ///
    /// * `index` - The starting index.
    /// * `len`   - Size of the table.
    pub fn new(index: usize, len: usize) -> Self {
        let len = len.max(1);
        Self {
            index: index % len,
            len,
        }
    }

    /// Returns the current index.
    pub fn get(&self) -> usize {
        self.index
    }

    /// Returns the size of the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Advances to the next index.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Steps back to the previous index.
    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wraps_forward_and_backward() {
        let mut s = CyclicIndex::new(0, 3);
        assert_eq!(s.prev(), 2);
        assert_eq!(s.next(), 0);
        assert_eq!(s.next(), 1);
        assert_eq!(s.next(), 2);
        assert_eq!(s.next(), 0);
    }

    #[test]
    fn empty_table_is_clamped() {
        let mut s = CyclicIndex::new(5, 0);
        assert_eq!(s.len(), 1);
        assert_eq!(s.get(), 0);
        assert_eq!(s.next(), 0);
        assert_eq!(s.prev(), 0);
    }

    proptest! {
        #[test]
        fn next_then_prev_is_identity(index in 0..100usize, len in 1..20usize) {
            let mut s = CyclicIndex::new(index, len);
            let start = s.get();
            prop_assert!(start < len);
            s.next();
            prop_assert_eq!(s.prev(), start);
        }
    }
}
