//! Search frames for the depth-first assignment search.

use gemforge_core::Efficiency;

/// One level of the explicit search stack.
///
/// A frame at depth `d` chooses the candidate for the `d`-th slot in search
/// order; `committed` is the score of slots `0..d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchFrame {
    depth: usize,
    next_candidate: usize,
    committed: Efficiency,
}

impl SearchFrame {
    pub(crate) fn root() -> Self {
        Self::child(0, Efficiency::ZERO)
    }

    pub(crate) fn child(depth: usize, committed: Efficiency) -> Self {
        Self {
            depth,
            next_candidate: 0,
            committed,
        }
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub(crate) fn committed(&self) -> Efficiency {
        self.committed
    }

    /// Advances past candidates rejected by `conflicts` and returns the index
    /// of the next acceptable one, if any.
    pub(crate) fn next_candidate<F>(&mut self, len: usize, mut conflicts: F) -> Option<usize>
    where
        F: FnMut(usize) -> bool,
    {
        while self.next_candidate < len {
            let index = self.next_candidate;
            self.next_candidate += 1;
            if !conflicts(index) {
                return Some(index);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_candidate_skips_conflicts() {
        let mut frame = SearchFrame::root();
        assert_eq!(frame.next_candidate(4, |i| i % 2 == 0), Some(1));
        assert_eq!(frame.next_candidate(4, |i| i % 2 == 0), Some(3));
        assert_eq!(frame.next_candidate(4, |i| i % 2 == 0), None);
        assert_eq!(frame.next_candidate(4, |_| false), None);
    }

    #[test]
    fn test_child_frame() {
        let frame = SearchFrame::child(2, Efficiency::of(4.5));
        assert_eq!(frame.depth(), 2);
        assert_eq!(frame.committed(), Efficiency::of(4.5));
    }
}
