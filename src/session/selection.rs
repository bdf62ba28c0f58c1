//! The cards currently turned face-up awaiting evaluation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered set of at most two card indices.
///
/// Never holds duplicates; callers also keep matched cards out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection(SmallVec<[usize; 2]>);

impl Selection {
    /// Maximum number of face-up, unevaluated cards.
    pub const CAPACITY: usize = 2;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.len() >= Self::CAPACITY
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Add an index. Returns `false` (and changes nothing) if the selection
    /// is full or already holds `index`.
    pub fn push(&mut self, index: usize) -> bool {
        if self.is_full() || self.contains(index) {
            return false;
        }
        self.0.push(index);
        true
    }

    /// Both selected indices, in selection order, if the selection is full.
    #[must_use]
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.0.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut sel = Selection::new();
        assert!(sel.push(4));
        assert!(!sel.is_full());
        assert_eq!(sel.pair(), None);

        assert!(sel.push(1));
        assert!(sel.is_full());
        assert_eq!(sel.pair(), Some((4, 1)));

        assert!(!sel.push(7));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_rejects_duplicate() {
        let mut sel = Selection::new();
        assert!(sel.push(3));
        assert!(!sel.push(3));
        assert_eq!(sel.as_slice(), &[3]);
    }

    #[test]
    fn test_clear() {
        let mut sel = Selection::new();
        sel.push(0);
        sel.push(1);
        sel.clear();
        assert!(sel.is_empty());
        assert!(!sel.contains(0));
    }
}
