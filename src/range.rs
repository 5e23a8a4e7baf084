use std::fmt;
use std::ops::RangeInclusive;

/// An inclusive interval `[first, last]` of positions into a sequence.
///
/// The range is empty when `first > last`. The canonical empty range is
/// `[0, -1]`, which is also what `Range::default()` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub first: isize,
    pub last: isize,
}

impl Default for Range {
    fn default() -> Self {
        Range { first: 0, last: -1 }
    }
}

impl Range {
    pub fn new(first: isize, last: isize) -> Self {
        Range { first, last }
    }

    /// Range covering every position of `seq`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linediff::Range;
    ///
    /// assert_eq!(Range::create(&["a", "b", "c"]), Range::new(0, 2));
    /// assert!(Range::create::<&str>(&[]).is_empty());
    /// ```
    pub fn create<T>(seq: &[T]) -> Self {
        Range::new(0, seq.len() as isize - 1)
    }

    /// Signed size; zero or negative for empty ranges.
    pub fn size(&self) -> isize {
        self.last - self.first + 1
    }

    pub fn len(&self) -> usize {
        self.size().max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    /// Either non-empty or exactly one past the end, never more degenerate.
    pub fn is_valid(&self) -> bool {
        self.first <= self.last + 1
    }

    pub fn skip_first(&mut self) {
        if self.first <= self.last {
            self.first += 1;
        }
    }

    pub fn skip_last(&mut self) {
        if self.first <= self.last {
            self.last -= 1;
        }
    }

    pub fn covers(&self, x: isize) -> bool {
        x >= self.first && x <= self.last
    }

    pub fn iter(&self) -> RangeInclusive<isize> {
        self.first..=self.last
    }

    /// The positions as `usize` bounds, for slicing. `None` when empty.
    pub(crate) fn indices(&self) -> Option<RangeInclusive<usize>> {
        if self.is_empty() || self.first < 0 {
            None
        } else {
            Some(self.first as usize..=self.last as usize)
        }
    }
}

impl IntoIterator for Range {
    type Item = isize;
    type IntoIter = RangeInclusive<isize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Range> for RangeInclusive<isize> {
    fn from(range: Range) -> Self {
        range.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}..{})", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_skip_never_inverts(first in -5isize..5, last in -6isize..5, skips in 0usize..20) {
            prop_assume!(first <= last + 1);
            let mut range = Range::new(first, last);
            for i in 0..skips {
                if i % 2 == 0 { range.skip_first() } else { range.skip_last() }
                prop_assert!(range.is_valid());
            }
        }

        #[test]
        fn test_iteration_matches_size(first in -5isize..5, last in -6isize..5) {
            let range = Range::new(first, last);
            prop_assert_eq!(range.iter().count(), range.len());
            prop_assert!(range.iter().all(|x| range.covers(x)));
        }
    }

    #[test]
    fn test_default_is_empty() {
        let range = Range::default();
        assert_eq!(range.first, 0);
        assert_eq!(range.last, -1);
        assert_eq!(range.size(), 0);
        assert!(range.is_empty());
        assert!(range.is_valid());
    }

    #[test]
    fn test_single_element() {
        let range = Range::new(0, 0);
        assert_eq!(range.size(), 1);
        assert!(!range.is_empty());
        assert!(range.is_valid());
    }

    #[test]
    fn test_create_from_slice() {
        let range = Range::create(&["aaa", "bbb", "ccc", "ddd"]);
        assert_eq!(range, Range::new(0, 3));
        assert_eq!(range.len(), 4);
        assert_eq!(Range::create::<String>(&[]), Range::new(0, -1));
    }

    #[test]
    fn test_invalid() {
        let range = Range::new(3, 0);
        assert!(range.is_empty());
        assert!(!range.is_valid());
        assert_eq!(range.size(), -2);
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn test_skip_first_and_last() {
        let mut range = Range::new(0, 3);
        range.skip_first();
        assert_eq!(range, Range::new(1, 3));
        range.skip_last();
        assert_eq!(range, Range::new(1, 2));
        range.skip_first();
        range.skip_first();
        assert_eq!(range, Range::new(3, 2));
        range.skip_first();
        range.skip_last();
        assert_eq!(range, Range::new(3, 2));
    }

    #[test]
    fn test_covers() {
        let range = Range::new(2, 4);
        assert!(!range.covers(1));
        assert!(range.covers(2));
        assert!(range.covers(4));
        assert!(!range.covers(5));
        assert!(!Range::default().covers(0));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let range = Range::new(1, 3);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(range.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(Range::default().iter().count(), 0);
    }

    #[test]
    fn test_into_std_range() {
        let range: RangeInclusive<isize> = Range::new(2, 4).into();
        assert_eq!(range, 2..=4);
        assert_eq!(RangeInclusive::from(Range::default()).count(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Range::new(1, 3).to_string(), "(1..3)");
        assert_eq!(Range::default().to_string(), "(0..-1)");
    }

    #[test]
    fn test_indices() {
        assert_eq!(Range::new(1, 3).indices(), Some(1..=3));
        assert_eq!(Range::new(3, 2).indices(), None);
    }
}
