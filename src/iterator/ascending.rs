//! Ascending traversal.

use std::iter::FusedIterator;

use super::{ContainerIterator, IteratorKind, Progress, ensure_same_container};
use crate::container::MagicalContainer;
use crate::error::ContainerError;

/// A cursor over the elements of a [`MagicalContainer`] in ascending order.
///
/// The cursor holds an index into the sorted elements; the end sentinel is
/// the index equal to the container size.
///
/// # Examples
///
/// ```rust
/// use magical_container::{ContainerError, MagicalContainer};
///
/// let container: MagicalContainer = [3, 1, 2].into_iter().collect();
/// let mut cursor = container.iterate_ascending();
///
/// assert_eq!(cursor.current(), Ok(1));
/// cursor.advance()?;
/// cursor.advance()?;
/// assert_eq!(cursor.current(), Ok(3));
/// cursor.advance()?;
/// assert!(cursor.is_end());
/// assert!(cursor.advance().is_err());
/// # Ok::<(), ContainerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AscendingIterator<'a> {
    container: &'a MagicalContainer,
    index: usize,
}

impl<'a> AscendingIterator<'a> {
    /// Creates a cursor at the smallest element of `container`.
    #[inline]
    #[must_use]
    pub const fn new(container: &'a MagicalContainer) -> Self {
        Self {
            container,
            index: 0,
        }
    }

    /// Returns a cursor at the first element of the same container.
    #[inline]
    #[must_use]
    pub const fn begin(&self) -> Self {
        Self::new(self.container)
    }

    /// Returns the end sentinel of the same container.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Self {
        Self {
            container: self.container,
            index: self.container.size(),
        }
    }

    /// Returns the current index into the sorted elements.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` at the end sentinel.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.index >= self.container.size()
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ExhaustedIterator`] at the end sentinel.
    pub fn current(&self) -> Result<i32, ContainerError> {
        self.container
            .as_slice()
            .get(self.index)
            .copied()
            .ok_or(ContainerError::ExhaustedIterator {
                kind: IteratorKind::Ascending,
            })
    }

    /// Moves to the next larger (or equal) element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ExhaustedIterator`] at the end sentinel.
    pub fn advance(&mut self) -> Result<(), ContainerError> {
        if self.is_end() {
            return Err(ContainerError::ExhaustedIterator {
                kind: IteratorKind::Ascending,
            });
        }
        self.index += 1;
        tracing::trace!(index = self.index, "ascending cursor advanced");
        Ok(())
    }

    /// Copies the position of `other` into this cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::CrossContainer`] if `other` is bound to a
    /// different container; this cursor is left unchanged.
    pub fn assign(&mut self, other: &Self) -> Result<(), ContainerError> {
        ensure_same_container(self.container, other.container)?;
        self.index = other.index;
        Ok(())
    }

    #[inline]
    const fn remaining(&self) -> usize {
        self.container.size().saturating_sub(self.index)
    }
}

impl ContainerIterator for AscendingIterator<'_> {
    #[inline]
    fn container(&self) -> &MagicalContainer {
        self.container
    }

    #[inline]
    fn progress(&self) -> Progress {
        Progress::Ascending { index: self.index }
    }

    #[inline]
    fn is_end(&self) -> bool {
        Self::is_end(self)
    }

    #[inline]
    fn current(&self) -> Result<i32, ContainerError> {
        Self::current(self)
    }

    #[inline]
    fn advance(&mut self) -> Result<(), ContainerError> {
        Self::advance(self)
    }
}

impl Iterator for AscendingIterator<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current().ok()?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AscendingIterator<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl FusedIterator for AscendingIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_empty_begin_equals_end() {
        let container = MagicalContainer::new();
        let cursor = container.iterate_ascending();
        assert!(cursor.is_end());
        assert_eq!(cursor.try_eq(&cursor.end()), Ok(true));
        assert_eq!(
            cursor.current(),
            Err(ContainerError::ExhaustedIterator {
                kind: IteratorKind::Ascending
            })
        );
    }

    #[rstest]
    fn test_manual_walk_matches_iterator() {
        let container: MagicalContainer = [8, -2, 5, 5].into_iter().collect();
        let mut cursor = container.iterate_ascending();
        let mut walked = Vec::new();
        while !cursor.is_end() {
            walked.push(cursor.current().unwrap());
            cursor.advance().unwrap();
        }
        assert_eq!(walked, container.iterate_ascending().collect::<Vec<_>>());
        assert_eq!(walked, vec![-2, 5, 5, 8]);
    }

    #[rstest]
    fn test_advance_at_end_fails() {
        let container: MagicalContainer = [1].into_iter().collect();
        let mut cursor = container.iterate_ascending().end();
        assert_eq!(
            cursor.advance(),
            Err(ContainerError::ExhaustedIterator {
                kind: IteratorKind::Ascending
            })
        );
        assert_eq!(cursor.index(), 1);
    }

    #[rstest]
    fn test_exact_size() {
        let container: MagicalContainer = [1, 2, 3].into_iter().collect();
        let mut cursor = container.iterate_ascending();
        assert_eq!(cursor.len(), 3);
        cursor.next();
        assert_eq!(cursor.len(), 2);
    }

    #[rstest]
    fn test_assign_same_container() {
        let container: MagicalContainer = [1, 2, 3].into_iter().collect();
        let mut cursor = container.iterate_ascending();
        let end = cursor.end();
        cursor.assign(&end).unwrap();
        assert!(cursor.is_end());
    }

    #[rstest]
    fn test_assign_cross_container_fails() {
        let left: MagicalContainer = [1, 2].into_iter().collect();
        let right: MagicalContainer = [1, 2].into_iter().collect();
        let mut cursor = left.iterate_ascending();
        let mut other = right.iterate_ascending();
        other.advance().unwrap();
        assert_eq!(cursor.assign(&other), Err(ContainerError::CrossContainer));
        assert_eq!(cursor.index(), 0);
    }
}
