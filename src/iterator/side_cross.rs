//! Side-cross traversal.
//!
//! The cursor alternates between the low and the high end of the sorted
//! elements: `a[0], a[n-1], a[1], a[n-2], ...`. Two converging indices and a
//! direction flag describe its state. Once the indices cross, the cursor is
//! rewritten to a fixed end sentinel so that every exhausted cursor over the
//! same container has identical state.
//!
//! ```text
//!   n = 5        head ->            <- tail
//!   elements:   [ 1    2    3    4    5 ]
//!   order:        1st  3rd  5th  4th  2nd
//! ```

use std::iter::FusedIterator;

use super::{ContainerIterator, IteratorKind, Progress, ensure_same_container};
use crate::container::MagicalContainer;
use crate::error::ContainerError;

/// A cursor yielding the smallest, the largest, the second smallest, the
/// second largest element and so on.
///
/// Every element is produced exactly once; for odd sizes the middle element
/// comes last.
///
/// # Examples
///
/// ```rust
/// use magical_container::MagicalContainer;
///
/// let container: MagicalContainer = [1, 2, 3, 4, 5].into_iter().collect();
/// let order: Vec<i32> = container.iterate_side_cross().collect();
/// assert_eq!(order, vec![1, 5, 2, 4, 3]);
///
/// let empty = MagicalContainer::new();
/// assert!(empty.iterate_side_cross().is_end());
/// ```
#[derive(Debug, Clone)]
pub struct SideCrossIterator<'a> {
    container: &'a MagicalContainer,
    head_index: usize,
    tail_index: usize,
    is_head: bool,
}

impl<'a> SideCrossIterator<'a> {
    /// Creates a cursor at the smallest element of `container`.
    ///
    /// For an empty container the cursor starts at the end sentinel.
    #[must_use]
    pub fn new(container: &'a MagicalContainer) -> Self {
        match container.size() {
            0 => Self::end_of(container),
            size => Self {
                container,
                head_index: 0,
                tail_index: size - 1,
                is_head: true,
            },
        }
    }

    /// The canonical exhausted state: `head = ceil(n / 2)`, `tail = head - 1`,
    /// both zero for an empty container.
    fn end_of(container: &'a MagicalContainer) -> Self {
        let head_index = container.size().div_ceil(2);
        Self {
            container,
            head_index,
            tail_index: head_index.saturating_sub(1),
            is_head: true,
        }
    }

    /// Returns a cursor at the first element of the same container.
    #[inline]
    #[must_use]
    pub fn begin(&self) -> Self {
        Self::new(self.container)
    }

    /// Returns the end sentinel of the same container.
    #[inline]
    #[must_use]
    pub fn end(&self) -> Self {
        Self::end_of(self.container)
    }

    /// Returns the index of the low-end cursor.
    #[inline]
    #[must_use]
    pub const fn head_index(&self) -> usize {
        self.head_index
    }

    /// Returns the index of the high-end cursor.
    #[inline]
    #[must_use]
    pub const fn tail_index(&self) -> usize {
        self.tail_index
    }

    /// Returns `true` when the next element comes from the low end.
    #[inline]
    #[must_use]
    pub const fn is_head(&self) -> bool {
        self.is_head
    }

    /// Returns `true` at the end sentinel.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.container.is_empty() || self.tail_index < self.head_index
    }

    /// Returns the number of elements produced so far.
    #[must_use]
    pub const fn produced(&self) -> usize {
        let size = self.container.size();
        if self.is_end() {
            size
        } else {
            self.head_index + (size - 1 - self.tail_index)
        }
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ExhaustedIterator`] at the end sentinel.
    pub fn current(&self) -> Result<i32, ContainerError> {
        if self.is_end() {
            return Err(exhausted());
        }
        let index = if self.is_head {
            self.head_index
        } else {
            self.tail_index
        };
        self.container
            .as_slice()
            .get(index)
            .copied()
            .ok_or_else(exhausted)
    }

    /// Moves to the next element, switching ends.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ExhaustedIterator`] at the end sentinel.
    pub fn advance(&mut self) -> Result<(), ContainerError> {
        if self.is_end() {
            return Err(exhausted());
        }
        self.step();
        Ok(())
    }

    /// Copies the state of `other` into this cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::CrossContainer`] if `other` is bound to a
    /// different container; this cursor is left unchanged.
    pub fn assign(&mut self, other: &Self) -> Result<(), ContainerError> {
        ensure_same_container(self.container, other.container)?;
        self.head_index = other.head_index;
        self.tail_index = other.tail_index;
        self.is_head = other.is_head;
        Ok(())
    }

    // Caller guarantees the cursor is not at the end sentinel.
    fn step(&mut self) {
        if self.is_head {
            self.head_index += 1;
        } else if let Some(tail_index) = self.tail_index.checked_sub(1) {
            self.tail_index = tail_index;
        } else {
            self.normalize();
            return;
        }
        self.is_head = !self.is_head;

        if self.tail_index < self.head_index {
            self.normalize();
        } else {
            tracing::trace!(
                head_index = self.head_index,
                tail_index = self.tail_index,
                is_head = self.is_head,
                "side-cross cursor advanced"
            );
        }
    }

    fn normalize(&mut self) {
        tracing::trace!(
            head_index = self.head_index,
            tail_index = self.tail_index,
            "side-cross cursors crossed, moving to end sentinel"
        );
        *self = Self::end_of(self.container);
    }
}

const fn exhausted() -> ContainerError {
    ContainerError::ExhaustedIterator {
        kind: IteratorKind::SideCross,
    }
}

impl ContainerIterator for SideCrossIterator<'_> {
    #[inline]
    fn container(&self) -> &MagicalContainer {
        self.container
    }

    #[inline]
    fn progress(&self) -> Progress {
        Progress::SideCross {
            produced: self.produced(),
        }
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

impl Iterator for SideCrossIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current().ok()?;
        self.step();
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SideCrossIterator<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.container.size() - self.produced()
    }
}

impl FusedIterator for SideCrossIterator<'_> {}
