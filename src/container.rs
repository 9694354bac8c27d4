//! The sorted integer container.
//!
//! [`MagicalContainer`] owns a `Vec<i32>` that is kept in non-decreasing
//! order after every public operation. Traversals are exposed through the
//! three cursor types in [`crate::iterator`], each of which borrows the
//! container for its whole lifetime.
//!
//! # Time Complexity
//!
//! | Operation            | Complexity |
//! |----------------------|------------|
//! | `insert`             | O(n)       |
//! | `remove`             | O(n)       |
//! | `contains`           | O(log n)   |
//! | `size` / `is_empty`  | O(1)       |
//! | `iterate_*`          | O(1) (`iterate_primes` may scan) |

use crate::error::ContainerError;
use crate::iterator::{AscendingIterator, PrimeIterator, SideCrossIterator};

/// An in-memory container of integers kept in ascending order.
///
/// Duplicates are allowed. Iterators borrow the container immutably, so
/// the borrow checker rejects any mutation while one is alive.
///
/// Container identity (used by iterator comparison) is the address of the
/// container; a clone is a different container.
///
/// # Examples
///
/// ```rust
/// use magical_container::MagicalContainer;
///
/// let mut container = MagicalContainer::new();
/// container.insert(3);
/// container.insert(1);
/// container.insert(2);
///
/// assert_eq!(container.as_slice(), &[1, 2, 3]);
/// assert_eq!(container.iterate_side_cross().collect::<Vec<_>>(), vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MagicalContainer {
    elements: Vec<i32>,
}

impl MagicalContainer {
    /// Creates a new empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magical_container::MagicalContainer;
    ///
    /// let container = MagicalContainer::new();
    /// assert!(container.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Inserts `value` at the first position that keeps the elements sorted.
    ///
    /// The value is placed before the first element that is greater than or
    /// equal to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magical_container::MagicalContainer;
    ///
    /// let mut container = MagicalContainer::new();
    /// container.insert(5);
    /// container.insert(-1);
    /// container.insert(5);
    /// assert_eq!(container.as_slice(), &[-1, 5, 5]);
    /// ```
    pub fn insert(&mut self, value: i32) {
        let position = self.elements.partition_point(|&element| element < value);
        self.elements.insert(position, value);
        tracing::debug!(value, position, size = self.elements.len(), "inserted element");
    }

    /// Removes the first occurrence of `value`.
    ///
    /// Only one occurrence is removed even when duplicates exist.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::NotFound`] if no element equals `value`;
    /// the container is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magical_container::{ContainerError, MagicalContainer};
    ///
    /// let mut container: MagicalContainer = [4, 4, 9].into_iter().collect();
    /// assert_eq!(container.remove(4), Ok(()));
    /// assert_eq!(container.as_slice(), &[4, 9]);
    /// assert_eq!(container.remove(1), Err(ContainerError::NotFound { value: 1 }));
    /// ```
    pub fn remove(&mut self, value: i32) -> Result<(), ContainerError> {
        let Some(position) = self.elements.iter().position(|&element| element == value) else {
            tracing::debug!(value, "remove failed: value not found");
            return Err(ContainerError::NotFound { value });
        };
        self.elements.remove(position);
        tracing::debug!(value, position, size = self.elements.len(), "removed element");
        Ok(())
    }

    /// Returns the number of elements in the container.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if at least one element equals `value`.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.elements.binary_search(&value).is_ok()
    }

    /// Returns the elements as a sorted slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }

    /// Returns a cursor over the elements in ascending order.
    #[inline]
    #[must_use]
    pub const fn iterate_ascending(&self) -> AscendingIterator<'_> {
        AscendingIterator::new(self)
    }

    /// Returns a cursor alternating between the smallest and the largest
    /// remaining elements.
    #[inline]
    #[must_use]
    pub fn iterate_side_cross(&self) -> SideCrossIterator<'_> {
        SideCrossIterator::new(self)
    }

    /// Returns a cursor over the prime elements in ascending order.
    #[inline]
    #[must_use]
    pub fn iterate_primes(&self) -> PrimeIterator<'_> {
        PrimeIterator::new(self)
    }
}

impl FromIterator<i32> for MagicalContainer {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut elements: Vec<i32> = iter.into_iter().collect();
        elements.sort_unstable();
        Self { elements }
    }
}

impl Extend<i32> for MagicalContainer {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> IntoIterator for &'a MagicalContainer {
    type Item = i32;
    type IntoIter = AscendingIterator<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iterate_ascending()
    }
}

static_assertions::assert_impl_all!(MagicalContainer: Default, Clone, std::fmt::Debug);
