//! Cursors over a [`MagicalContainer`] and their shared comparison contract.
//!
//! Three cursor kinds are provided:
//!
//! - [`AscendingIterator`]: elements in ascending order
//! - [`SideCrossIterator`]: smallest, largest, 2nd smallest, 2nd largest, ...
//! - [`PrimeIterator`]: the prime elements in ascending order
//!
//! Each cursor borrows its container and computes positions lazily against
//! the live backing slice. All of them implement [`Iterator`] as well as
//! [`ContainerIterator`], which carries the fallible comparison operators.
//!
//! # Comparison
//!
//! Two cursors can only be compared when they are of the same kind and bound
//! to the same container. The contract works over `&dyn ContainerIterator`,
//! so the kind check happens at runtime on the tagged [`Progress`] value:
//!
//! ```rust
//! use magical_container::prelude::*;
//!
//! let container: MagicalContainer = [1, 2, 3].into_iter().collect();
//! let ascending = container.iterate_ascending();
//! let side_cross = container.iterate_side_cross();
//!
//! assert_eq!(
//!     ascending.try_eq(&side_cross),
//!     Err(ContainerError::WrongKind {
//!         expected: IteratorKind::Ascending,
//!         found: IteratorKind::SideCross,
//!     })
//! );
//! assert_eq!(ascending.try_lt(&ascending.end()), Ok(true));
//! ```

mod ascending;
mod prime;
mod side_cross;

pub use ascending::AscendingIterator;
pub use prime::{PrimeIterator, is_prime};
pub use side_cross::SideCrossIterator;

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::container::MagicalContainer;
use crate::error::ContainerError;

/// The concrete kind of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IteratorKind {
    /// [`AscendingIterator`].
    Ascending,
    /// [`SideCrossIterator`].
    SideCross,
    /// [`PrimeIterator`].
    Prime,
}

impl fmt::Display for IteratorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ascending => "ascending",
            Self::SideCross => "side-cross",
            Self::Prime => "prime",
        };
        formatter.write_str(name)
    }
}

/// How far a cursor has travelled, tagged with its kind.
///
/// Values of the same kind over the same container are totally ordered; the
/// end sentinel is the greatest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Progress {
    /// Index into the sorted elements.
    Ascending {
        /// Current index, equal to the container size at the end.
        index: usize,
    },
    /// Number of elements already produced.
    SideCross {
        /// Elements produced so far, equal to the container size at the end.
        produced: usize,
    },
    /// Index of the current prime element.
    Prime {
        /// Current index, equal to the container size at the end.
        index: usize,
    },
}

impl Progress {
    /// Returns the cursor kind this value belongs to.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> IteratorKind {
        match self {
            Self::Ascending { .. } => IteratorKind::Ascending,
            Self::SideCross { .. } => IteratorKind::SideCross,
            Self::Prime { .. } => IteratorKind::Prime,
        }
    }
}

/// The contract shared by every cursor over a [`MagicalContainer`].
///
/// Implementors provide the cursor state; the relational operators are
/// provided methods that check kind and container identity before comparing.
/// None of them fall back to `false` on a mismatch.
pub trait ContainerIterator {
    /// Returns the container this cursor is bound to.
    fn container(&self) -> &MagicalContainer;

    /// Returns the tagged position of this cursor.
    fn progress(&self) -> Progress;

    /// Returns `true` if this cursor is at its end sentinel.
    fn is_end(&self) -> bool;

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ExhaustedIterator`] at the end sentinel.
    fn current(&self) -> Result<i32, ContainerError>;

    /// Moves the cursor to the next element of its traversal.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ExhaustedIterator`] at the end sentinel.
    fn advance(&mut self) -> Result<(), ContainerError>;

    /// Returns the kind of this cursor.
    #[inline]
    fn kind(&self) -> IteratorKind {
        self.progress().kind()
    }

    /// Compares two cursors by how far they have travelled.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::WrongKind`] if `other` is a different kind of cursor
    /// - [`ContainerError::CrossContainer`] if `other` is bound to another container
    fn try_cmp(&self, other: &dyn ContainerIterator) -> Result<Ordering, ContainerError> {
        let (left, right) = (self.progress(), other.progress());
        let (left_step, right_step) = match (left, right) {
            (Progress::Ascending { index: left }, Progress::Ascending { index: right })
            | (
                Progress::SideCross { produced: left },
                Progress::SideCross { produced: right },
            )
            | (Progress::Prime { index: left }, Progress::Prime { index: right }) => {
                (left, right)
            }
            _ => {
                return Err(ContainerError::WrongKind {
                    expected: left.kind(),
                    found: right.kind(),
                });
            }
        };
        ensure_same_container(self.container(), other.container())?;
        Ok(left_step.cmp(&right_step))
    }

    /// Returns `true` if both cursors are at the same position.
    ///
    /// # Errors
    ///
    /// Same as [`ContainerIterator::try_cmp`].
    fn try_eq(&self, other: &dyn ContainerIterator) -> Result<bool, ContainerError> {
        self.try_cmp(other).map(Ordering::is_eq)
    }

    /// Returns `true` if the cursors are at different positions.
    ///
    /// # Errors
    ///
    /// Same as [`ContainerIterator::try_cmp`].
    fn try_ne(&self, other: &dyn ContainerIterator) -> Result<bool, ContainerError> {
        self.try_cmp(other).map(Ordering::is_ne)
    }

    /// Returns `true` if this cursor is strictly behind `other`.
    ///
    /// # Errors
    ///
    /// Same as [`ContainerIterator::try_cmp`].
    fn try_lt(&self, other: &dyn ContainerIterator) -> Result<bool, ContainerError> {
        self.try_cmp(other).map(Ordering::is_lt)
    }

    /// Returns `true` if this cursor is strictly ahead of `other`.
    ///
    /// # Errors
    ///
    /// Same as [`ContainerIterator::try_cmp`].
    fn try_gt(&self, other: &dyn ContainerIterator) -> Result<bool, ContainerError> {
        self.try_cmp(other).map(Ordering::is_gt)
    }

    /// Returns `true` if this cursor is not ahead of `other`.
    ///
    /// # Errors
    ///
    /// Same as [`ContainerIterator::try_cmp`].
    fn try_le(&self, other: &dyn ContainerIterator) -> Result<bool, ContainerError> {
        self.try_cmp(other).map(Ordering::is_le)
    }

    /// Returns `true` if this cursor is not behind `other`.
    ///
    /// # Errors
    ///
    /// Same as [`ContainerIterator::try_cmp`].
    fn try_ge(&self, other: &dyn ContainerIterator) -> Result<bool, ContainerError> {
        self.try_cmp(other).map(Ordering::is_ge)
    }
}

/// Fails with [`ContainerError::CrossContainer`] unless both references point
/// at the same container.
#[inline]
pub(crate) fn ensure_same_container(
    left: &MagicalContainer,
    right: &MagicalContainer,
) -> Result<(), ContainerError> {
    if std::ptr::eq(left, right) {
        Ok(())
    } else {
        Err(ContainerError::CrossContainer)
    }
}

static_assertions::assert_obj_safe!(ContainerIterator);
static_assertions::assert_impl_all!(
    AscendingIterator<'static>: Clone, FusedIterator, ExactSizeIterator, ContainerIterator
);
static_assertions::assert_impl_all!(
    SideCrossIterator<'static>: Clone, FusedIterator, ExactSizeIterator, ContainerIterator
);
static_assertions::assert_impl_all!(PrimeIterator<'static>: Clone, FusedIterator, ContainerIterator);
