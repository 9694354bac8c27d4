//! Error types for the container and its iterators.
//!
//! Every failure is local and synchronous: the operation that detects the
//! problem returns a [`ContainerError`] and leaves the container untouched.

use thiserror::Error;

use crate::iterator::IteratorKind;

/// Represents errors that can occur when mutating a [`MagicalContainer`]
/// or driving one of its iterators.
///
/// # Examples
///
/// ```rust
/// use magical_container::{ContainerError, MagicalContainer};
///
/// let mut container = MagicalContainer::new();
/// container.insert(7);
///
/// assert_eq!(container.remove(8), Err(ContainerError::NotFound { value: 8 }));
/// assert_eq!(
///     ContainerError::NotFound { value: 8 }.to_string(),
///     "value 8 is not in the container"
/// );
/// ```
///
/// [`MagicalContainer`]: crate::MagicalContainer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// `remove` was called with a value the container does not hold.
    #[error("value {value} is not in the container")]
    NotFound {
        /// The value that was looked up.
        value: i32,
    },

    /// A dereference or advance was attempted at the end sentinel.
    #[error("{kind} iterator is exhausted")]
    ExhaustedIterator {
        /// The kind of iterator that was exhausted.
        kind: IteratorKind,
    },

    /// Two iterators bound to different containers were compared or assigned.
    #[error("iterators are bound to different containers")]
    CrossContainer,

    /// Two iterators of different concrete kinds were compared.
    #[error("cannot compare {expected} iterator with {found} iterator")]
    WrongKind {
        /// The kind of the left-hand iterator.
        expected: IteratorKind,
        /// The kind of the right-hand iterator.
        found: IteratorKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ContainerError::NotFound { value: -3 }, "value -3 is not in the container")]
    #[case(
        ContainerError::ExhaustedIterator { kind: IteratorKind::SideCross },
        "side-cross iterator is exhausted"
    )]
    #[case(
        ContainerError::CrossContainer,
        "iterators are bound to different containers"
    )]
    #[case(
        ContainerError::WrongKind {
            expected: IteratorKind::Ascending,
            found: IteratorKind::Prime,
        },
        "cannot compare ascending iterator with prime iterator"
    )]
    fn test_error_display(#[case] error: ContainerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_error_has_no_source() {
        use std::error::Error;

        let error = ContainerError::CrossContainer;
        assert!(error.source().is_none());
    }
}
