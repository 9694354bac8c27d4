//! # magical-container
//!
//! A small in-memory integer container that always keeps its elements in
//! ascending order, with three traversal orders over the same data.
//!
//! ## Overview
//!
//! - **Container**: [`MagicalContainer`] supports sorted insertion, removal of
//!   the first matching element and a size query.
//! - **Iterators**: three cursors borrow the container and compute their
//!   positions lazily:
//!   - [`AscendingIterator`]: `1, 2, 3, 4, 5`
//!   - [`SideCrossIterator`]: `1, 5, 2, 4, 3`
//!   - [`PrimeIterator`]: `2, 3, 5`
//! - **Comparison**: [`ContainerIterator`] compares cursors of the same kind
//!   over the same container and reports a typed [`ContainerError`] otherwise.
//!
//! Cursors borrow the container, so it cannot be mutated while one is alive.
//!
//! ## Feature Flags
//!
//! - `demo`: builds the `magical_demo` binary (pulls in `tracing-subscriber`)
//!
//! ## Example
//!
//! ```rust
//! use magical_container::prelude::*;
//!
//! let mut container = MagicalContainer::new();
//! for value in [17, 2, 25, 9, 3] {
//!     container.insert(value);
//! }
//!
//! assert_eq!(container.iterate_ascending().collect::<Vec<_>>(), vec![2, 3, 9, 17, 25]);
//! assert_eq!(container.iterate_side_cross().collect::<Vec<_>>(), vec![2, 25, 3, 17, 9]);
//! assert_eq!(container.iterate_primes().collect::<Vec<_>>(), vec![2, 3, 17]);
//!
//! container.remove(9)?;
//! assert_eq!(container.size(), 4);
//! assert!(container.remove(9).is_err());
//! # Ok::<(), ContainerError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, the cursors, the comparison contract and the
/// error type.
///
/// # Usage
///
/// ```rust
/// use magical_container::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::MagicalContainer;
    pub use crate::error::ContainerError;
    pub use crate::iterator::{
        AscendingIterator, ContainerIterator, IteratorKind, PrimeIterator, Progress,
        SideCrossIterator,
    };
}

pub mod container;
pub mod error;
pub mod iterator;

pub use container::MagicalContainer;
pub use error::ContainerError;
pub use iterator::{
    AscendingIterator, ContainerIterator, IteratorKind, PrimeIterator, Progress,
    SideCrossIterator, is_prime,
};
