//! Prime-filtered traversal.

use std::iter::FusedIterator;

use super::{ContainerIterator, IteratorKind, Progress, ensure_same_container};
use crate::container::MagicalContainer;
use crate::error::ContainerError;

/// Returns `true` if `value` is a prime number.
///
/// Uses trial division by odd divisors up to `floor(sqrt(value))`, so a test
/// costs O(sqrt(value)). Values less than or equal to 1 are never prime.
///
/// # Examples
///
/// ```rust
/// use magical_container::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// assert!(!is_prime(91));
/// ```
#[must_use]
pub fn is_prime(value: i32) -> bool {
    if value <= 1 {
        return false;
    }
    if value <= 3 {
        return true;
    }
    if value % 2 == 0 {
        return false;
    }
    // i64 keeps `divisor * divisor` from overflowing near i32::MAX.
    let value = i64::from(value);
    let mut divisor: i64 = 3;
    while divisor * divisor <= value {
        if value % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// A cursor over the prime elements of a [`MagicalContainer`] in ascending
/// order.
///
/// The cursor only ever rests on an index holding a prime value, or on the
/// end sentinel (index equal to the container size).
///
/// # Examples
///
/// ```rust
/// use magical_container::MagicalContainer;
///
/// let container: MagicalContainer = (1..=7).collect();
/// let primes: Vec<i32> = container.iterate_primes().collect();
/// assert_eq!(primes, vec![2, 3, 5, 7]);
///
/// let composites: MagicalContainer = [1, 4, 6, 8, 9].into_iter().collect();
/// assert!(composites.iterate_primes().is_end());
/// ```
#[derive(Debug, Clone)]
pub struct PrimeIterator<'a> {
    container: &'a MagicalContainer,
    index: usize,
}

impl<'a> PrimeIterator<'a> {
    /// Creates a cursor at the smallest prime element of `container`, or at
    /// the end sentinel if there is none.
    #[must_use]
    pub fn new(container: &'a MagicalContainer) -> Self {
        let mut cursor = Self {
            container,
            index: 0,
        };
        cursor.skip_non_primes();
        cursor
    }

    /// Returns a cursor at the first prime element of the same container.
    #[inline]
    #[must_use]
    pub fn begin(&self) -> Self {
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

    /// Returns the index of the current prime element.
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

    /// Returns the prime element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ExhaustedIterator`] at the end sentinel.
    pub fn current(&self) -> Result<i32, ContainerError> {
        self.container
            .as_slice()
            .get(self.index)
            .copied()
            .ok_or_else(exhausted)
    }

    /// Moves to the next prime element, or to the end sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ExhaustedIterator`] at the end sentinel.
    pub fn advance(&mut self) -> Result<(), ContainerError> {
        if self.is_end() {
            return Err(exhausted());
        }
        self.index += 1;
        self.skip_non_primes();
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

    /// Moves forward until the index holds a prime or reaches the size.
    fn skip_non_primes(&mut self) {
        let skipped = self
            .container
            .as_slice()
            .get(self.index..)
            .map_or(0, |rest| rest.iter().take_while(|&&value| !is_prime(value)).count());
        self.index += skipped;
        tracing::trace!(skipped, index = self.index, "prime cursor positioned");
    }
}

const fn exhausted() -> ContainerError {
    ContainerError::ExhaustedIterator {
        kind: IteratorKind::Prime,
    }
}

impl ContainerIterator for PrimeIterator<'_> {
    #[inline]
    fn container(&self) -> &MagicalContainer {
        self.container
    }

    #[inline]
    fn progress(&self) -> Progress {
        Progress::Prime { index: self.index }
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

impl Iterator for PrimeIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current().ok()?;
        self.index += 1;
        self.skip_non_primes();
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.container.size().saturating_sub(self.index);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for PrimeIterator<'_> {}
