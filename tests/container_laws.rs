//! Property tests for the container invariants and the traversal orders.

use magical_container::prelude::*;
use magical_container::is_prime;
use proptest::prelude::*;

fn build(values: &[i32]) -> MagicalContainer {
    let mut container = MagicalContainer::new();
    for &value in values {
        container.insert(value);
    }
    container
}

fn sorted(values: &[i32]) -> Vec<i32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

proptest! {
    /// Elements stay non-decreasing after every insert.
    #[test]
    fn prop_insert_keeps_sorted(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut container = MagicalContainer::new();
        for &value in &values {
            container.insert(value);
            prop_assert!(
                container.as_slice().windows(2).all(|pair| pair[0] <= pair[1]),
                "elements must stay sorted after inserting {}",
                value
            );
        }
        prop_assert_eq!(container.size(), values.len());
    }

    /// Removing a present value drops exactly one occurrence.
    #[test]
    fn prop_remove_present_drops_one(
        values in prop::collection::vec(-20i32..20, 1..60),
        pick in any::<prop::sample::Index>()
    ) {
        let mut container = build(&values);
        let target = values[pick.index(values.len())];
        let before = container.as_slice().iter().filter(|&&value| value == target).count();

        prop_assert_eq!(container.remove(target), Ok(()));
        let after = container.as_slice().iter().filter(|&&value| value == target).count();
        prop_assert_eq!(after + 1, before);
        prop_assert_eq!(container.size() + 1, values.len());
    }

    /// Removing an absent value fails and leaves the container unchanged.
    #[test]
    fn prop_remove_absent_is_not_found(
        values in prop::collection::vec(0i32..100, 0..60),
        missing in 100i32..200
    ) {
        let mut container = build(&values);
        let before = container.clone();
        prop_assert_eq!(container.remove(missing), Err(ContainerError::NotFound { value: missing }));
        prop_assert_eq!(container, before);
    }

    /// Ascending traversal is the sorted input.
    #[test]
    fn prop_ascending_is_sorted_input(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let container = build(&values);
        prop_assert_eq!(container.iterate_ascending().collect::<Vec<_>>(), sorted(&values));
    }

    /// Side-cross traversal alternates ends and produces every element once.
    #[test]
    fn prop_side_cross_alternates_ends(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let container = build(&values);
        let elements = sorted(&values);
        let size = elements.len();
        let expected: Vec<i32> = (0..size)
            .map(|step| if step % 2 == 0 { elements[step / 2] } else { elements[size - 1 - step / 2] })
            .collect();

        let order: Vec<i32> = container.iterate_side_cross().collect();
        prop_assert_eq!(&order, &expected);
        prop_assert_eq!(sorted(&order), elements);
    }

    /// Prime traversal is the ascending traversal filtered by primality.
    #[test]
    fn prop_primes_are_filtered_ascending(values in prop::collection::vec(-50i32..500, 0..100)) {
        let container = build(&values);
        let expected: Vec<i32> = container.iterate_ascending().filter(|&value| is_prime(value)).collect();
        prop_assert_eq!(container.iterate_primes().collect::<Vec<_>>(), expected);
    }

    /// Any cursor driven to its end compares equal to the end sentinel.
    #[test]
    fn prop_driven_cursor_equals_end(values in prop::collection::vec(-50i32..500, 0..40)) {
        let container = build(&values);
        let mut cursors: [Box<dyn ContainerIterator + '_>; 3] = [
            Box::new(container.iterate_ascending()),
            Box::new(container.iterate_side_cross()),
            Box::new(container.iterate_primes()),
        ];
        let ends: [Box<dyn ContainerIterator + '_>; 3] = [
            Box::new(container.iterate_ascending().end()),
            Box::new(container.iterate_side_cross().end()),
            Box::new(container.iterate_primes().end()),
        ];
        for (cursor, end) in cursors.iter_mut().zip(ends.iter()) {
            while cursor.advance().is_ok() {}
            prop_assert_eq!(cursor.try_eq(&**end), Ok(true));
            prop_assert!(cursor.is_end());
        }
    }
}
