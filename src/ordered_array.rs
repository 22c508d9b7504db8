use std::fmt;

use crate::{error::ArrayError, search::binary_search_by};

/// A fixed-capacity array that keeps its items in non-decreasing order.
///
/// Storage is allocated once by [`OrderedArray::new`] and never grows; an
/// insert into a full array fails with [`ArrayError::Overflow`].
#[derive(Clone)]
pub struct OrderedArray<T> {
    // `slots[..len]` are all `Some` and sorted, `slots[len..]` are all `None`
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> OrderedArray<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            len: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.occupied()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(ArrayError::OutOfRange {
                index,
                len: self.len,
            })
    }

    /// Items in ascending order. Every call starts over from the first item.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.occupied().iter().flatten()
    }

    pub fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visitor)
    }

    pub fn clear(&mut self) {
        self.slots[..self.len].iter_mut().for_each(|s| *s = None);
        self.len = 0;
    }

    fn occupied(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }
}

impl<T: Ord> OrderedArray<T> {
    /// Index of `item`, or the index it would have to be inserted at to keep
    /// the array sorted.
    ///
    /// With duplicates this is whichever equal item the binary search probes
    /// first, not necessarily the leftmost.
    pub fn find(&self, item: &T) -> usize {
        binary_search_by(self.occupied(), |slot| slot.as_ref().cmp(&Some(item)))
            .unwrap_or_else(|insertion_point| insertion_point)
    }

    pub fn search(&self, item: &T) -> Option<&T> {
        let index = self.find(item);
        self.occupied()
            .get(index)
            .and_then(Option::as_ref)
            .filter(|found| *found == item)
    }

    /// Inserts `item` in order and returns the index it now occupies.
    pub fn insert(&mut self, item: T) -> Result<usize, ArrayError> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "insert into full array");
            return Err(ArrayError::Overflow {
                capacity: self.capacity(),
            });
        }
        let index = self.find(&item);
        self.slots[self.len] = Some(item);
        // shift the bigger items one slot to the right, bringing `item` to `index`
        self.slots[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(index)
    }

    /// Removes one occurrence of `item`, returning whether one was found.
    pub fn delete(&mut self, item: &T) -> bool {
        self.remove(item).is_some()
    }

    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.find(item);
        if self.occupied().get(index)?.as_ref() != Some(item) {
            return None;
        }
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        self.slots[self.len].take()
    }

    /// Inserts every item of `items`, stopping at the first overflow.
    pub fn try_extend<I>(&mut self, items: I) -> Result<(), ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().try_for_each(|i| self.insert(i).map(drop))
    }
}

impl<T: fmt::Display> fmt::Display for OrderedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedArray")
            .field("capacity", &self.capacity())
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items<T: Clone>(a: &OrderedArray<T>) -> Vec<T> {
        a.iter().cloned().collect()
    }

    fn scenario_one() -> OrderedArray<i32> {
        let mut a = OrderedArray::new(5);
        for i in [5, 3, 8, 1] {
            a.insert(i).unwrap();
        }
        a
    }

    #[test]
    fn inserts_keep_order() {
        let a = scenario_one();
        assert_eq!(items(&a), [1, 3, 5, 8]);
        assert_eq!(a.count(), 4);
        assert_eq!(a.to_string(), "[1, 3, 5, 8]");
    }

    #[test]
    fn search_present_and_absent() {
        let a = scenario_one();
        assert_eq!(a.search(&3), Some(&3));
        assert_eq!(a.search(&9), None);
        assert_eq!(a.search(&0), None);
    }

    #[test]
    fn delete_once() {
        let mut a = scenario_one();
        assert!(a.delete(&5));
        assert_eq!(items(&a), [1, 3, 8]);
        assert!(!a.delete(&5));
        assert_eq!(items(&a), [1, 3, 8]);
        assert_eq!(a.count(), 3);
    }

    #[test]
    fn overflow_leaves_array_untouched() {
        let mut a = OrderedArray::new(2);
        assert_eq!(a.insert(10), Ok(0));
        assert_eq!(a.insert(20), Ok(1));
        assert_eq!(a.count(), 2);
        assert_eq!(a.insert(15), Err(ArrayError::Overflow { capacity: 2 }));
        assert_eq!(a.count(), 2);
        assert_eq!(items(&a), [10, 20]);
    }

    #[test]
    fn empty_array() {
        let a: OrderedArray<i32> = OrderedArray::new(3);
        assert_eq!(a.get(0), Err(ArrayError::OutOfRange { index: 0, len: 0 }));
        let mut visits = 0;
        a.traverse(|_| visits += 1);
        assert_eq!(visits, 0);
        assert_eq!(a.to_string(), "[]");
        assert_eq!(a.find(&7), 0);
    }

    #[test]
    fn zero_capacity_always_overflows() {
        let mut a = OrderedArray::new(0);
        assert!(a.is_full());
        assert_eq!(a.insert("x"), Err(ArrayError::Overflow { capacity: 0 }));
    }

    #[test]
    fn get_past_count_is_out_of_range_even_with_room() {
        let a = scenario_one();
        assert_eq!(a.get(3), Ok(&8));
        assert_eq!(a.get(4), Err(ArrayError::OutOfRange { index: 4, len: 4 }));
        assert_eq!(a.capacity(), 5);
    }

    #[test]
    fn find_returns_insertion_points() {
        let a = scenario_one();
        assert_eq!(a.find(&0), 0);
        assert_eq!(a.find(&4), 2);
        assert_eq!(a.find(&5), 2);
        assert_eq!(a.find(&100), 4);
    }

    #[test]
    fn zero_is_found_not_confused_with_absence() {
        let mut a = OrderedArray::new(3);
        a.insert(0).unwrap();
        assert_eq!(a.search(&0), Some(&0));
        assert_eq!(a.search(&1), None);
    }

    #[test]
    fn duplicates_are_adjacent_and_deleted_one_at_a_time() {
        let mut a = OrderedArray::new(6);
        a.try_extend([4, 2, 4, 9, 4]).unwrap();
        assert_eq!(items(&a), [2, 4, 4, 4, 9]);
        assert_eq!(a.remove(&4), Some(4));
        assert_eq!(items(&a), [2, 4, 4, 9]);
        assert!(a.delete(&4));
        assert!(a.delete(&4));
        assert!(!a.delete(&4));
        assert_eq!(items(&a), [2, 9]);
    }

    #[test]
    fn try_extend_stops_at_overflow() {
        let mut a = OrderedArray::new(2);
        assert_eq!(
            a.try_extend([3, 1, 2]),
            Err(ArrayError::Overflow { capacity: 2 })
        );
        assert_eq!(items(&a), [1, 3]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut a = scenario_one();
        a.clear();
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 5);
        a.try_extend([7, 6, 5, 4, 3]).unwrap();
        assert_eq!(items(&a), [3, 4, 5, 6, 7]);
    }

    #[test]
    fn traverse_is_restartable() {
        let a = scenario_one();
        let mut first = Vec::new();
        a.traverse(|i| first.push(*i));
        let mut second = Vec::new();
        a.traverse(|i| second.push(*i));
        assert_eq!(first, second);
        assert_eq!(a.iter().rev().copied().collect::<Vec<_>>(), [8, 5, 3, 1]);
    }

    #[test]
    fn debug_shows_only_occupied_items() {
        let a = scenario_one();
        assert_eq!(
            format!("{:?}", a),
            "OrderedArray { capacity: 5, items: [1, 3, 5, 8] }"
        );
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(i8),
        Delete(i8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i8>().prop_map(Op::Insert),
            any::<i8>().prop_map(Op::Delete),
        ]
    }

    const CAPACITY: usize = 16;

    proptest! {
        #[test]
        fn stays_sorted_and_bounded(ops in prop::collection::vec(op(), 0..100)) {
            let mut a = OrderedArray::new(CAPACITY);
            let mut model = Vec::new();
            for op in ops {
                match op {
                    Op::Insert(i) => {
                        let before = a.count();
                        match a.insert(i) {
                            Ok(_) => model.push(i),
                            Err(e) => {
                                prop_assert_eq!(e, ArrayError::Overflow { capacity: CAPACITY });
                                prop_assert_eq!(a.count(), before);
                            }
                        }
                    }
                    Op::Delete(i) => {
                        let expected = model.iter().position(|m| *m == i);
                        prop_assert_eq!(a.delete(&i), expected.is_some());
                        if let Some(p) = expected {
                            model.remove(p);
                        }
                    }
                }
                model.sort();
                prop_assert!(a.count() <= CAPACITY);
                prop_assert_eq!(items(&a), model.clone());
                prop_assert!(a.get(a.count()).is_err());
            }
        }

        #[test]
        fn insert_then_search(start in prop::collection::vec(any::<i32>(), 0..10), x in any::<i32>()) {
            let mut a = OrderedArray::new(11);
            a.try_extend(start).unwrap();
            a.insert(x).unwrap();
            prop_assert_eq!(a.search(&x), Some(&x));
        }

        #[test]
        fn delete_only_occurrence_then_search(start in prop::collection::hash_set(any::<i32>(), 1..10)) {
            let mut a = OrderedArray::new(10);
            let victim = *start.iter().next().unwrap();
            a.try_extend(start).unwrap();
            prop_assert!(a.delete(&victim));
            prop_assert_eq!(a.search(&victim), None);
        }
    }
}
