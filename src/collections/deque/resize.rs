//! Grow/shrink policy for the ring.
//!
//! Capacity doubles when a push finds the ring full and halves when a pop leaves
//! fewer than a quarter of the slots occupied. The gap between the two thresholds
//! keeps a deque oscillating around one size from resizing on every operation.

use super::{ring, Deque};

/// Factor applied to the capacity when the ring is full.
const GROWTH_FACTOR: usize = 2;

/// A ring is sparse once `len < capacity / SHRINK_DIVISOR`.
const SHRINK_DIVISOR: usize = 4;

impl<T> Deque<T> {
    /// Returns `true` if the ring has enough unused slots to be halved.
    #[inline(always)]
    pub(super) fn is_sparse(&self) -> bool {
        1 < self.len && self.len < self.slots.len() / SHRINK_DIVISOR
    }

    /// Doubles the ring if the next push would not fit.
    #[inline]
    pub(super) fn lazy_grow(&mut self) {
        if self.is_full() {
            self.resize(self.slots.len() * GROWTH_FACTOR);
        }
    }

    /// Halves the ring if it is sparse.
    #[inline]
    pub(super) fn lazy_shrink(&mut self) {
        if self.is_sparse() {
            self.resize(self.slots.len() / GROWTH_FACTOR);
        }
    }

    /// Moves the occupied window into a fresh ring of `capacity` slots starting at 0.
    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity.is_power_of_two());
        debug_assert!(self.len <= capacity);
        debug_assert!(self.len > 0);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            from = self.slots.len(),
            to = capacity,
            len = self.len,
            "resizing deque ring"
        );

        let mut adjusted = Vec::with_capacity(capacity);
        if self.front < self.back {
            // Window does not wrap, one move suffices.
            adjusted.extend(self.slots[self.front..self.back].iter_mut().map(Option::take));
        } else {
            // Window wraps around the end of the ring, move both halves.
            let (head, tail) = self.slots.split_at_mut(self.front);
            adjusted.extend(tail.iter_mut().map(Option::take));
            adjusted.extend(head[..self.back].iter_mut().map(Option::take));
        }
        debug_assert_eq!(adjusted.len(), self.len);
        adjusted.resize_with(capacity, || None);

        self.slots = adjusted;
        self.front = 0;
        self.back = ring::wrap(self.len, capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physical(deque: &Deque<u32>) -> Vec<Option<u32>> {
        deque.slots.clone()
    }

    #[test]
    fn grow_doubles_full_ring() {
        let mut deque = Deque::new();
        deque.push_back(1);
        assert_eq!(deque.capacity(), 1);
        deque.push_back(2);
        assert_eq!(deque.capacity(), 2);
        deque.push_back(3);
        assert_eq!(deque.capacity(), 4);
        deque.push_back(4);
        assert_eq!(deque.capacity(), 4);
        deque.push_back(5);
        assert_eq!(deque.capacity(), 8);
    }

    #[test]
    fn resize_normalizes_wrapped_window() {
        let mut deque = Deque::new();
        for i in 0..4 {
            deque.push_back(i);
        }
        // Shift the window so it wraps: slots [4, 5, 2, 3], front = 2.
        deque.pop_front();
        deque.pop_front();
        deque.push_back(4);
        deque.push_back(5);
        assert_eq!(deque.front, 2);
        assert_eq!(deque.back, 2);
        assert_eq!(physical(&deque), vec![Some(4), Some(5), Some(2), Some(3)]);

        deque.push_back(6);
        assert_eq!(deque.capacity(), 8);
        assert_eq!(deque.front, 0);
        assert_eq!(deque.back, 5);
        assert_eq!(
            physical(&deque),
            vec![Some(2), Some(3), Some(4), Some(5), Some(6), None, None, None]
        );
    }

    #[test]
    fn resize_moves_contiguous_window() {
        let mut deque = Deque::new();
        for i in 0..16 {
            deque.push_back(i);
        }
        deque.pop_front();
        deque.pop_front();
        for _ in 0..10 {
            deque.pop_back();
        }
        // 4 of 16 slots used, not sparse yet.
        assert_eq!(deque.capacity(), 16);
        assert_eq!((deque.front, deque.back), (2, 6));

        deque.pop_back();
        // 3 < 16 / 4 halves the ring.
        assert_eq!(deque.capacity(), 8);
        assert_eq!((deque.front, deque.back), (0, 3));
        assert_eq!(
            physical(&deque),
            vec![Some(2), Some(3), Some(4), None, None, None, None, None]
        );
    }

    #[test]
    fn push_front_from_empty_wraps_to_last_slot() {
        let mut deque = Deque::new();
        deque.push_back(1);
        deque.push_back(2);
        deque.push_front(0);
        // Grown to 4 with window [1, 2] at 0, then front decremented to 3.
        assert_eq!(deque.front, 3);
        assert_eq!(physical(&deque), vec![Some(1), Some(2), None, Some(0)]);
    }

    #[test]
    fn shrink_never_fires_at_one_element() {
        let mut deque = Deque::new();
        for i in 0..16 {
            deque.push_back(i);
        }
        while deque.len() > 1 {
            deque.pop_back();
            assert!(deque.capacity() >= deque.len());
        }
        let cap = deque.capacity();
        deque.pop_back();
        assert_eq!(deque.capacity(), cap);
        assert!(deque.is_empty());
    }

    #[test]
    fn sparse_threshold_is_strictly_below_quarter() {
        let mut deque = Deque::new();
        for i in 0..16 {
            deque.push_back(i);
        }
        assert_eq!(deque.capacity(), 16);
        for _ in 0..12 {
            deque.pop_front();
        }
        // len == capacity / 4 is not sparse.
        assert_eq!(deque.len(), 4);
        assert_eq!(deque.capacity(), 16);
        deque.pop_front();
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.capacity(), 8);
    }
}
