//! Wrap-around index arithmetic for power-of-two rings.

use super::Deque;

/// Reduces `index` into `0..capacity`. Requires `capacity` to be a power of two.
#[inline(always)]
pub(super) fn wrap(index: usize, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    index & (capacity - 1)
}

/// Allocates `capacity` empty slots.
pub(super) fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

impl<T> Deque<T> {
    /// Next slot after `index`, wrapping at the end of the ring.
    #[inline(always)]
    pub(super) fn inc(&self, index: usize) -> usize {
        wrap(index.wrapping_add(1), self.slots.len())
    }

    /// Slot before `index`, wrapping at the start of the ring.
    #[inline(always)]
    pub(super) fn dec(&self, index: usize) -> usize {
        wrap(index.wrapping_sub(1), self.slots.len())
    }
}
