//! `Deque` - a growable double-ended queue on a power-of-two ring buffer.
//!
//! Elements live in a contiguous slot array whose length is always a power of two,
//! so wrap-around is a bitmask instead of a modulo. The occupied window starts at
//! `front` and spans `len` slots forward, wrapping past the end of the array.
//!
//! Performance Characteristics:
//! - Push/Pop: amortized O(1) at both ends
//! - Access: O(1) with masked index arithmetic
//! - Resize: O(n), at most once per O(n) operations (doubling on full, halving
//!   once usage falls below a quarter)
//!
//! Slots outside the occupied window are always `None`, so a popped value is never
//! kept alive by the deque.
//!
//! ```rust
//! use ring_deque::Deque;
//!
//! let mut deque = Deque::new();
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//!
//! assert_eq!(deque.to_string(), "[0 1 2]");
//! assert_eq!(deque.pop_back(), Some(2));
//! assert_eq!(deque.front(), Some(&0));
//! ```

#[cfg(feature = "proptest")]
mod arbitrary;
mod fmt;
mod iter;
mod resize;
mod ring;
mod serde_impls;


pub use iter::{IntoIter, Iter};

/// A double-ended queue backed by a power-of-two circular buffer.
///
/// `Deque::default()` performs no allocation; the backing store is created on the
/// first push. `Deque::new()` allocates a single slot up front.
#[derive(Clone)]
pub struct Deque<T> {
    /// Ring storage. Occupied slots are `Some`, every other slot is `None`.
    /// Empty only for a default-constructed deque that has not been pushed to.
    slots: Vec<Option<T>>,
    /// Index of the oldest element.
    front: usize,
    /// Index one past the newest element (next slot for `push_back`).
    back: usize,
    /// Number of live elements.
    len: usize,
}

impl<T> Deque<T> {
    /// Creates an empty deque with capacity 1.
    pub fn new() -> Self {
        let mut deque = Self::default();
        deque.init();
        deque
    }

    /// Resets the deque to the state produced by [`Deque::new`], dropping all elements.
    pub fn init(&mut self) -> &mut Self {
        self.slots = ring::empty_slots(1);
        self.front = 0;
        self.back = 0;
        self.len = 0;
        self
    }

    /// Removes all elements. Same as [`Deque::init`].
    #[inline]
    pub fn clear(&mut self) {
        self.init();
    }

    #[inline]
    fn lazy_init(&mut self) {
        if self.slots.is_empty() {
            self.init();
        }
    }

    /// Returns the number of elements in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the ring. Always a power of two.
    ///
    /// A default deque that has not allocated yet reports 1, the capacity it
    /// initializes to.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len().max(1)
    }

    /// Returns `true` if the next push has to grow the ring first.
    #[inline(always)]
    fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Returns the physical slot of the element at logical `index`.
    #[inline(always)]
    fn slot_index(&self, index: usize) -> usize {
        ring::wrap(self.front + index, self.slots.len())
    }

    /// Returns a reference to the front element, or `None` if the deque is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Returns a mutable reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_mut()
    }

    /// Returns a reference to the back element, or `None` if the deque is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.dec(self.back)].as_ref()
    }

    /// Returns a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let idx = self.dec(self.back);
        self.slots[idx].as_mut()
    }

    /// Returns the element `index` positions from the front.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.slot_index(index)].as_ref()
    }

    /// Returns a mutable reference to the element `index` positions from the front.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let idx = self.slot_index(index);
        self.slots[idx].as_mut()
    }

    /// Inserts `value` at the front of the deque.
    pub fn push_front(&mut self, value: T) {
        self.lazy_init();
        self.lazy_grow();
        self.front = self.dec(self.front);
        self.slots[self.front] = Some(value);
        self.len += 1;
    }

    /// Inserts `value` at the back of the deque.
    pub fn push_back(&mut self, value: T) {
        self.lazy_init();
        self.lazy_grow();
        self.slots[self.back] = Some(value);
        self.back = self.inc(self.back);
        self.len += 1;
    }

    /// Removes and returns the front element, or `None` if the deque is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front].take();
        self.front = self.inc(self.front);
        self.len -= 1;
        self.lazy_shrink();
        value
    }

    /// Removes and returns the back element, or `None` if the deque is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.back = self.dec(self.back);
        let value = self.slots[self.back].take();
        self.len -= 1;
        self.lazy_shrink();
        value
    }

    /// Returns a front-to-back iterator over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.front, self.len)
    }
}

impl<T> Default for Deque<T> {
    /// Creates an unallocated deque. It initializes itself on first push.
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            front: 0,
            back: 0,
            len: 0,
        }
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: core::hash::Hash> core::hash::Hash for Deque<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}
