//! # `ring-deque` - Power-of-Two Ring Buffer Deque
//!
//! A growable double-ended queue stored in a contiguous circular buffer.
//! Pushes and pops at either end run in amortized constant time.
//!
//! ## Guarantees
//!
//! - **No unsafe code**: slots are `Option<T>`, so an unused slot never holds a live
//!   value and a popped element is never retained by the deque.
//! - **Power-of-two capacity**: the ring length is always `2^n`, which turns
//!   wrap-around into a bitmask.
//! - **Hysteresis**: capacity doubles when full and halves only once fewer than a
//!   quarter of the slots are used.
//! - **Absence is explicit**: `front`, `back` and the pops return `Option`, so a stored
//!   `0` or empty string is never mistaken for an empty deque.
//!
//! The deque is single-threaded. Share it across threads by wrapping it in a lock.
//!
//! ## Features
//!
//! - `tracing`: emit a `trace` event on every resize.
//! - `proptest`: `Arbitrary` implementation for `Deque<T>`.
//!
//! ## Example
//!
//! ```rust
//! use ring_deque::Deque;
//!
//! let mut deque = Deque::new();
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_back(3);
//! assert_eq!(deque.to_string(), "[1 2 3]");
//!
//! assert_eq!(deque.pop_front(), Some(1));
//! deque.push_front(0);
//! assert_eq!(deque.pop_back(), Some(3));
//! assert_eq!(deque.to_string(), "[0 2]");
//!
//! let mut empty: Deque<i32> = Deque::default();
//! assert_eq!(empty.pop_front(), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;

pub use collections::Deque;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Header is the slot vector plus three cursors.
    assert!(mem::size_of::<Deque<u64>>() == mem::size_of::<Vec<Option<u64>>>() + 3 * mem::size_of::<usize>());

    // The header does not depend on the element type.
    assert!(mem::size_of::<Deque<u8>>() == mem::size_of::<Deque<[u64; 16]>>());
};
