//! Collections.
//!
//! - `deque`: growable double-ended queue on a power-of-two ring buffer

pub mod deque;

pub use deque::{Deque, IntoIter, Iter};
