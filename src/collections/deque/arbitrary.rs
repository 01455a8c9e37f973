//! `proptest` strategies for [`Deque`], enabled by the `proptest` feature.
//!
//! Generated deques hold arbitrary elements and have their occupied window placed
//! at an arbitrary offset, so wrapped layouts show up as often as contiguous ones.

use super::Deque;
use proptest::arbitrary::{any, any_with, Arbitrary};
use proptest::collection::{vec, SizeRange};
use proptest::strategy::{BoxedStrategy, Strategy};

impl<T> Arbitrary for Deque<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = (SizeRange, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((size, element): Self::Parameters) -> Self::Strategy {
        (vec(any_with::<T>(element), size), any::<usize>())
            .prop_map(|(items, split)| {
                let split = split % (items.len() + 1);
                let mut items = items;
                let tail = items.split_off(split);
                let mut deque = Deque::new();
                deque.extend(tail);
                for item in items.into_iter().rev() {
                    deque.push_front(item);
                }
                deque
            })
            .boxed()
    }
}
