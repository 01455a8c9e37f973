//! Serialization of [`Deque`] as a front-to-back sequence.

use super::Deque;
use core::fmt;
use core::marker::PhantomData;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for Deque<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct DequeVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for DequeVisitor<T> {
    type Value = Deque<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut deque = Deque::new();
        while let Some(item) = seq.next_element()? {
            deque.push_back(item);
        }
        Ok(deque)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Deque<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(DequeVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde() {
        let input_sequences = [vec![0, 1, 2, 3, 4, 5, 6], vec![3, 2, 1], vec![]];
        for sequence in &input_sequences {
            let deque = Deque::from(sequence.clone());
            let serialized = serde_json::to_string(&deque).unwrap();
            let deserialized: Deque<i32> = serde_json::from_str(&serialized).unwrap();
            assert_eq!(deque, deserialized);
        }
    }

    #[test]
    fn serializes_wrapped_window_in_logical_order() {
        let mut deque: Deque<i32> = (0..4).collect();
        deque.pop_front();
        deque.push_back(4);
        deque.push_front(-1);
        assert_eq!(serde_json::to_string(&deque).unwrap(), "[-1,1,2,3,4]");
    }

    #[test]
    fn rejects_non_sequence() {
        let result: Result<Deque<i32>, _> = serde_json::from_str("{\"a\": 1}");
        assert!(result.is_err());
    }
}
