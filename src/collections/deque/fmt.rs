//! Text rendering for [`Deque`].

use super::Deque;
use core::fmt;

/// Renders the elements front to back, space separated and bracketed: `[1 2 3]`.
impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty() {
        assert_eq!(Deque::<i32>::new().to_string(), "[]");
        assert_eq!(Deque::<i32>::default().to_string(), "[]");
    }

    #[test]
    fn display_single() {
        let deque: Deque<i32> = core::iter::once(7).collect();
        assert_eq!(deque.to_string(), "[7]");
    }

    #[test]
    fn display_strings() {
        let deque: Deque<&str> = vec!["a", "", "c"].into();
        assert_eq!(deque.to_string(), "[a  c]");
    }

    #[test]
    fn debug_matches_list() {
        let deque: Deque<i32> = (1..=3).collect();
        assert_eq!(format!("{deque:?}"), "[1, 2, 3]");
    }
}
