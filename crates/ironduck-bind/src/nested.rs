//! Positional sequences over the entries of a composite type

use std::fmt;
use std::iter::FusedIterator;

use ironduck_capi::LogicalTypeHandle;

/// Lazy sequence over the entries of a nested type (struct children, union
/// members, enum values).
///
/// Item `i` is read from the handle by position only when it is reached.
/// The length is known up front, and [`Nested::restart`] (or asking the
/// parent type again) yields the same entries from the beginning.
pub struct Nested<'a, T> {
    handle: &'a LogicalTypeHandle,
    read: fn(&LogicalTypeHandle, usize) -> T,
    count: usize,
    front: usize,
    back: usize,
}

impl<'a, T> Nested<'a, T> {
    pub(crate) fn new(
        handle: &'a LogicalTypeHandle,
        count: usize,
        read: fn(&LogicalTypeHandle, usize) -> T,
    ) -> Self {
        Nested {
            handle,
            read,
            count,
            front: 0,
            back: count,
        }
    }

    /// A sequence over the same entries, starting again from the first one
    pub fn restart(&self) -> Self {
        Nested::new(self.handle, self.count, self.read)
    }

    /// Number of entries of the underlying type, regardless of progress
    pub fn total(&self) -> usize {
        self.count
    }
}

impl<T> Iterator for Nested<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = (self.read)(self.handle, self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<T> DoubleEndedIterator for Nested<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some((self.read)(self.handle, self.back))
    }
}

impl<T> ExactSizeIterator for Nested<'_, T> {}

impl<T> FusedIterator for Nested<'_, T> {}

impl<T> Clone for Nested<'_, T> {
    fn clone(&self) -> Self {
        Nested {
            handle: self.handle,
            read: self.read,
            count: self.count,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T> fmt::Debug for Nested<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nested")
            .field("handle", self.handle)
            .field("count", &self.count)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironduck_common::LogicalType;

    fn enum_handle(values: &[&str]) -> LogicalTypeHandle {
        LogicalTypeHandle::new(LogicalType::Enum(
            values.iter().map(|v| v.to_string()).collect(),
        ))
    }

    fn values(handle: &LogicalTypeHandle) -> Nested<'_, String> {
        Nested::new(
            handle,
            handle.enum_dictionary_size(),
            LogicalTypeHandle::enum_dictionary_value,
        )
    }

    #[test]
    fn test_len_known_before_iteration() {
        let handle = enum_handle(&["a", "b", "c"]);
        let mut seq = values(&handle);
        assert_eq!(seq.len(), 3);
        seq.next();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.total(), 3);
    }

    #[test]
    fn test_both_ends() {
        let handle = enum_handle(&["a", "b", "c"]);
        let mut seq = values(&handle);
        assert_eq!(seq.next_back().as_deref(), Some("c"));
        assert_eq!(seq.next().as_deref(), Some("a"));
        assert_eq!(seq.next().as_deref(), Some("b"));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next_back(), None);
    }

    #[test]
    fn test_nth_past_end() {
        let handle = enum_handle(&["a", "b"]);
        let mut seq = values(&handle);
        assert_eq!(seq.nth(5), None);
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn test_restart() {
        let handle = enum_handle(&["x", "y"]);
        let mut seq = values(&handle);
        seq.next();
        let again: Vec<_> = seq.restart().collect();
        assert_eq!(again, vec!["x", "y"]);
        assert_eq!(seq.collect::<Vec<_>>(), vec!["y"]);
    }

    #[test]
    fn test_empty() {
        let handle = enum_handle(&[]);
        let mut seq = values(&handle);
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.next(), None);
    }
}
