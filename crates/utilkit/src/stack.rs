//! Thread-safe LIFO stack

use parking_lot::Mutex;
use std::fmt;

/// A LIFO stack guarded by a mutex, shareable across threads behind an `Arc`.
///
/// Every method takes `&self` and holds the lock only for its own duration.
///
/// # Examples
///
/// ```
/// use utilkit::Stack;
///
/// let stack = Stack::from_vec(vec![2, 3]);
/// stack.push(1);
/// assert_eq!(stack.to_string(), "[1,2,3]");
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.peek(), Some(2));
/// ```
pub struct Stack<T> {
    // Top of the stack is the last element
    items: Mutex<Vec<T>>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Create a stack holding `items`, the first element on top.
    pub fn from_vec(mut items: Vec<T>) -> Self {
        items.reverse();
        Self {
            items: Mutex::new(items),
        }
    }

    /// Put `item` on top.
    pub fn push(&self, item: T) {
        self.items.lock().push(item);
    }

    /// Put several items on top at once; the first of `items` ends on top.
    pub fn push_all(&self, items: impl IntoIterator<Item = T>) {
        let mut incoming: Vec<T> = items.into_iter().collect();
        incoming.reverse();
        self.items.lock().extend(incoming);
    }

    /// Remove and return the top item, `None` when empty.
    pub fn pop(&self) -> Option<T> {
        self.items.lock().pop()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Remove every item.
    pub fn clear(&self) {
        self.items.lock().clear();
    }

    /// Take every item out, top first, leaving the stack empty.
    pub fn drain(&self) -> Vec<T> {
        let mut items = std::mem::take(&mut *self.items.lock());
        items.reverse();
        items
    }
}

impl<T: Clone> Stack<T> {
    /// Copy of the top item, `None` when empty.
    pub fn peek(&self) -> Option<T> {
        self.items.lock().last().cloned()
    }

    /// Copy of every item, top first.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.lock().iter().rev().cloned().collect()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.items.lock();
        f.debug_list().entries(items.iter().rev()).finish()
    }
}

/// Renders as `[top,next,...,bottom]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.items.lock();
        f.write_str("[")?;
        for (i, item) in items.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_push_pop_is_lifo() {
        let stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_all_keeps_first_on_top() {
        let stack = Stack::from_vec(vec!["c"]);
        stack.push_all(["a", "b"]);

        assert_eq!(stack.to_vec(), vec!["a", "b", "c"]);
        assert_eq!(stack.peek(), Some("a"));
    }

    #[test]
    fn test_peek_empty() {
        let stack: Stack<u8> = Stack::default();
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_display() {
        let stack = Stack::new();
        assert_eq!(stack.to_string(), "[]");

        stack.push(7);
        assert_eq!(stack.to_string(), "[7]");

        stack.push_all([5, 6]);
        assert_eq!(stack.to_string(), "[5,6,7]");
        assert_eq!(format!("{stack:?}"), "[5, 6, 7]");
    }

    #[test]
    fn test_clear_and_drain() {
        let stack = Stack::from(vec![1, 2, 3]);
        assert_eq!(stack.drain(), vec![1, 2, 3]);
        assert!(stack.is_empty());

        stack.push(4);
        stack.clear();
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_concurrent_pushes() {
        let stack = Arc::new(Stack::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let stack = Arc::clone(&stack);
                thread::spawn(move || {
                    for i in 0..100 {
                        stack.push(t * 100 + i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(stack.len(), 800);
        let mut all = stack.drain();
        all.sort_unstable();
        assert_eq!(all, (0..800).collect::<Vec<_>>());
    }
}
