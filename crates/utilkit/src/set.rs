//! Set algebra over slices and an insertion-ordered [`Set`]
//!
//! The slice functions keep the order of the slice they read from, so results
//! are deterministic. `intersect` and `union` drop duplicates, the `except_*`
//! functions keep them.

use std::collections::HashSet;
use std::hash::Hash;

/// Elements of `b` that also appear in `a`, in `b`'s order, each at most once.
///
/// ```
/// use utilkit::intersect;
///
/// assert_eq!(intersect(&[1, 2, 3, 3, 4, 7], &[0, 2, 3, 5, 5, 8, 9]), vec![2, 3]);
/// ```
pub fn intersect<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let common: HashSet<&T> = a.iter().collect();
    let mut seen = HashSet::with_capacity(common.len());

    b.iter()
        .filter(|item| common.contains(item) && seen.insert(*item))
        .cloned()
        .collect()
}

/// Distinct elements of `a` followed by those of `b`, in first-seen order.
///
/// ```
/// use utilkit::union;
///
/// assert_eq!(union(&[1, 2, 2], &[2, 3]), vec![1, 2, 3]);
/// ```
pub fn union<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(a.len() + b.len());

    a.iter()
        .chain(b)
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Elements only in `a` (those not in `b`), duplicates kept.
///
/// ```
/// use utilkit::except_right;
///
/// assert_eq!(except_right(&[1, 2, 3, 3, 4, 7], &[0, 2, 3, 5]), vec![1, 4, 7]);
/// ```
pub fn except_right<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let excluded: HashSet<&T> = b.iter().collect();

    a.iter()
        .filter(|item| !excluded.contains(item))
        .cloned()
        .collect()
}

/// Elements only in `b` (those not in `a`), duplicates kept.
///
/// Same as `except_right(b, a)`.
pub fn except_left<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    except_right(b, a)
}

/// A hash set that remembers insertion order.
///
/// Iteration yields elements in the order they were first inserted.
/// Equality ignores order.
///
/// # Examples
///
/// ```
/// use utilkit::Set;
///
/// let a: Set<_> = [3, 1, 2].into_iter().collect();
/// let b: Set<_> = [2, 3, 4].into_iter().collect();
///
/// assert_eq!(a.intersection(&b).into_vec(), vec![3, 2]);
/// assert_eq!(a.union(&b).into_vec(), vec![3, 1, 2, 4]);
/// assert_eq!(a.difference(&b).into_vec(), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct Set<T: Eq + Hash> {
    index: HashSet<T>,
    order: Vec<T>,
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            index: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Create an empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashSet::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Add `value`; `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.index.contains(&value) {
            return false;
        }
        self.index.insert(value.clone());
        self.order.push(value);
        true
    }

    /// Remove `value`; `false` if it was not present.
    pub fn remove(&mut self, value: &T) -> bool {
        if !self.index.remove(value) {
            return false;
        }
        self.order.retain(|item| item != value);
        true
    }

    /// Whether `value` is in the set.
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains(value)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.order.iter()
    }

    /// Elements as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.order
    }

    /// Consume the set into a vector, in insertion order.
    pub fn into_vec(self) -> Vec<T> {
        self.order
    }

    /// Elements present in both sets, in `self`'s order.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        self.iter().filter(|item| other.contains(item)).cloned().collect()
    }

    /// Elements of `self` followed by the new elements of `other`.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Elements of `self` that are not in `other`.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        self.iter().filter(|item| !other.contains(item)).cloned().collect()
    }

    /// Whether every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Eq + Hash + Clone> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T: Eq + Hash + Clone> Eq for Set<T> {}

impl<T: Eq + Hash + Clone> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Eq + Hash + Clone> From<Vec<T>> for Set<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Eq + Hash> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
