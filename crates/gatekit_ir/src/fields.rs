//! Named fields of a dictionary product.
//!
//! [`Fields`] keeps two orderings apart: iteration follows insertion order
//! (how the author wrote the fields), while [`Fields::sorted`] yields the
//! lexicographic order that the netlist uses as its canonical layout.

use std::fmt;

/// An insertion-ordered map from field name to value with unique names.
#[derive(Clone)]
pub struct Fields<T> {
    entries: Vec<(String, T)>,
}

impl<T> Fields<T> {
    /// Creates an empty field map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a field. Re-inserting an existing name replaces its value in
    /// place and returns the old one.
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Returns the value of the named field.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if a field with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Returns the fields ordered lexicographically by name.
    pub fn sorted(&self) -> Vec<(&str, &T)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
        sorted
    }

    /// Maps every value, keeping names and insertion order.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Fields<U> {
        Fields {
            entries: self
                .entries
                .iter()
                .map(|(n, v)| (n.clone(), f(v)))
                .collect(),
        }
    }
}

impl<T> Default for Fields<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two field maps are equal when they hold the same names with equal values,
/// whatever order the names were inserted in.
impl<T: PartialEq> PartialEq for Fields<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl<T: Eq> Eq for Fields<T> {}

impl<K: Into<String>, T> FromIterator<(K, T)> for Fields<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

impl<T: fmt::Debug> fmt::Debug for Fields<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_keeps_insertion_order() {
        let fields: Fields<u32> = [("select", 0), ("a", 1), ("b", 2)].into_iter().collect();
        let names: Vec<_> = fields.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["select", "a", "b"]);
    }

    #[test]
    fn sorted_is_lexicographic() {
        let fields: Fields<u32> = [("select", 0), ("a", 1), ("b", 2)].into_iter().collect();
        let names: Vec<_> = fields.sorted().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b", "select"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut fields = Fields::new();
        fields.insert("data", 1);
        fields.insert("enable", 2);
        assert_eq!(fields.insert("data", 3), Some(1));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.iter().next(), Some(("data", &3)));
    }

    #[test]
    fn equality_ignores_order() {
        let a: Fields<u32> = [("x", 1), ("y", 2)].into_iter().collect();
        let b: Fields<u32> = [("y", 2), ("x", 1)].into_iter().collect();
        let c: Fields<u32> = [("x", 1), ("z", 2)].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn map_keeps_names() {
        let fields: Fields<u32> = [("b", 2), ("a", 1)].into_iter().collect();
        let doubled = fields.map(|v| v * 2);
        assert_eq!(doubled.get("b"), Some(&4));
        assert_eq!(doubled.iter().next().map(|(n, _)| n), Some("b"));
        assert!(!doubled.contains("c"));
    }
}
