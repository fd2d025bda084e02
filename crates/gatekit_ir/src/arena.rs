//! Append-only, ID-indexed storage for gates.

use std::marker::PhantomData;
use std::ops::Index;

/// Trait for opaque ID types used as arena keys.
pub trait ArenaId: Copy {
    /// Creates an ID from a raw `u32` index.
    fn from_raw(index: u32) -> Self;

    /// Returns the raw `u32` index.
    fn as_raw(self) -> u32;
}

/// A dense container whose IDs stay valid for its whole lifetime.
///
/// Items are only ever appended, so allocation order doubles as construction
/// order.
#[derive(Debug, Clone)]
pub struct Arena<I: ArenaId, T> {
    items: Vec<T>,
    _marker: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Allocates a new item in the arena and returns its ID.
    pub fn alloc(&mut self, item: T) -> I {
        let id = I::from_raw(self.items.len() as u32);
        self.items.push(item);
        id
    }

    /// Returns the item with the given ID, or `None` if this arena never issued it.
    pub fn get(&self, id: I) -> Option<&T> {
        self.items.get(id.as_raw() as usize)
    }

    /// Returns a mutable reference to the item with the given ID, if present.
    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.items.get_mut(id.as_raw() as usize)
    }

    /// Returns the number of items in the arena.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the arena contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(ID, &T)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (I::from_raw(i as u32), item))
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the ID is out of bounds.
    fn index(&self, id: I) -> &T {
        &self.items[id.as_raw() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::GateId;

    #[test]
    fn alloc_and_index() {
        let mut arena: Arena<GateId, &str> = Arena::new();
        let id = arena.alloc("nand");
        assert_eq!(arena[id], "nand");
    }

    #[test]
    fn ids_follow_allocation_order() {
        let mut arena: Arena<GateId, u32> = Arena::new();
        arena.alloc(100);
        arena.alloc(200);
        let ids: Vec<u32> = arena.iter().map(|(id, _)| id.as_raw()).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn get_unknown_is_none() {
        let mut arena: Arena<GateId, u32> = Arena::new();
        arena.alloc(1);
        assert!(arena.get(GateId::from_raw(1)).is_none());
        assert_eq!(arena.get(GateId::from_raw(0)), Some(&1));
    }

    #[test]
    fn get_mut_modifies() {
        let mut arena: Arena<GateId, String> = Arena::new();
        let id = arena.alloc("original".to_string());
        if let Some(item) = arena.get_mut(id) {
            *item = "modified".to_string();
        }
        assert_eq!(arena[id], "modified");
    }

    #[test]
    fn default_is_empty() {
        let arena: Arena<GateId, u32> = Arena::default();
        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
    }
}
