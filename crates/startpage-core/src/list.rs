//! Position-addressed persisted sequence shared by todos and quick links.
//!
//! Items have no stable id: identity is the index in the current order. Every
//! mutation is written to the store before it becomes visible in memory, so a
//! failed write leaves the previous order intact.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::storage::PersistentStore;

pub(crate) struct OrderedList<T> {
    store: PersistentStore,
    key: &'static str,
    items: Vec<T>,
}

impl<T> OrderedList<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    pub fn load(store: PersistentStore, key: &'static str) -> Self {
        let items: Vec<T> = store.load(key);
        Self { store, key, items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn push(&mut self, item: T) -> Result<bool> {
        let mut next = self.items.clone();
        next.push(item);
        self.commit(next)
    }

    /// Apply `f` to the item at `index`. Declines when out of bounds.
    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut T)) -> Result<bool> {
        if index >= self.items.len() {
            return Ok(false);
        }
        let mut next = self.items.clone();
        f(&mut next[index]);
        self.commit(next)
    }

    pub fn remove(&mut self, index: usize) -> Result<bool> {
        if index >= self.items.len() {
            return Ok(false);
        }
        let mut next = self.items.clone();
        next.remove(index);
        self.commit(next)
    }

    /// Splice the item at `from` out, then back in at `to` of the shortened
    /// sequence. Not a swap.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<bool> {
        let len = self.items.len();
        if from >= len || to >= len || from == to {
            return Ok(false);
        }
        let mut next = self.items.clone();
        let moved = next.remove(from);
        next.insert(to, moved);
        self.commit(next)
    }

    fn commit(&mut self, next: Vec<T>) -> Result<bool> {
        self.store.save(self.key, &next)?;
        self.items = next;
        tracing::debug!(key = self.key, len = self.items.len(), "list persisted");
        Ok(true)
    }
}
