//! Quick-link shortcuts, ordered like the todo list.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::list::OrderedList;
use crate::storage::{keys, PersistentStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub name: String,
    pub url: String,
}

impl QuickLink {
    /// Trimmed link, or `None` if either field is blank.
    fn normalized(name: &str, url: &str) -> Option<Self> {
        let (name, url) = (name.trim(), url.trim());
        if name.is_empty() || url.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            url: url.to_string(),
        })
    }
}

pub struct QuickLinks {
    list: OrderedList<QuickLink>,
}

impl QuickLinks {
    pub fn load(store: PersistentStore) -> Self {
        Self {
            list: OrderedList::load(store, keys::QUICK_LINKS),
        }
    }

    pub fn items(&self) -> &[QuickLink] {
        self.list.items()
    }

    pub fn get(&self, index: usize) -> Option<&QuickLink> {
        self.list.get(index)
    }

    pub fn add(&mut self, name: &str, url: &str) -> Result<bool> {
        match QuickLink::normalized(name, url) {
            Some(link) => self.list.push(link),
            None => Ok(false),
        }
    }

    pub fn edit(&mut self, index: usize, name: &str, url: &str) -> Result<bool> {
        match QuickLink::normalized(name, url) {
            Some(link) => self.list.update(index, |slot| *slot = link),
            None => Ok(false),
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<bool> {
        self.list.remove(index)
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> Result<bool> {
        self.list.move_item(from, to)
    }
}
