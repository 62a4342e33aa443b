//! Todo list model.
//!
//! Order is insertion/drag order; `urgent` is a display flag only and never
//! reorders anything.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Result;
use crate::list::OrderedList;
use crate::storage::{keys, PersistentStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Urgent,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Priority::Normal),
            "urgent" => Ok(Priority::Urgent),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

pub struct TodoList {
    list: OrderedList<TodoItem>,
}

impl TodoList {
    /// Hydrate from the `todos` key.
    pub fn load(store: PersistentStore) -> Self {
        Self {
            list: OrderedList::load(store, keys::TODOS),
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        self.list.items()
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.list.get(index)
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Append an incomplete item. Declines blank text.
    pub fn add(&mut self, text: &str, priority: Priority) -> Result<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        self.list.push(TodoItem {
            text: text.to_string(),
            priority,
            completed: false,
        })
    }

    pub fn set_completed(&mut self, index: usize, completed: bool) -> Result<bool> {
        self.list.update(index, |item| item.completed = completed)
    }

    /// Replace text and priority, keeping completion. Declines blank text.
    pub fn edit(&mut self, index: usize, text: &str, priority: Priority) -> Result<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        self.list.update(index, |item| {
            item.text = text.to_string();
            item.priority = priority;
        })
    }

    pub fn remove(&mut self, index: usize) -> Result<bool> {
        self.list.remove(index)
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> Result<bool> {
        self.list.move_item(from, to)
    }
}
