//! In-process backend. Clones share the same map.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::Backend;
use crate::error::{Result, StorageError};

#[derive(Debug, Default)]
struct Inner {
    entries: RefCell<HashMap<String, String>>,
    read_only: Cell<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    inner: Rc<Inner>,
}

impl MemoryBackend {
    /// Reject every subsequent write. Reads keep working.
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.read_only.set(read_only);
    }

    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_writable(&self) -> Result<()> {
        if self.inner.read_only.get() {
            return Err(StorageError::QueryFailed("backend is read-only".into()).into());
        }
        Ok(())
    }
}

impl Backend for MemoryBackend {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.entries.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.inner
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.inner.entries.borrow_mut().remove(key);
        Ok(())
    }
}
