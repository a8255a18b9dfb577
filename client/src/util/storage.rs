//! Persistence adapters for the session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store never touches `web-sys` directly. It is handed a
//! [`SessionStorage`] so the browser adapter can be swapped for an in-memory
//! one in tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use crate::error::StorageError;

/// Raw load/save capability for one serialized record.
pub trait SessionStorage {
    /// Read the stored record, `Ok(None)` when nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored record.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store rejects the write.
    fn save(&self, raw: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` under a fixed key.
///
/// Outside the browser build every read is empty and every write is dropped.
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

impl SessionStorage for BrowserStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(&self.key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no browser storage, {} reads as empty", self.key);
            Ok(None)
        }
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(&self.key, raw)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no browser storage, dropping {} bytes for {}", raw.len(), self.key);
            Ok(())
        }
    }
}

/// Shared in-memory slot, optionally failing reads or writes.
///
/// Clones share the same slot, so a test can keep a handle after moving one
/// into a store and inspect what was written.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
    fail_reads: bool,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `raw`.
    pub fn with_contents(raw: impl Into<String>) -> Self {
        let storage = Self::default();
        storage.slot.replace(Some(raw.into()));
        storage
    }

    /// Make every subsequent read fail.
    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every subsequent write fail.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Current contents of the slot.
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read("simulated read failure".to_owned()));
        }
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("simulated write failure".to_owned()));
        }
        self.slot.replace(Some(raw.to_owned()));
        Ok(())
    }
}
