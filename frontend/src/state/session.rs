//! Browser-scoped key-value store holding the session token.

use leptos::*;
use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::utils::storage::{self as storage_utils, StorageError};

/// Key the session token is persisted under.
pub const TOKEN_KEY: &str = "token";

pub trait SessionStore {
    /// Removes every entry, not only the ones this app wrote.
    fn clear(&self) -> Result<(), StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn get(&self, key: &str) -> Option<String>;
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn clear(&self) -> Result<(), StorageError> {
        storage_utils::local_storage()?
            .clear()
            .map_err(|_| StorageError::ClearFailed)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        storage_utils::local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Rejected { key: key.to_string() })
    }

    fn get(&self, key: &str) -> Option<String> {
        storage_utils::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }
}

/// In-process store used off-browser and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl SessionStore for MemorySessionStore {
    fn clear(&self) -> Result<(), StorageError> {
        self.entries.borrow_mut().clear();
        Ok(())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

#[derive(Clone)]
pub struct SessionContext(pub Rc<dyn SessionStore>);

pub fn provide_session_store(store: Rc<dyn SessionStore>) {
    provide_context(SessionContext(store));
}

/// Falls back to `localStorage` when no store was provided.
pub fn use_session_store() -> Rc<dyn SessionStore> {
    use_context::<SessionContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Rc::new(LocalSessionStore))
}
