use thiserror::Error;
use web_sys::{Storage, Window};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage rejected write to `{key}`")]
    Rejected { key: String },
    #[error("storage could not be cleared")]
    ClearFailed,
}

pub fn window() -> Result<Window, StorageError> {
    web_sys::window().ok_or_else(|| StorageError::Unavailable("no window object".into()))
}

pub fn local_storage() -> Result<Storage, StorageError> {
    window()?
        .local_storage()
        .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
        .ok_or_else(|| StorageError::Unavailable("no localStorage".into()))
}
