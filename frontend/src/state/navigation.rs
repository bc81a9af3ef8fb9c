use thiserror::Error;

use crate::utils::storage as storage_utils;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no window to navigate in")]
    NoWindow,
    #[error("browser refused navigation to {0}")]
    Refused(String),
}

pub trait Navigator {
    fn navigate(&self, path: &str) -> Result<(), NavigationError>;
}

/// Full page load; `/` and `/team` are served outside this app.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        let window = storage_utils::window().map_err(|_| NavigationError::NoWindow)?;
        window
            .location()
            .set_href(path)
            .map_err(|_| NavigationError::Refused(path.to_string()))
    }
}
