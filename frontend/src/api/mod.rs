mod auth;
pub mod client;
pub mod rules;
pub mod types;

pub use auth::LOGIN_ENDPOINT;
pub use client::*;
pub use types::*;
