pub mod navigation;
pub mod session;
pub mod toast;
