//! Shared reactive state provided through context at the app root.

pub mod cache;
pub mod toasts;
