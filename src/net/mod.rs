//! Backend REST access: error taxonomy, HTTP wrapper, typed API surface,
//! and wire types with tolerant decoding.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
