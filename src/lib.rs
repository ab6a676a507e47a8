//! # koperasi-web
//!
//! Leptos + WASM frontend for the cooperative ("koperasi") membership system.
//! A thin client over the backend REST API: members see their savings
//! (simpanan) and loan (piutang) balances and transaction history, while
//! administrators manage members, ledger entries, and the storefront catalog.
//!
//! All business logic lives server-side; this crate renders pages, holds the
//! authenticated session, guards routes by role, and issues HTTP calls.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;
