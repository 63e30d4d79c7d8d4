//! Core library for Shutterbox session management.
//!
//! Shutterbox is a small gallery app with accounts; this crate holds its
//! only stateful, contract-bearing piece: the session core. It provides:
//!
//! - `SessionManager`: login/registration against an in-memory identity
//!   directory, with the current session mirrored to a durable local
//!   key-value slot so it survives process restarts
//! - `KeyValueStore`: the storage contract, with `FileStore` and
//!   `MemoryStore` backends
//! - `Config`: persisted application configuration
//!
//! Credential checking is a local mock: secrets are compared in plaintext
//! against an in-process directory seeded with sample accounts. This is a
//! stand-in for a real authentication backend, not a security model.

pub mod auth;
pub mod config;
pub mod models;
pub mod store;

pub use auth::{AuthError, AuthState, SessionManager, ValidationError};
pub use config::Config;
pub use models::Identity;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
