//! Authentication module for managing user sessions.
//!
//! This module provides:
//! - `SessionManager`: login/registration against the identity directory,
//!   with the current session mirrored to a local key-value slot
//! - `AuthError` / `ValidationError`: user-facing failure kinds
//!
//! The directory of known identities lives in memory for the process
//! lifetime; registrations do not survive a restart. Only the current
//! session is persisted.

pub mod directory;
pub mod error;
pub mod manager;

pub use error::{AuthError, ValidationError};
pub use manager::{AuthState, SessionManager, MIN_SECRET_LEN, SESSION_SLOT};
