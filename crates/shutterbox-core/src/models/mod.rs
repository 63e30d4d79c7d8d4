//! Data models for Shutterbox accounts.
//!
//! - `Identity`: an authenticated account as exposed to consumers

pub mod identity;

pub use identity::Identity;
