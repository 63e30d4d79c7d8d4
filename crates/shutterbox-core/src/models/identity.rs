use serde::{Deserialize, Serialize};

/// An authenticated account, as handed to UI consumers and persisted to the
/// local session slot. Never carries the account secret.
///
/// The `id` is immutable once assigned at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
}
