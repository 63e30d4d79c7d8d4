//! Session manager: the authentication core.
//!
//! `SessionManager` owns the identity directory and the current session,
//! validates login/registration submissions, and mirrors the session to a
//! single slot in a local key-value store so it survives restarts.
//!
//! Operations are asynchronous but not concurrent: consumers serialize
//! their calls (e.g. a submit control is disabled while a login is in
//! flight), and the manager takes `&mut self` rather than locking. Login
//! and register suspend for a fixed simulated latency standing in for the
//! round trip of a real authentication backend; they perform no retries
//! and cannot be cancelled once issued.
//!
//! Persistence failures never surface to consumers: `restore` degrades to
//! "no session", a failed slot delete on logout is ignored, and a failed
//! snapshot write after login/register leaves the in-memory session in
//! place (memory and storage may diverge until the next successful write).

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::models::Identity;
use crate::store::KeyValueStore;

use super::directory::{Directory, DirectoryEntry};
use super::error::{AuthError, ValidationError};

/// Key-value slot mirroring the current session.
pub const SESSION_SLOT: &str = "shutterbox.auth.session";

/// Minimum accepted secret length.
pub const MIN_SECRET_LEN: usize = 6;

/// Fixed suspension before `login`/`register` resolve, matching the mock
/// provider's simulated network delay.
const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

/// Session lifecycle as seen by consumers.
///
/// `Unknown` lasts until `restore` completes; a routing decision taken
/// before then would race the persisted session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unknown,
    Unauthenticated,
    Authenticated,
}

pub struct SessionManager<S: KeyValueStore> {
    store: S,
    directory: Directory,
    session: Option<Identity>,
    state: AuthState,
    latency: Duration,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Manager over `store`, with the directory seeded from the built-in
    /// sample accounts. The session starts in `AuthState::Unknown` until
    /// `restore` runs.
    pub fn new(store: S) -> Self {
        Self {
            store,
            directory: Directory::with_sample_accounts(),
            session: None,
            state: AuthState::Unknown,
            latency: SIMULATED_LATENCY,
        }
    }

    /// Override the simulated latency. Tests run at `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Restore the session persisted by a previous process, if any.
    ///
    /// Absent, malformed, and unreadable slots all degrade to "no
    /// session". Consumers must await this before their first
    /// authenticated/unauthenticated routing decision.
    pub async fn restore(&mut self) -> Option<Identity> {
        let restored = match self.store.get(SESSION_SLOT).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<Identity>(&bytes) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    warn!(error = %e, "Ignoring malformed session snapshot");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read session snapshot");
                None
            }
        };

        self.session = restored.clone();
        self.state = if self.session.is_some() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        };
        debug!(restored = restored.is_some(), "Session restore complete");
        restored
    }

    /// Attempt to sign in with an email/secret pair.
    ///
    /// The match is exact and case-sensitive. On success the session is
    /// set and persisted; on any failure the current session is left
    /// untouched.
    pub async fn login(&mut self, email: &str, secret: &str) -> Result<Identity, AuthError> {
        validate_submission(&[email, secret], secret)?;

        tokio::time::sleep(self.latency).await;

        let identity = self
            .directory
            .authenticate(email, secret)
            .map(DirectoryEntry::identity)
            .ok_or(AuthError::InvalidCredentials)?;

        self.set_session(identity.clone()).await;
        info!(email = %identity.email, "Login successful");
        Ok(identity)
    }

    /// Create a new account and sign it in.
    ///
    /// The new entry joins the in-memory directory only; it will not
    /// survive a process restart, though the session itself does.
    pub async fn register(
        &mut self,
        email: &str,
        secret: &str,
        name: &str,
    ) -> Result<Identity, AuthError> {
        validate_submission(&[email, secret, name], secret)?;

        tokio::time::sleep(self.latency).await;

        if self.directory.find_by_email(email).is_some() {
            return Err(AuthError::AlreadyExists);
        }

        let entry = DirectoryEntry {
            id: self.directory.allocate_id(Utc::now()),
            email: email.to_string(),
            name: name.to_string(),
            secret: secret.to_string(),
        };
        let identity = entry.identity();
        self.directory.insert(entry);

        self.set_session(identity.clone()).await;
        info!(email = %identity.email, "Registration successful");
        Ok(identity)
    }

    /// Sign out: clear the in-memory session and delete the persisted
    /// slot. Always succeeds; a failed delete is logged and ignored.
    pub async fn logout(&mut self) {
        self.session = None;
        self.state = AuthState::Unauthenticated;
        if let Err(e) = self.store.delete(SESSION_SLOT).await {
            warn!(error = %e, "Failed to delete session snapshot");
        }
        info!("Logged out");
    }

    // =========================================================================
    // State reads
    // =========================================================================

    /// The current session, if signed in. Synchronous.
    pub fn current_session(&self) -> Option<&Identity> {
        self.session.as_ref()
    }

    /// Whether a session is currently active. `false` while the state is
    /// still `Unknown`.
    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Set the in-memory session first, then mirror it to the slot. A
    /// failed write leaves memory and storage diverged until the next
    /// successful write.
    async fn set_session(&mut self, identity: Identity) {
        self.session = Some(identity.clone());
        self.state = AuthState::Authenticated;
        self.persist_session(&identity).await;
    }

    async fn persist_session(&self, identity: &Identity) {
        let bytes = match serde_json::to_vec(identity) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Failed to serialize session snapshot");
                return;
            }
        };
        if let Err(e) = self.store.set(SESSION_SLOT, &bytes).await {
            warn!(error = %e, "Failed to persist session snapshot");
        }
    }
}

/// Fixed-order submission checks: required fields first, then secret
/// length. First failure wins, before any directory or storage access.
fn validate_submission(required: &[&str], secret: &str) -> Result<(), ValidationError> {
    if required.iter().any(|field| field.is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    if secret.len() < MIN_SECRET_LEN {
        return Err(ValidationError::SecretTooShort);
    }
    Ok(())
}
