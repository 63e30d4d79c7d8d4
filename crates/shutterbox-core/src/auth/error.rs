use thiserror::Error;

/// Submission-time field validation failures.
///
/// Checked in fixed order (required fields, then secret length) before any
/// directory lookup or storage access.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Password must be at least 6 characters")]
    SecretTooShort,
}

/// Failures returned to consumers by `login` and `register`.
///
/// These are result values with human-readable messages, never panics;
/// storage failures are not represented here because the session manager
/// logs and swallows them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    AlreadyExists,
}
