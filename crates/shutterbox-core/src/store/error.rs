use thiserror::Error;

/// Storage backend failures.
///
/// The session manager logs these and degrades instead of surfacing them
/// to consumers; they are public so embedders driving a `KeyValueStore`
/// directly can still match on them.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
