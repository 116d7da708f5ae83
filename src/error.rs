//! Unified error type.

use crate::todo::StoreError;

/// The error type returned by the crate's fallible startup operations.
///
/// Routing outcomes (404, 405) and handler failures are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure failures: binding the listener or opening the database.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("store: {0}")]
    Store(#[from] StoreError),
}
