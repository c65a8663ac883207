//! Driving port for mug writes.

use async_trait::async_trait;

use crate::domain::{Error, Mug, MugId, MugPayload};

/// Mutating operations on mugs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MugsCommand: Send + Sync {
    /// Store a new mug. A dangling user or location id is an
    /// `invalid_request` error.
    async fn create_mug(&self, payload: MugPayload) -> Result<Mug, Error>;

    /// Replace every mutable field of an existing mug.
    async fn update_mug(&self, payload: MugPayload) -> Result<Mug, Error>;

    async fn delete_mug(&self, id: MugId) -> Result<(), Error>;
}
