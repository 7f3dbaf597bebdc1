//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::CatalogError;
use quiz_core::model::SettingsError;

/// Errors emitted while assembling a `PracticeService`.
///
/// Session operations themselves never fail; only bootstrap can.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("question catalog is invalid: {0}")]
    Catalog(#[from] CatalogError),
    #[error("session settings are invalid: {0}")]
    Settings(#[from] SettingsError),
}
