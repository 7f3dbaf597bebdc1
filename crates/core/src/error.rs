use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{ParseIdError, ParseKindError, SettingsError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    ParseKind(#[from] ParseKindError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
