use registrar_shared::ValidationError;
use registrar_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Deliberately the same for unknown users and wrong passwords.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl PortalError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        PortalError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
