use thiserror::Error;

/// Error kinds surfaced by the service layer.
///
/// `Validation` carries a user-facing message; `Forbidden` and `NotFound`
/// deliberately carry none so that handlers cannot leak why access was denied
/// or what exists. `Database` wraps the underlying sqlx failure — callers log
/// it and show a generic message.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("access denied")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("file is not valid UTF-8 text")]
    Decoding,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
