use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Decoded QR payload carries neither a `Link:` marker nor an asset path.
    #[error("not a recognized asset code")]
    UnrecognizedPayload,

    /// A candidate identifier was extracted but is not usable as an asset id.
    #[error("QR payload did not contain a usable asset id: {0:?}")]
    MalformedAssetId(String),

    /// The backend confirmed the identifier does not exist.
    #[error("asset with ID/barcode \"{0}\" not found")]
    NotFound(String),

    /// Network or server failure, distinct from a confirmed absence.
    #[error("request failed: {0}")]
    Transient(String),

    #[error("configuration error: {0}")]
    Config(#[from] std::env::VarError),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transient(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
