use thiserror::Error;

// Everything the generator and mesh builder can reject
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, TerrainError>;

impl TerrainError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TerrainError::InvalidParameter(msg.into())
    }
}
