#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid launch parameters: {0}")]
    InvalidParameters(String),
    #[error("Invalid target: {0}")]
    InvalidTarget(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
