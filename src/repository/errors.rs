use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::MalformedResponse(err.to_string())
        } else {
            RepositoryError::Network(err.to_string())
        }
    }
}
