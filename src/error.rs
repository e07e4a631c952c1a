#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AppError {
    fn from(_err: reqwest::Error) -> Self {
        AppError::Transport(crate::api::client::NETWORK_ERROR_MESSAGE.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
