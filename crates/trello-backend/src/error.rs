use board_core::BoardError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrelloError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, TrelloError>;

impl From<TrelloError> for BoardError {
    fn from(err: TrelloError) -> Self {
        match err {
            TrelloError::Http(e) => BoardError::Http(e.to_string()),
            TrelloError::Parse(e) => BoardError::Parse(e.to_string()),
            TrelloError::Io(e) => BoardError::Io(e.to_string()),
            TrelloError::Unauthorized => BoardError::Unauthorized,
            TrelloError::Api { status, message } => BoardError::Api { status, message },
        }
    }
}
