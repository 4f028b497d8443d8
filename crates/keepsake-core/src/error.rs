use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported media file: {0}")]
    UnsupportedMedia(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Media not found: {0}")]
    MediaNotFound(String),

    #[error("Letter not found: {0}")]
    LetterNotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
