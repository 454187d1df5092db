use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deck error: {0}")]
    Deck(String),

    #[error("Slide index {index} out of range (deck has {len} slides)")]
    SlideOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
