use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no letter left to suggest for pattern '{pattern}'")]
    EngineExhausted { pattern: String },
    #[error("the dictionary contains no words")]
    InvalidDictionary,
    #[error("'{0}' cannot be used as a secret word")]
    InvalidSecret(String),
    #[error("the game is already over")]
    GameOver,
}

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("no usable words found in dictionary")]
    Empty,
}
