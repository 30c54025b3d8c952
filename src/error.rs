use thiserror::Error;

#[derive(Error, Debug)]
pub enum AffixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path}: {message}")]
    BadFileFormat { path: String, message: String },

    #[error("{path}:{line}: Affix '{flag}' is corrupt")]
    CorruptRule { path: String, line: usize, flag: char },

    #[error("Invalid dictionary format: {0}")]
    InvalidDictionary(String),

    #[error("No affix file loaded")]
    NoAffixFile,

    #[error("No dictionary loaded")]
    NoDictionary,
}

pub type Result<T> = std::result::Result<T, AffixError>;