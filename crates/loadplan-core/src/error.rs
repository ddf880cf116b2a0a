use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadoutError {
    #[error("invalid item '{name}': {reason}")]
    InvalidItem { name: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("nothing to pack: batch expands to zero items")]
    Empty,
}

pub type Result<T> = std::result::Result<T, LoadoutError>;
