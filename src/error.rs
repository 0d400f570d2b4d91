use thiserror::Error;

/// Errors surfaced by the idioms in this crate.
///
/// Builder and bound misuse never shows up here: those are rejected by the
/// compiler.
#[derive(Debug, Error)]
pub enum IdiomError {
    #[error("copy unsupported for type {type_name}")]
    CopyUnsupported { type_name: &'static str },

    #[error("sub-object is mutably borrowed: {0}")]
    Borrowed(#[from] std::cell::BorrowError),

    #[error("singleton encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("invalid lexicon config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read lexicon config: {0}")]
    Io(#[from] std::io::Error),
}

impl IdiomError {
    pub fn copy_unsupported<T: ?Sized>() -> Self {
        IdiomError::CopyUnsupported {
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn is_copy_unsupported(&self) -> bool {
        matches!(self, IdiomError::CopyUnsupported { .. })
    }
}

pub type Result<T> = std::result::Result<T, IdiomError>;
