use thiserror::Error;

pub type ThemeResult<T> = Result<T, ThemeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("theme `{name}` is not registered")]
    NotFound { name: String },

    #[error("no chart theme is available")]
    NoThemeAvailable,

    #[error("observer with id `{id}` is already registered")]
    DuplicateObserver { id: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
