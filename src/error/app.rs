use thiserror::Error;

use super::{ConfigError, DispatchError, HttpError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn http<E>(error: E) -> Self
    where
        E: Into<HttpError>,
    {
        error.into().into()
    }

    pub fn dispatch<E>(error: E) -> Self
    where
        E: Into<DispatchError>,
    {
        error.into().into()
    }

    /// True for errors caused by bad user input rather than the run itself.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Config(_) | AppError::Clap { .. }
        )
    }
}
