// Application error taxonomy shared by the screen layer and command handlers
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a login attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("No admin credentials found")]
    NoCredential,

    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl AuthFailure {
    /// Dialog title shown with the warning
    pub fn title(&self) -> &'static str {
        match self {
            AuthFailure::NoCredential => "Error",
            AuthFailure::InvalidCredentials => "Login Failed",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Bad user input, or an action that is not available on the current screen.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Authentication(#[from] AuthFailure),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::Authentication(_) => "authentication",
            AppError::Storage(_) => "storage",
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Storage(format!("{:#}", e))
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

// The webview receives `{ kind, message }` and picks inline text or a blocking dialog from `kind`.
impl Serialize for AppError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AppError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

pub type AppResult<T> = Result<T, AppError>;
