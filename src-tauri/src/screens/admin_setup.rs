// First-run admin credential setup
use serde::Deserialize;

use crate::auth::hash_password;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSetupForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl AdminSetupForm {
    /// Validate the form and return `(username, password_hash)` ready to store.
    pub fn into_credential(self) -> AppResult<(String, String)> {
        if self.username.trim().is_empty() {
            return Err(AppError::validation("Username must not be empty"));
        }
        if self.password.is_empty() {
            return Err(AppError::validation("Password must not be empty"));
        }
        if self.password != self.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }

        let password_hash = hash_password(&self.password);
        Ok((self.username, password_hash))
    }
}
