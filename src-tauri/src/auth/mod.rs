// Admin authentication
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::db::models::AdminCredential;
use crate::error::AuthFailure;

/// Hex-encoded SHA-256 digest of a plaintext password.
///
/// Unsalted, so existing credential rows keep verifying.
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check an entered username and password against the stored credential.
pub fn verify_login(
    stored: Option<&AdminCredential>,
    username: &str,
    password: &str,
) -> Result<(), AuthFailure> {
    let stored = stored.ok_or(AuthFailure::NoCredential)?;

    let input_hash = hash_password(password);
    let hash_matches = bool::from(input_hash.as_bytes().ct_eq(stored.password_hash.as_bytes()));

    if username == stored.username && hash_matches {
        Ok(())
    } else {
        Err(AuthFailure::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(password: &str) -> AdminCredential {
        AdminCredential {
            id: 1,
            username: "admin".to_string(),
            password_hash: hash_password(password),
        }
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_password("secret"),
            "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
        );
    }

    #[test]
    fn test_correct_password_succeeds() {
        let stored = admin("secret");
        assert_eq!(verify_login(Some(&stored), "admin", "secret"), Ok(()));
    }

    #[test]
    fn test_wrong_password_fails() {
        let stored = admin("secret");
        assert_eq!(
            verify_login(Some(&stored), "admin", "wrong"),
            Err(AuthFailure::InvalidCredentials)
        );
    }

    #[test]
    fn test_wrong_username_fails() {
        let stored = admin("secret");
        assert_eq!(
            verify_login(Some(&stored), "Admin", "secret"),
            Err(AuthFailure::InvalidCredentials)
        );
    }

    #[test]
    fn test_missing_credential_always_fails() {
        assert_eq!(verify_login(None, "admin", "secret"), Err(AuthFailure::NoCredential));
        assert_eq!(verify_login(None, "", ""), Err(AuthFailure::NoCredential));
    }
}
