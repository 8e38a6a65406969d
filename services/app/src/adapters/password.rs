//! services/app/src/adapters/password.rs
//!
//! The Argon2 implementation of the `PasswordScheme` port. The core stores
//! whatever opaque string this produces and never interprets it.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use markbook_core::ports::{PasswordScheme, PortError, PortResult};

/// Salted Argon2id hashing with the library's default parameters.
#[derive(Default)]
pub struct Argon2Scheme;

impl Argon2Scheme {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordScheme for Argon2Scheme {
    fn hash(&self, password: &str) -> PortResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PortError::Unexpected(format!("Failed to hash password: {e}")))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_the_original_password() {
        let scheme = Argon2Scheme::new();
        let hash = scheme.hash("s3cret").unwrap();

        assert_ne!(hash, "s3cret");
        assert!(scheme.verify("s3cret", &hash));
        assert!(!scheme.verify("S3CRET", &hash));
        assert!(!scheme.verify("s3cret ", &hash));
    }

    #[test]
    fn garbage_hash_never_verifies() {
        let scheme = Argon2Scheme::new();
        assert!(!scheme.verify("s3cret", "not-a-phc-string"));
    }
}
