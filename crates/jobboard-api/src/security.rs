//! Credential hashing.
//!
//! Bcrypt with a config-tunable cost factor. Comparison timing is the
//! primitive's concern; verification failure and malformed stored digests
//! both come back `false`.

use tracing::warn;

/// Hash a password with the given bcrypt cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Verify a password against a stored digest.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(matches) => matches,
        Err(err) => {
            warn!("password verification failed on malformed digest: {err}");
            false
        }
    }
}
