use bcrypt::{hash, verify};
use sha2::{Digest, Sha256};

/// Hash a password using bcrypt.
///
/// # Example
/// ```
/// use firmsite_utils::hash::bcrypt_hash;
///
/// let hashed = bcrypt_hash("my_password");
/// ```
pub fn bcrypt_hash(password: &str) -> String {
    // Using unwrap here since bcrypt errors are very rare with valid input
    hash(password.as_bytes(), 8).unwrap()
}

/// Compare a plaintext password against a bcrypt hash.
///
/// # Example
/// ```
/// use firmsite_utils::hash::{bcrypt_hash, bcrypt_check};
///
/// let hash = bcrypt_hash("my_password");
/// assert!(bcrypt_check("my_password", &hash));
/// assert!(!bcrypt_check("wrong_password", &hash));
/// ```
pub fn bcrypt_check(password: &str, hash: &str) -> bool {
    verify(password.as_bytes(), hash).unwrap_or(false)
}

/// SHA-256 of input bytes as a lowercase hex string of length 64.
#[inline]
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_hash_and_check() {
        let password = "test_password";
        let hash = bcrypt_hash(password);

        assert!(bcrypt_check(password, &hash));
        assert!(!bcrypt_check("wrong_password", &hash));
    }

    #[test]
    fn test_sha256_bytes() {
        let hash = sha256_bytes(b"hello world");
        assert_eq!(hash.len(), 64);
        // Known SHA-256 of "hello world"
        assert_eq!(
            hash,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }
}
