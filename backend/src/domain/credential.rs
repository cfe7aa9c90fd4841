//! Password credential storage and verification.
//!
//! Credentials are held as a salted SHA-256 digest. Plaintext passwords are
//! wrapped in [`Zeroizing`] buffers so they are wiped on drop, and digest
//! comparison is constant time to avoid leaking match prefixes.

use std::fmt;

use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Minimum allowed password length.
pub const PASSWORD_MIN: usize = 3;

/// Length of the per-credential random salt in bytes.
const SALT_LEN: usize = 16;

/// Length of the SHA-256 digest in bytes.
const DIGEST_LEN: usize = 32;

/// Validation errors returned by [`Password::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordValidationError {
    /// The password was empty.
    EmptyPassword,
    /// The password was shorter than the minimum length.
    PasswordTooShort {
        /// Minimum accepted length in characters.
        min: usize,
    },
}

impl fmt::Display for PasswordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for PasswordValidationError {}

/// Validated plaintext password accepted at registration.
///
/// ## Invariants
/// - Non-empty and at least [`PASSWORD_MIN`] characters long.
/// - Retains caller-provided whitespace to avoid surprising credential
///   comparisons.
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a [`Password`].
    pub fn new(password: impl Into<String>) -> Result<Self, PasswordValidationError> {
        let password = password.into();
        if password.is_empty() {
            return Err(PasswordValidationError::EmptyPassword);
        }
        if password.chars().count() < PASSWORD_MIN {
            return Err(PasswordValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        Ok(Self(Zeroizing::new(password)))
    }

    /// Plaintext view used when deriving the stored digest.
    pub fn reveal(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(..)")
    }
}

/// Stored password credential: per-user salt plus salted SHA-256 digest.
#[derive(Clone)]
pub struct PasswordHash {
    salt: [u8; SALT_LEN],
    digest: [u8; DIGEST_LEN],
}

impl PasswordHash {
    /// Derive a credential from a validated password with a fresh random salt.
    pub fn derive(password: &Password) -> Self {
        let mut salt = [0_u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let digest = Self::digest_with_salt(&salt, password.reveal());
        Self { salt, digest }
    }

    /// Check a login candidate against the stored digest in constant time.
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate_digest = Self::digest_with_salt(&self.salt, candidate);
        self.digest
            .as_slice()
            .ct_eq(candidate_digest.as_slice())
            .into()
    }

    fn digest_with_salt(salt: &[u8; SALT_LEN], password: &str) -> [u8; DIGEST_LEN] {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password.as_bytes());
        hasher.finalize().into()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print salt or digest material.
        f.write_str("PasswordHash(..)")
    }
}
