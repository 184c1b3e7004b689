//! Argon2id password hashing, verification, and strength validation.
//!
//! All password hashes use the Argon2id variant with a cryptographically random
//! salt generated via [`OsRng`]. The PHC string format is used for storage so
//! that algorithm parameters and salt are embedded in the hash itself; a cost
//! change therefore only affects hashes created afterwards.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

/// Argon2 cost parameters used when hashing new passwords.
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    params: Params,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl PasswordConfig {
    /// Build a config from explicit costs.
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, argon2::Error> {
        let params = Params::new(memory_kib, iterations, parallelism, None)?;
        Ok(Self { params })
    }

    /// Load cost parameters from environment variables.
    ///
    /// | Env Var              | Default  |
    /// |----------------------|----------|
    /// | `ARGON2_MEMORY_KIB`  | `19456`  |
    /// | `ARGON2_ITERATIONS`  | `2`      |
    /// | `ARGON2_PARALLELISM` | `1`      |
    ///
    /// # Panics
    ///
    /// Panics if a value does not parse or the combination is rejected by
    /// argon2.
    pub fn from_env() -> Self {
        let memory_kib = env_u32("ARGON2_MEMORY_KIB", Params::DEFAULT_M_COST);
        let iterations = env_u32("ARGON2_ITERATIONS", Params::DEFAULT_T_COST);
        let parallelism = env_u32("ARGON2_PARALLELISM", Params::DEFAULT_P_COST);

        Self::new(memory_kib, iterations, parallelism)
            .unwrap_or_else(|e| panic!("Invalid Argon2 parameters: {e}"))
    }

    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

fn env_u32(name: &str, default: u32) -> u32 {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be a valid u32")),
        Err(_) => default,
    }
}

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(
    password: &str,
    config: &PasswordConfig,
) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = config.hasher().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Fails closed: a hash that cannot be parsed is logged and treated as a
/// mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is malformed");
            return false;
        }
    };
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => true,
        Err(argon2::password_hash::Error::Password) => false,
        Err(e) => {
            tracing::warn!(error = %e, "Password verification failed unexpectedly");
            false
        }
    }
}

/// Validate that a password meets minimum strength requirements.
///
/// Currently enforces a minimum character length. Returns `Ok(())` when the
/// password is acceptable, or `Err` with a human-readable explanation.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.chars().count() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    Ok(())
}
