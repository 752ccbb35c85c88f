/**
 * Password Hashing
 *
 * bcrypt hashing and verification with a configurable work factor. The
 * hasher keeps a dummy hash computed at startup so a login for an unknown
 * email still pays for one bcrypt verification.
 */

use bcrypt::BcryptResult;

/// bcrypt hasher shared by registration and login
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: String,
}

impl PasswordHasher {
    /// Build a hasher with the given bcrypt cost (4 to 31)
    pub fn new(cost: u32) -> BcryptResult<Self> {
        let dummy_hash = bcrypt::hash("dummy-password-for-timing", cost)?;
        Ok(Self { cost, dummy_hash })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn hash(&self, password: &str) -> BcryptResult<String> {
        bcrypt::hash(password, self.cost)
    }

    pub fn verify(&self, password: &str, hash: &str) -> BcryptResult<bool> {
        bcrypt::verify(password, hash)
    }

    /// Run a verification that always fails, for lookups that found no user
    pub fn verify_dummy(&self, password: &str) {
        let _ = bcrypt::verify(password, &self.dummy_hash);
    }
}
