use argon2::{
    Argon2, PasswordVerifier,
    password_hash::PasswordHash,
};

/// Credential verification for the admin login. The guard's state machine
/// only ever sees the boolean outcome, so the backing account store can be
/// swapped without touching it.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Default verifier: one configured admin account, Argon2-hashed password.
pub struct ArgonCredentials {
    username: String,
    password_hash: String,
}

impl ArgonCredentials {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl CredentialVerifier for ArgonCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        if username != self.username {
            return false;
        }
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            tracing::error!("admin password hash is not a valid PHC string");
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::PasswordHasher;
    use argon2::password_hash::SaltString;
    use password_hash::rand_core::OsRng;

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn accepts_matching_credentials() {
        let verifier = ArgonCredentials::new("admin", hash("hunter2"));
        assert!(verifier.verify("admin", "hunter2"));
    }

    #[test]
    fn rejects_wrong_password_and_unknown_user() {
        let verifier = ArgonCredentials::new("admin", hash("hunter2"));
        assert!(!verifier.verify("admin", "hunter3"));
        assert!(!verifier.verify("root", "hunter2"));
    }

    #[test]
    fn rejects_on_malformed_hash() {
        let verifier = ArgonCredentials::new("admin", "not-a-hash");
        assert!(!verifier.verify("admin", "anything"));
    }
}
