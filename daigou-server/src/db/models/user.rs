//! User Model (DB)

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// User record as stored — 密码杂凑只存在这一层
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<RecordId>,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl From<User> for shared::models::User {
    fn from(u: User) -> Self {
        Self {
            id: u.id.as_ref().map(|t| t.key().to_string()).unwrap_or_default(),
            username: u.username,
            role: u.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContent {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = User::hash_password("randy1007").expect("hash");
        let user = User {
            id: None,
            username: "randy".to_string(),
            password_hash: hash,
            role: "admin".to_string(),
        };
        assert!(user.verify_password("randy1007").expect("verify"));
        assert!(!user.verify_password("wrong-password").expect("verify"));
    }
}
