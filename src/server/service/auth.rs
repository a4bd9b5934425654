//! Account registration and credential verification.
//!
//! Passwords are stored as `salt$digest` where the digest is a hex-encoded
//! SHA-256 over the salt concatenated with the password. The salt is a random
//! 16-character alphanumeric string per account.

use rand::Rng;
use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use crate::server::{
    data::{user::UserRepository, wallet::WalletRepository},
    error::{auth::AuthError, AppError},
    model::user::{RegisterUserParam, Role, User},
};

const SALT_LENGTH: usize = 16;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Rejects admin self-registration and duplicate emails. Student and
    /// teacher accounts get a zero-balance wallet; companies settle through
    /// hosted checkout and carry none.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::AuthErr(EmailTaken))` - Email already registered
    /// - `Err(AppError::BadRequest)` - Attempted admin registration
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        if param.role == Role::Admin {
            return Err(AppError::BadRequest(
                "Admin accounts cannot be self-registered".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo
            .find_entity_by_email(&param.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(&param.password);
        let user = user_repo
            .create(param.email, param.name, password_hash, param.role)
            .await?;

        if matches!(user.role, Role::Student | Role::Teacher) {
            WalletRepository::new(self.db).create(user.id).await?;
        }

        Ok(user)
    }

    /// Verifies credentials for login.
    ///
    /// The same error covers unknown emails and wrong passwords so the
    /// response does not reveal which one failed. Blocked accounts are
    /// rejected even with correct credentials.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid, account active
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::AuthErr(AccountBlocked))` - Account is blocked
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(entity) = user_repo.find_entity_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&entity.password_hash, password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if entity.is_blocked {
            return Err(AuthError::AccountBlocked(entity.id).into());
        }

        Ok(User::from_entity(entity))
    }
}

/// Hashes a password with a fresh random salt into `salt$digest` form.
pub fn hash_password(password: &str) -> String {
    let salt = generate_salt();
    let digest = digest_password(&salt, password);
    format!("{}${}", salt, digest)
}

/// Checks a password against a stored `salt$digest` hash.
///
/// A malformed stored hash fails verification rather than panicking.
pub fn verify_password(stored: &str, password: &str) -> bool {
    let Some((salt, digest)) = stored.split_once('$') else {
        return false;
    };

    digest_password(salt, password) == digest
}

fn digest_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generates a random alphanumeric salt.
fn generate_salt() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..SALT_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
