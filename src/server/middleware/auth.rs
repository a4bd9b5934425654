use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

/// Permission required by an endpoint.
///
/// Admins satisfy every permission; the role variants additionally accept
/// exactly that role.
pub enum Permission {
    Student,
    Teacher,
    Company,
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks the required permissions.
    ///
    /// Rejects requests without a session user, sessions whose user has been
    /// deleted, blocked accounts, and role mismatches. An empty permission
    /// slice means "any logged-in user".
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated, unblocked user satisfying all permissions
    /// - `Err(AppError::AuthErr(_))` - Any of the checks above failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if user.is_blocked {
            return Err(AuthError::AccountBlocked(user_id).into());
        }

        for permission in permissions {
            let (allowed, required) = match permission {
                Permission::Student => (user.role == Role::Student, "student"),
                Permission::Teacher => (user.role == Role::Teacher, "teacher"),
                Permission::Company => (user.role == Role::Company, "company"),
                Permission::Admin => (user.role == Role::Admin, "admin"),
            };

            if !allowed && user.role != Role::Admin {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!(
                        "User with role {} attempted an endpoint requiring {}",
                        user.role.as_str(),
                        required
                    ),
                )
                .into());
            }
        }

        Ok(user)
    }
}
