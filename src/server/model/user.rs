//! User domain models and parameters.
//!
//! Provides the account domain model with role and blocking state, plus
//! parameter types for registration, listing and moderation operations.

use chrono::{DateTime, Utc};

pub use entity::user::Role;

use crate::model::user::{PaginatedUsersDto, UserDto};

/// User account with role, blocking state and subscription metadata.
///
/// The password hash stays on the entity model; it is dropped here so no
/// downstream layer can leak it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Blocked accounts fail every guarded request.
    pub is_blocked: bool,
    pub plan_id: Option<i32>,
    pub plan_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role,
            is_blocked: entity.is_blocked,
            plan_id: entity.plan_id,
            plan_expires_at: entity.plan_expires_at,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.as_str().to_string(),
            is_blocked: self.is_blocked,
            plan_id: self.plan_id,
            plan_expires_at: self.plan_expires_at,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating an account.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

/// Parameters for paginated user queries with an optional role filter.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
    /// Restrict the listing to one role when set.
    pub role: Option<Role>,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    /// Converts the paginated users domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
