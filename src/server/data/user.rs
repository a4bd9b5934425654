//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts in the database.
//! It handles account creation, lookups, pagination, moderation flags, and subscription
//! columns with conversion between entity models and domain models at the infrastructure
//! boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{Role, User};

/// Repository providing database operations for user accounts.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// The password must already be hashed; this layer never sees plaintext.
    ///
    /// # Arguments
    /// - `email` - Unique account email
    /// - `name` - Display name
    /// - `password_hash` - Salted hash in `salt$digest` form
    /// - `role` - Account role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user as a domain model
    /// - `Err(DbErr)` - Database error, including unique violations on email
    pub async fn create(
        &self,
        email: String,
        name: String,
        password_hash: String,
        role: Role,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            name: ActiveValue::Set(name),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role),
            is_blocked: ActiveValue::Set(false),
            plan_id: ActiveValue::Set(None),
            plan_expires_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user entity by email, including the password hash.
    ///
    /// Only the login path uses this; every other caller goes through
    /// `find_by_id` and receives the hash-free domain model.
    pub async fn find_entity_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used during startup to decide whether the bootstrap admin account must
    /// be created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists in the database
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets users with pagination and an optional role filter.
    ///
    /// Returns a page of users ordered alphabetically by name plus the total
    /// matching count. Used by admin user management.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    /// - `role` - Restrict to one role when `Some`
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
        role: Option<Role>,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find().order_by_asc(entity::user::Column::Name);

        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Sets the blocked flag for a user.
    ///
    /// Blocking takes effect on the user's next guarded request; their session
    /// is not revoked eagerly.
    ///
    /// # Returns
    /// - `Ok(true)` - Flag updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_blocked(&self, user_id: i32, blocked: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::IsBlocked,
                sea_orm::sea_query::Expr::value(blocked),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the subscription columns for a user.
    ///
    /// # Arguments
    /// - `user_id` - Account to update
    /// - `plan_id` - New plan, or `None` to clear the subscription
    /// - `expires_at` - Expiry matching the plan, or `None`
    pub async fn set_plan(
        &self,
        user_id: i32,
        plan_id: Option<i32>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::PlanId,
                sea_orm::sea_query::Expr::value(plan_id),
            )
            .col_expr(
                entity::user::Column::PlanExpiresAt,
                sea_orm::sea_query::Expr::value(expires_at),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Counts users holding the given role.
    pub async fn count_by_role(&self, role: Role) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .count(self.db)
            .await
    }

    /// Counts users currently subscribed to a plan.
    ///
    /// Used to refuse deleting plans that are still in use.
    pub async fn count_subscribers(&self, plan_id: i32) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::PlanId.eq(plan_id))
            .count(self.db)
            .await
    }
}
