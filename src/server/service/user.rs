//! User service for admin-side account management.

use sea_orm::DatabaseConnection;

use crate::{
    model::admin::PlatformStatsDto,
    server::{
        data::{course::CourseRepository, order::OrderRepository, user::UserRepository},
        error::AppError,
        model::user::{GetAllUsersParam, PaginatedUsers, Role},
    },
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves users with pagination and an optional role filter.
    ///
    /// Returns a paginated collection of users ordered alphabetically by name.
    /// Calculates total pages based on the per_page parameter and total count.
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total_items) = user_repo
            .get_all_paginated(param.page, param.per_page, param.role)
            .await?;

        let total_pages = (total_items as f64 / param.per_page as f64).ceil() as u64;

        Ok(PaginatedUsers {
            users,
            total: total_items,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Blocks or unblocks a user.
    ///
    /// Admins cannot block themselves, and admin accounts cannot be blocked
    /// at all. Blocking is effective on the target's next guarded request.
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::BadRequest)` - Target is an admin or the caller themselves
    pub async fn set_blocked(
        &self,
        acting_admin_id: i32,
        user_id: i32,
        blocked: bool,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if user_id == acting_admin_id {
            return Err(AppError::BadRequest(
                "You cannot block your own account".to_string(),
            ));
        }
        if user.role == Role::Admin {
            return Err(AppError::BadRequest(
                "Admin accounts cannot be blocked".to_string(),
            ));
        }

        user_repo.set_blocked(user_id, blocked).await?;

        Ok(())
    }

    /// Builds the platform-wide counters for the admin overview.
    pub async fn get_platform_stats(&self) -> Result<PlatformStatsDto, AppError> {
        let user_repo = UserRepository::new(self.db);
        let course_repo = CourseRepository::new(self.db);
        let order_repo = OrderRepository::new(self.db);

        let students = user_repo.count_by_role(Role::Student).await?;
        let teachers = user_repo.count_by_role(Role::Teacher).await?;
        let companies = user_repo.count_by_role(Role::Company).await?;
        let courses = course_repo.count_all().await?;
        let orders = order_repo.count_all().await?;
        let revenue_cents = order_repo.all_amounts().await?.into_iter().sum();

        Ok(PlatformStatsDto {
            students,
            teachers,
            companies,
            courses,
            orders,
            revenue_cents,
        })
    }
}
