//! Company purchase data repository: seat licenses and assignments.
//!
//! The seat counter follows the same guarded-update discipline as the wallet:
//! the increment carries `seats_used < seats_purchased` and the paid check in
//! its WHERE clause, so `0 <= seats_used <= seats_purchased` holds no matter
//! how requests interleave.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Provider status copied onto purchases that have settled.
pub const CHECKOUT_STATUS_PAID: &str = "paid";
/// Status a purchase starts in before the provider reports anything.
pub const CHECKOUT_STATUS_PENDING: &str = "pending";

pub struct PurchaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PurchaseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending purchase with no seats used
    pub async fn create(
        &self,
        company_id: i32,
        course_id: i32,
        seats_purchased: i32,
    ) -> Result<entity::company_purchase::Model, DbErr> {
        entity::company_purchase::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            course_id: ActiveValue::Set(course_id),
            seats_purchased: ActiveValue::Set(seats_purchased),
            seats_used: ActiveValue::Set(0),
            checkout_session_id: ActiveValue::Set(None),
            checkout_status: ActiveValue::Set(CHECKOUT_STATUS_PENDING.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a purchase by ID
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::company_purchase::Model>, DbErr> {
        entity::prelude::CompanyPurchase::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Stores the provider session id on a purchase
    pub async fn set_checkout_session(&self, id: i32, session_id: &str) -> Result<(), DbErr> {
        entity::prelude::CompanyPurchase::update_many()
            .filter(entity::company_purchase::Column::Id.eq(id))
            .col_expr(
                entity::company_purchase::Column::CheckoutSessionId,
                Expr::value(session_id),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Copies a provider payment status onto a purchase
    ///
    /// The status is stored verbatim; no state machine of our own sits on top
    /// of it.
    pub async fn set_checkout_status(&self, id: i32, status: &str) -> Result<(), DbErr> {
        entity::prelude::CompanyPurchase::update_many()
            .filter(entity::company_purchase::Column::Id.eq(id))
            .col_expr(
                entity::company_purchase::Column::CheckoutStatus,
                Expr::value(status),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets purchases still pending that have a stored provider session
    ///
    /// The reconciliation sweep polls exactly this set.
    pub async fn get_pending_with_session(
        &self,
    ) -> Result<Vec<entity::company_purchase::Model>, DbErr> {
        entity::prelude::CompanyPurchase::find()
            .filter(
                entity::company_purchase::Column::CheckoutStatus.eq(CHECKOUT_STATUS_PENDING),
            )
            .filter(entity::company_purchase::Column::CheckoutSessionId.is_not_null())
            .all(self.db)
            .await
    }

    /// Gets a company's purchases with pagination and course titles, newest first
    pub async fn get_by_company_paginated(
        &self,
        company_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<
        (
            Vec<(
                entity::company_purchase::Model,
                Option<entity::course::Model>,
            )>,
            u64,
        ),
        DbErr,
    > {
        let query = entity::prelude::CompanyPurchase::find()
            .filter(entity::company_purchase::Column::CompanyId.eq(company_id))
            .order_by_desc(entity::company_purchase::Column::CreatedAt);

        let total = query.clone().count(self.db).await?;
        let purchases = query
            .find_also_related(entity::prelude::Course)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        Ok((purchases, total))
    }

    /// Claims a seat on a paid purchase.
    ///
    /// Single guarded increment: the UPDATE requires the purchase to be paid
    /// and to have a free seat, so the counter never exceeds
    /// `seats_purchased`.
    ///
    /// # Returns
    /// - `Ok(true)`: A seat was claimed
    /// - `Ok(false)`: No free seat, purchase unpaid, or no such purchase
    pub async fn try_claim_seat(&self, purchase_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CompanyPurchase::update_many()
            .col_expr(
                entity::company_purchase::Column::SeatsUsed,
                Expr::col(entity::company_purchase::Column::SeatsUsed).add(1),
            )
            .filter(entity::company_purchase::Column::Id.eq(purchase_id))
            .filter(
                entity::company_purchase::Column::CheckoutStatus.eq(CHECKOUT_STATUS_PAID),
            )
            .filter(
                Expr::col(entity::company_purchase::Column::SeatsUsed)
                    .lt(Expr::col(entity::company_purchase::Column::SeatsPurchased)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns a claimed seat, flooring the counter at zero.
    ///
    /// # Returns
    /// - `Ok(true)`: The counter was decremented
    /// - `Ok(false)`: The counter was already zero or no such purchase
    pub async fn release_seat(&self, purchase_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CompanyPurchase::update_many()
            .col_expr(
                entity::company_purchase::Column::SeatsUsed,
                Expr::col(entity::company_purchase::Column::SeatsUsed).sub(1),
            )
            .filter(entity::company_purchase::Column::Id.eq(purchase_id))
            .filter(entity::company_purchase::Column::SeatsUsed.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether an employee already holds a seat on a purchase
    pub async fn assignment_exists(
        &self,
        purchase_id: i32,
        employee_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::CourseAssignment::find()
            .filter(entity::course_assignment::Column::PurchaseId.eq(purchase_id))
            .filter(entity::course_assignment::Column::EmployeeId.eq(employee_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates an assignment row for a claimed seat
    pub async fn create_assignment(
        &self,
        purchase_id: i32,
        employee_id: i32,
    ) -> Result<entity::course_assignment::Model, DbErr> {
        entity::course_assignment::ActiveModel {
            purchase_id: ActiveValue::Set(purchase_id),
            employee_id: ActiveValue::Set(employee_id),
            assigned_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes an assignment row
    ///
    /// # Returns
    /// - `Ok(true)`: The assignment existed and was removed
    /// - `Ok(false)`: No such assignment
    pub async fn delete_assignment(
        &self,
        purchase_id: i32,
        employee_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::CourseAssignment::delete_many()
            .filter(entity::course_assignment::Column::PurchaseId.eq(purchase_id))
            .filter(entity::course_assignment::Column::EmployeeId.eq(employee_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a purchase's assignments with employee rows, oldest first
    pub async fn get_assignments(
        &self,
        purchase_id: i32,
    ) -> Result<
        Vec<(
            entity::course_assignment::Model,
            Option<entity::employee::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::CourseAssignment::find()
            .filter(entity::course_assignment::Column::PurchaseId.eq(purchase_id))
            .order_by_asc(entity::course_assignment::Column::AssignedAt)
            .find_also_related(entity::prelude::Employee)
            .all(self.db)
            .await
    }

    /// Gets all assignments held by an employee
    pub async fn get_assignments_for_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<entity::course_assignment::Model>, DbErr> {
        entity::prelude::CourseAssignment::find()
            .filter(entity::course_assignment::Column::EmployeeId.eq(employee_id))
            .all(self.db)
            .await
    }

    /// Gets several purchases by id in one query
    pub async fn get_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::company_purchase::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::CompanyPurchase::find()
            .filter(entity::company_purchase::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }
}
