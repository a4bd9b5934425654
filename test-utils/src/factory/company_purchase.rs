//! Company purchase factory for creating test seat-license purchases.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating company course purchases.
///
/// Defaults to a paid purchase of 5 seats with no seats used, which is the
/// state most assignment tests start from.
pub struct CompanyPurchaseFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    course_id: i32,
    seats_purchased: i32,
    seats_used: i32,
    checkout_session_id: Option<String>,
    checkout_status: String,
}

impl<'a> CompanyPurchaseFactory<'a> {
    /// Creates a new CompanyPurchaseFactory for `company_id` and `course_id`.
    pub fn new(db: &'a DatabaseConnection, company_id: i32, course_id: i32) -> Self {
        Self {
            db,
            company_id,
            course_id,
            seats_purchased: 5,
            seats_used: 0,
            checkout_session_id: None,
            checkout_status: "paid".to_string(),
        }
    }

    /// Sets the number of purchased seats.
    pub fn seats_purchased(mut self, seats: i32) -> Self {
        self.seats_purchased = seats;
        self
    }

    /// Sets the number of used seats.
    pub fn seats_used(mut self, seats: i32) -> Self {
        self.seats_used = seats;
        self
    }

    /// Sets the stored checkout session id.
    pub fn checkout_session_id(mut self, id: impl Into<String>) -> Self {
        self.checkout_session_id = Some(id.into());
        self
    }

    /// Sets the checkout status string.
    pub fn checkout_status(mut self, status: impl Into<String>) -> Self {
        self.checkout_status = status.into();
        self
    }

    /// Builds and inserts the purchase entity into the database.
    pub async fn build(self) -> Result<entity::company_purchase::Model, DbErr> {
        entity::company_purchase::ActiveModel {
            company_id: ActiveValue::Set(self.company_id),
            course_id: ActiveValue::Set(self.course_id),
            seats_purchased: ActiveValue::Set(self.seats_purchased),
            seats_used: ActiveValue::Set(self.seats_used),
            checkout_session_id: ActiveValue::Set(self.checkout_session_id),
            checkout_status: ActiveValue::Set(self.checkout_status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a paid 5-seat purchase with default values.
pub async fn create_paid_purchase(
    db: &DatabaseConnection,
    company_id: i32,
    course_id: i32,
) -> Result<entity::company_purchase::Model, DbErr> {
    CompanyPurchaseFactory::new(db, company_id, course_id)
        .build()
        .await
}
