//! Employee factory for creating test employee entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees belonging to a company account.
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    name: String,
    email: String,
    is_active: bool,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory for `company_id`.
    ///
    /// Defaults:
    /// - name: `"Employee {id}"`
    /// - email: `"employee{id}@example.com"`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            company_id,
            name: format!("Employee {}", id),
            email: format!("employee{}@example.com", id),
            is_active: true,
        }
    }

    /// Sets the employee name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the employee email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the active flag.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the employee entity into the database.
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            company_id: ActiveValue::Set(self.company_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active employee with default values for `company_id`.
pub async fn create_employee(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db, company_id).build().await
}
