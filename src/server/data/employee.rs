use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::employee::{CreateEmployeeParam, UpdateEmployeeParam};

pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an employee on a company roster
    pub async fn create(
        &self,
        param: CreateEmployeeParam,
    ) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            company_id: ActiveValue::Set(param.company_id),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets an employee by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find_by_id(id).one(self.db).await
    }

    /// Finds an employee on a company roster by email
    ///
    /// Emails are unique per company, enforced through this lookup before
    /// inserts and updates.
    pub async fn find_by_company_and_email(
        &self,
        company_id: i32,
        email: &str,
    ) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find()
            .filter(entity::employee::Column::CompanyId.eq(company_id))
            .filter(entity::employee::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Replaces an employee's editable fields
    pub async fn update(
        &self,
        param: UpdateEmployeeParam,
    ) -> Result<entity::employee::Model, DbErr> {
        let employee = entity::prelude::Employee::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Employee {} not found",
                param.id
            )))?;

        let mut active_model: entity::employee::ActiveModel = employee.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.email = ActiveValue::Set(param.email);
        active_model.is_active = ActiveValue::Set(param.is_active);

        active_model.update(self.db).await
    }

    /// Deletes an employee by ID
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Employee::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets a company's employees with pagination, ordered alphabetically
    ///
    /// # Returns
    /// - `Ok((employees, total))`: Employees for the page and total roster size
    pub async fn get_by_company_paginated(
        &self,
        company_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::employee::Model>, u64), DbErr> {
        let paginator = entity::prelude::Employee::find()
            .filter(entity::employee::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::employee::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let employees = paginator.fetch_page(page).await?;

        Ok((employees, total))
    }
}
