use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        company::{
            AssignSeatDto, AssignmentDto, CreateEmployeeDto, EmployeeDetailDto, EmployeeDto,
            PaginatedEmployeesDto, PaginatedPurchasesDto, PurchaseDto, StartPurchaseDto,
            StartPurchaseResultDto, UpdateEmployeeDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            employee::{CreateEmployeeParam, UpdateEmployeeParam},
            purchase::StartPurchaseParam,
        },
        service::{employee::EmployeeService, purchase::CompanyPurchaseService},
        state::AppState,
    },
};

/// Tag for grouping company endpoints in OpenAPI documentation
pub static COMPANY_TAG: &str = "company";

/// Add an employee to the roster.
///
/// # Access Control
/// - `Company`
///
/// # Returns
/// - `201 Created` - The new employee
/// - `400 Bad Request` - Email already on the roster
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a company account
#[utoipa::path(
    post,
    path = "/api/company/employees",
    tag = COMPANY_TAG,
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Employee created", body = EmployeeDto),
        (status = 400, description = "Email already on the roster", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a company account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;

    let employee = EmployeeService::new(&state.db)
        .create(CreateEmployeeParam {
            company_id: user.id,
            name: payload.name,
            email: payload.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(EmployeeDto::from_entity(employee))))
}

/// Get the employee roster.
///
/// One call returns the page of employees and the total roster size for the
/// pager.
///
/// # Access Control
/// - `Company`
#[utoipa::path(
    get,
    path = "/api/company/employees",
    tag = COMPANY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Roster page with totals", body = PaginatedEmployeesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a company account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employees(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;

    let employees = EmployeeService::new(&state.db)
        .get_paginated(user.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(employees.into_dto())))
}

/// Get one employee with their assigned courses.
///
/// # Access Control
/// - `Company` - And the employee must be on the caller's roster
#[utoipa::path(
    get,
    path = "/api/company/employees/{employee_id}",
    tag = COMPANY_TAG,
    params(
        ("employee_id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee with assignments", body = EmployeeDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee_detail(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;

    let detail = EmployeeService::new(&state.db)
        .get_detail(employee_id, user.id)
        .await?;

    match detail {
        Some(detail) => Ok((StatusCode::OK, Json(detail.into_dto()))),
        None => Err(AppError::NotFound("Employee not found".to_string())),
    }
}

/// Update an employee.
///
/// # Access Control
/// - `Company` - And the employee must be on the caller's roster
#[utoipa::path(
    put,
    path = "/api/company/employees/{employee_id}",
    tag = COMPANY_TAG,
    params(
        ("employee_id" = i32, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployeeDto,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeDto),
        (status = 400, description = "Email already on the roster", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
    Json(payload): Json<UpdateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;

    let employee = EmployeeService::new(&state.db)
        .update(UpdateEmployeeParam {
            id: employee_id,
            company_id: user.id,
            name: payload.name,
            email: payload.email,
            is_active: payload.is_active,
        })
        .await?;

    match employee {
        Some(employee) => Ok((StatusCode::OK, Json(EmployeeDto::from_entity(employee)))),
        None => Err(AppError::NotFound("Employee not found".to_string())),
    }
}

/// Remove an employee from the roster.
///
/// # Access Control
/// - `Company` - And the employee must be on the caller's roster
#[utoipa::path(
    delete,
    path = "/api/company/employees/{employee_id}",
    tag = COMPANY_TAG,
    params(
        ("employee_id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;

    let deleted = EmployeeService::new(&state.db)
        .delete(employee_id, user.id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Start a seat-license purchase through hosted checkout.
///
/// Creates a pending purchase and returns the provider redirect URL. The
/// purchase becomes assignable once its status reconciles to `paid`.
///
/// # Access Control
/// - `Company`
#[utoipa::path(
    post,
    path = "/api/company/purchases",
    tag = COMPANY_TAG,
    request_body = StartPurchaseDto,
    responses(
        (status = 201, description = "Purchase created, redirect to checkout", body = StartPurchaseResultDto),
        (status = 400, description = "Course not available or invalid seats", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a company account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_purchase(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<StartPurchaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;

    let started = CompanyPurchaseService::new(&state.db)
        .start(
            StartPurchaseParam {
                company_id: user.id,
                course_id: payload.course_id,
                seats: payload.seats,
            },
            &state.checkout,
            &state.app_url,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(started.into_dto())))
}

/// Get the company's purchases, newest first.
///
/// # Access Control
/// - `Company`
#[utoipa::path(
    get,
    path = "/api/company/purchases",
    tag = COMPANY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Purchases with seat usage", body = PaginatedPurchasesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a company account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_purchases(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;

    let purchases = CompanyPurchaseService::new(&state.db)
        .get_paginated(user.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(purchases.into_dto())))
}

/// Re-read the provider session and copy its payment status.
///
/// Called from the success redirect so companies don't wait on the sweep.
///
/// # Access Control
/// - `Company` - And the purchase must belong to the caller
#[utoipa::path(
    post,
    path = "/api/company/purchases/{purchase_id}/confirm",
    tag = COMPANY_TAG,
    params(
        ("purchase_id" = i32, Path, description = "Purchase ID")
    ),
    responses(
        (status = 200, description = "Purchase with the copied status", body = PurchaseDto),
        (status = 400, description = "Purchase has no checkout session", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_purchase(
    State(state): State<AppState>,
    session: Session,
    Path(purchase_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;

    let purchase = CompanyPurchaseService::new(&state.db)
        .confirm(purchase_id, user.id, &state.checkout)
        .await?;

    match purchase {
        Some(purchase) => Ok((StatusCode::OK, Json(purchase.into_dto()))),
        None => Err(AppError::NotFound("Purchase not found".to_string())),
    }
}

/// Get the assignments on a purchase.
///
/// # Access Control
/// - `Company` - And the purchase must belong to the caller
#[utoipa::path(
    get,
    path = "/api/company/purchases/{purchase_id}/assignments",
    tag = COMPANY_TAG,
    params(
        ("purchase_id" = i32, Path, description = "Purchase ID")
    ),
    responses(
        (status = 200, description = "Seat assignments on the purchase", body = Vec<AssignmentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assignments(
    State(state): State<AppState>,
    session: Session,
    Path(purchase_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;

    let assignments = CompanyPurchaseService::new(&state.db)
        .get_assignments(purchase_id, user.id)
        .await?;

    match assignments {
        Some(assignments) => Ok((
            StatusCode::OK,
            Json(
                assignments
                    .into_iter()
                    .map(|a| a.into_dto())
                    .collect::<Vec<_>>(),
            ),
        )),
        None => Err(AppError::NotFound("Purchase not found".to_string())),
    }
}

/// Assign a purchased seat to an employee.
///
/// Fails when every seat is in use, the purchase has not settled, or the
/// employee already holds a seat.
///
/// # Access Control
/// - `Company` - Purchase and employee must both belong to the caller
#[utoipa::path(
    post,
    path = "/api/company/purchases/{purchase_id}/assignments",
    tag = COMPANY_TAG,
    params(
        ("purchase_id" = i32, Path, description = "Purchase ID")
    ),
    request_body = AssignSeatDto,
    responses(
        (status = 201, description = "Seat assigned", body = AssignmentDto),
        (status = 400, description = "Purchase unpaid or employee deactivated", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Purchase or employee not found", body = ErrorDto),
        (status = 409, description = "No free seat or employee already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_seat(
    State(state): State<AppState>,
    session: Session,
    Path(purchase_id): Path<i32>,
    Json(payload): Json<AssignSeatDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;

    let assignment = CompanyPurchaseService::new(&state.db)
        .assign(user.id, purchase_id, payload.employee_id)
        .await?;

    match assignment {
        Some(assignment) => Ok((StatusCode::CREATED, Json(assignment.into_dto()))),
        None => Err(AppError::NotFound(
            "Purchase or employee not found".to_string(),
        )),
    }
}

/// Release an employee's seat back to the purchase.
///
/// # Access Control
/// - `Company` - And the purchase must belong to the caller
#[utoipa::path(
    delete,
    path = "/api/company/purchases/{purchase_id}/assignments/{employee_id}",
    tag = COMPANY_TAG,
    params(
        ("purchase_id" = i32, Path, description = "Purchase ID"),
        ("employee_id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Seat released"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Purchase or assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn release_seat(
    State(state): State<AppState>,
    session: Session,
    Path((purchase_id, employee_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;

    let released = CompanyPurchaseService::new(&state.db)
        .release(user.id, purchase_id, employee_id)
        .await?;

    if released {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
