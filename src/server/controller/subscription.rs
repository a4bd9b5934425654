use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        subscription::{SubscriptionPlanDto, SubscriptionStatusDto, UpsertPlanDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::subscription::UpsertPlanParam,
        service::subscription::SubscriptionService,
        state::AppState,
    },
};

/// Tag for grouping subscription endpoints in OpenAPI documentation
pub static SUBSCRIPTION_TAG: &str = "subscription";

/// Get all subscription plans, cheapest first.
///
/// # Access Control
/// - Public, no authentication required
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = SUBSCRIPTION_TAG,
    responses(
        (status = 200, description = "Available plans", body = Vec<SubscriptionPlanDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plans(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let plans = SubscriptionService::new(&state.db).get_plans().await?;

    Ok((
        StatusCode::OK,
        Json(
            plans
                .into_iter()
                .map(SubscriptionPlanDto::from_entity)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a subscription plan.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/plans",
    tag = SUBSCRIPTION_TAG,
    request_body = UpsertPlanDto,
    responses(
        (status = 201, description = "Plan created", body = SubscriptionPlanDto),
        (status = 400, description = "Invalid price or duration", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plan(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertPlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let plan = SubscriptionService::new(&state.db)
        .create_plan(UpsertPlanParam {
            name: payload.name,
            description: payload.description,
            price_cents: payload.price_cents,
            duration_days: payload.duration_days,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubscriptionPlanDto::from_entity(plan)),
    ))
}

/// Update a subscription plan.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/plans/{plan_id}",
    tag = SUBSCRIPTION_TAG,
    params(
        ("plan_id" = i32, Path, description = "Plan ID")
    ),
    request_body = UpsertPlanDto,
    responses(
        (status = 200, description = "Plan updated", body = SubscriptionPlanDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_plan(
    State(state): State<AppState>,
    session: Session,
    Path(plan_id): Path<i32>,
    Json(payload): Json<UpsertPlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let plan = SubscriptionService::new(&state.db)
        .update_plan(
            plan_id,
            UpsertPlanParam {
                name: payload.name,
                description: payload.description,
                price_cents: payload.price_cents,
                duration_days: payload.duration_days,
            },
        )
        .await?;

    match plan {
        Some(plan) => Ok((StatusCode::OK, Json(SubscriptionPlanDto::from_entity(plan)))),
        None => Err(AppError::NotFound("Plan not found".to_string())),
    }
}

/// Delete a subscription plan.
///
/// Refused while any student is subscribed to the plan.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/plans/{plan_id}",
    tag = SUBSCRIPTION_TAG,
    params(
        ("plan_id" = i32, Path, description = "Plan ID")
    ),
    responses(
        (status = 204, description = "Plan deleted"),
        (status = 400, description = "Plan still has subscribers", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    session: Session,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let deleted = SubscriptionService::new(&state.db).delete_plan(plan_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Subscribe to a plan, paying from wallet funds.
///
/// # Access Control
/// - `Student`
#[utoipa::path(
    post,
    path = "/api/student/subscription/{plan_id}",
    tag = SUBSCRIPTION_TAG,
    params(
        ("plan_id" = i32, Path, description = "Plan to subscribe to")
    ),
    responses(
        (status = 200, description = "Active subscription", body = SubscriptionStatusDto),
        (status = 400, description = "Plan already active or insufficient funds", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a student", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let status = SubscriptionService::new(&state.db)
        .subscribe(&user, plan_id)
        .await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Get the caller's current subscription.
///
/// # Access Control
/// - `Student`
#[utoipa::path(
    get,
    path = "/api/student/subscription",
    tag = SUBSCRIPTION_TAG,
    responses(
        (status = 200, description = "Current subscription, if any", body = SubscriptionStatusDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let status = SubscriptionService::new(&state.db).get_status(&user).await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}
