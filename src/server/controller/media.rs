use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::media::UploadSignatureRequestDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::user::Role,
        state::AppState,
    },
};

/// POST /api/media/signature - Get signed direct-upload parameters
///
/// Returns the parameter set a client needs to upload course media straight
/// to the CDN. Teachers upload lesson videos; companies upload branding
/// assets. Students have nothing to upload and are rejected.
///
/// # Returns
/// - `200 OK`: UploadSignatureDto with the signed parameters
/// - `401 Unauthorized`: User not authenticated
/// - `403 Forbidden`: Caller is neither teacher, company, nor admin
pub async fn sign_upload(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UploadSignatureRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    // Teacher OR company, which the single-permission guard can't express
    if !matches!(user.role, Role::Teacher | Role::Company | Role::Admin) {
        return Err(AuthError::AccessDenied(
            user.id,
            "Upload signatures are limited to teacher and company accounts".to_string(),
        )
        .into());
    }

    let signature = state
        .media_signer
        .sign_upload(payload.folder, payload.public_id);

    Ok((StatusCode::OK, Json(signature)))
}
