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
        comment::{CommentDto, CreateCommentDto, ReactionResultDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::CreateCommentParam,
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Get a course's comment threads.
///
/// Root comments newest first, each with its replies oldest first, author
/// names, and like/dislike counts.
///
/// # Access Control
/// - Public, no authentication required
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Comment threads for the course", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let threads = CommentService::new(&state.db).list(course_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            threads
                .into_iter()
                .map(|t| t.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Post a comment or a reply on a course.
///
/// Passing `parent_id` makes the comment a reply; replies attach to root
/// comments only.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The new comment
/// - `400 Bad Request` - Empty content, nested reply, or cross-course reply
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Course or parent comment missing
#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment posted", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course or parent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment = CommentService::new(&state.db)
        .create(CreateCommentParam {
            course_id,
            author_id: user.id,
            content: payload.content,
            parent_id: payload.parent_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentDto {
            id: comment.id,
            author_id: comment.author_id,
            author_name: user.name,
            content: comment.content,
            created_at: comment.created_at,
            likes: 0,
            dislikes: 0,
            replies: Vec::new(),
        }),
    ))
}

/// Toggle a like on a comment.
///
/// Liking twice removes the like; liking a disliked comment switches the
/// reaction.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    post,
    path = "/api/comments/{comment_id}/like",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Reaction counts after the toggle", body = ReactionResultDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_like(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let summary = CommentService::new(&state.db)
        .toggle_like(comment_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Toggle a dislike on a comment.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    post,
    path = "/api/comments/{comment_id}/dislike",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Reaction counts after the toggle", body = ReactionResultDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_dislike(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let summary = CommentService::new(&state.db)
        .toggle_dislike(comment_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Delete the caller's own comment, replies included.
///
/// # Access Control
/// - Any authenticated user; only the author's own comments
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Comment not found or not owned by the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let deleted = CommentService::new(&state.db)
        .delete(comment_id, user.id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
