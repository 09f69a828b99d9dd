use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;
use uuid::Uuid;

use marquee_auth::policy;
use marquee_core::{AppError, ErrorResponse};

use crate::metrics::{track_catalog_write, track_show_rated};
use crate::middleware::auth::{AuthUser, authorize};
use crate::modules::shows::model::{RatingDto, Show, ShowDto};
use crate::modules::shows::service::ShowService;
use crate::state::AppState;
use crate::validator::{ValidPath, ValidatedJson};

#[utoipa::path(
    get,
    path = "/shows",
    responses(
        (status = 200, description = "All shows, newest first", body = Vec<Show>)
    ),
    tag = "Shows"
)]
#[instrument(skip(state))]
pub async fn get_shows(State(state): State<AppState>) -> Result<Json<Vec<Show>>, AppError> {
    let shows = ShowService::get_shows(&state.db).await?;
    Ok(Json(shows))
}

#[utoipa::path(
    get,
    path = "/shows/{id}",
    params(("id" = Uuid, Path, description = "Show ID")),
    responses(
        (status = 200, description = "Show details", body = Show),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Show not found", body = ErrorResponse)
    ),
    tag = "Shows"
)]
#[instrument(skip(state))]
pub async fn get_show(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<Json<Show>, AppError> {
    let show = ShowService::get_show(&state.db, id).await?;
    Ok(Json(show))
}

#[utoipa::path(
    post,
    path = "/shows",
    request_body = ShowDto,
    responses(
        (status = 201, description = "Show created", body = Show),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse)
    ),
    tag = "Shows",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_show(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidatedJson(dto): ValidatedJson<ShowDto>,
) -> Result<(StatusCode, Json<Show>), AppError> {
    authorize(
        policy::can_manage_shows(&claims),
        policy::ADMIN_REQUIRED,
        "shows.create",
    )?;

    let show = ShowService::create_show(&state.db, dto).await?;
    track_catalog_write("show", "create");

    Ok((StatusCode::CREATED, Json(show)))
}

#[utoipa::path(
    put,
    path = "/shows/{id}",
    params(("id" = Uuid, Path, description = "Show ID")),
    request_body = ShowDto,
    responses(
        (status = 200, description = "Updated show", body = Show),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Show not found", body = ErrorResponse)
    ),
    tag = "Shows",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_show(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidPath(id): ValidPath<Uuid>,
    ValidatedJson(dto): ValidatedJson<ShowDto>,
) -> Result<Json<Show>, AppError> {
    authorize(
        policy::can_manage_shows(&claims),
        policy::ADMIN_REQUIRED,
        "shows.update",
    )?;

    let show = ShowService::update_show(&state.db, id, dto).await?;
    track_catalog_write("show", "update");

    Ok(Json(show))
}

#[utoipa::path(
    delete,
    path = "/shows/{id}",
    params(("id" = Uuid, Path, description = "Show ID")),
    responses(
        (status = 200, description = "Deleted show", body = Show),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Show not found", body = ErrorResponse)
    ),
    tag = "Shows",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_show(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<Json<Show>, AppError> {
    authorize(
        policy::can_manage_shows(&claims),
        policy::ADMIN_REQUIRED,
        "shows.delete",
    )?;

    let show = ShowService::delete_show(&state.db, id).await?;
    track_catalog_write("show", "delete");

    Ok(Json(show))
}

#[utoipa::path(
    patch,
    path = "/shows/{id}/rating",
    params(("id" = Uuid, Path, description = "Show ID")),
    request_body = RatingDto,
    responses(
        (status = 200, description = "Show with the new rating", body = Show),
        (status = 400, description = "Missing or out of range rating", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Show not found", body = ErrorResponse)
    ),
    tag = "Shows",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth))]
pub async fn rate_show(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidPath(id): ValidPath<Uuid>,
    ValidatedJson(dto): ValidatedJson<RatingDto>,
) -> Result<Json<Show>, AppError> {
    let rating = dto
        .rating
        .ok_or_else(|| AppError::validation("Rating is required".to_string()))?;

    let show = ShowService::update_rating(&state.db, id, rating).await?;
    track_show_rated();

    Ok(Json(show))
}

/// Accepted for authenticated callers but changes nothing yet.
#[utoipa::path(
    patch,
    path = "/shows/{id}/like",
    params(("id" = Uuid, Path, description = "Show ID")),
    responses(
        (status = 204, description = "No change"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Shows",
    security(("bearer_auth" = []))
)]
#[instrument(skip(_auth))]
pub async fn like_show(_auth: AuthUser, ValidPath(id): ValidPath<Uuid>) -> StatusCode {
    tracing::debug!(%id, "Show likes are not tracked");
    StatusCode::NO_CONTENT
}
