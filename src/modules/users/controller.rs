use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;
use uuid::Uuid;

use marquee_auth::policy;
use marquee_core::{AppError, ErrorResponse};

use crate::metrics::{track_admin_toggled, track_user_registered};
use crate::middleware::auth::{AuthUser, authorize};
use crate::modules::users::model::{LoginRequest, RegisterUserDto, UpdateUserDto, User};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::{ValidPath, ValidatedJson};

#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(email = %dto.email))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = UserService::register(&state.db, dto).await?;
    track_user_registered(user.is_admin);

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token as plain text", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Email or password are incorrect", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(email = %dto.email))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<String, AppError> {
    UserService::login(&state.db, dto, &state.jwt_config).await
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<User>>, AppError> {
    authorize(
        policy::can_list_users(&claims),
        policy::ADMIN_REQUIRED,
        "users.list",
    )?;

    let users = UserService::get_users(&state.db).await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Neither the user nor an admin", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<Json<User>, AppError> {
    authorize(
        policy::can_view_user(&claims, id),
        policy::ACCESS_DENIED,
        "users.get",
    )?;

    let user = UserService::get_user(&state.db, id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Neither the user nor an admin", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidPath(id): ValidPath<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<User>, AppError> {
    authorize(
        policy::can_update_user(&claims, id),
        policy::ACCESS_DENIED,
        "users.update",
    )?;
    UserService::ensure_exists(&state.db, claims.user_id()?).await?;

    let user = UserService::update_user(&state.db, id, dto).await?;
    Ok(Json(user))
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User with the admin flag flipped", body = User),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn toggle_admin(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<Json<User>, AppError> {
    authorize(
        policy::can_toggle_admin(&claims),
        policy::ADMIN_REQUIRED,
        "users.toggle_admin",
    )?;

    let user = UserService::toggle_admin(&state.db, id).await?;
    track_admin_toggled(user.is_admin);
    tracing::info!(target_user = %user.id, is_admin = user.is_admin, "Admin flag toggled");

    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted user", body = User),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Neither the user nor an admin", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<Json<User>, AppError> {
    authorize(
        policy::can_delete_user(&claims, id),
        policy::ACCESS_DENIED,
        "users.delete",
    )?;

    let user = UserService::delete_user(&state.db, id).await?;
    Ok(Json(user))
}
