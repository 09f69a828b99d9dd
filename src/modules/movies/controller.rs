use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;
use uuid::Uuid;

use marquee_auth::policy;
use marquee_core::{AppError, ErrorResponse};

use crate::metrics::{track_catalog_write, track_movie_like};
use crate::middleware::auth::{AuthUser, authorize};
use crate::modules::movies::model::{Movie, MovieDto};
use crate::modules::movies::service::MovieService;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::{ValidPath, ValidatedJson};

#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "All movies, newest first", body = Vec<Movie>)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn get_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = MovieService::get_movies(&state.db).await?;
    Ok(Json(movies))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = Uuid, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie details", body = Movie),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn get_movie(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::get_movie(&state.db, id).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    get,
    path = "/movies/genre/{genre}",
    params(("genre" = String, Path, description = "Genre, matched exactly")),
    responses(
        (status = 200, description = "Movies in the genre, possibly none", body = Vec<Movie>)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn get_movies_by_genre(
    State(state): State<AppState>,
    ValidPath(genre): ValidPath<String>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = MovieService::get_movies_by_genre(&state.db, &genre).await?;
    Ok(Json(movies))
}

#[utoipa::path(
    post,
    path = "/movies",
    request_body = MovieDto,
    responses(
        (status = 201, description = "Movie created, owned by the caller", body = Movie),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_movie(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidatedJson(dto): ValidatedJson<MovieDto>,
) -> Result<(StatusCode, Json<Movie>), AppError> {
    let owner = claims.user_id()?;

    let movie = MovieService::create_movie(&state.db, owner, dto).await?;
    track_catalog_write("movie", "create");

    Ok((StatusCode::CREATED, Json(movie)))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(("id" = Uuid, Path, description = "Movie ID")),
    request_body = MovieDto,
    responses(
        (status = 200, description = "Updated movie", body = Movie),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Neither the owner nor an admin", body = ErrorResponse),
        (status = 404, description = "Movie or caller not found", body = ErrorResponse)
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_movie(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidPath(id): ValidPath<Uuid>,
    ValidatedJson(dto): ValidatedJson<MovieDto>,
) -> Result<Json<Movie>, AppError> {
    let existing = MovieService::get_movie(&state.db, id).await?;

    authorize(
        policy::can_update_movie(&claims, existing.user_id),
        policy::ACCESS_DENIED,
        "movies.update",
    )?;
    UserService::ensure_exists(&state.db, claims.user_id()?).await?;

    let movie = MovieService::update_movie(&state.db, id, dto).await?;
    track_catalog_write("movie", "update");

    Ok(Json(movie))
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = Uuid, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Deleted movie", body = Movie),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse)
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_movie(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<Json<Movie>, AppError> {
    authorize(
        policy::can_delete_movie(&claims),
        policy::ADMIN_REQUIRED,
        "movies.delete",
    )?;

    let movie = MovieService::delete_movie(&state.db, id).await?;
    track_catalog_write("movie", "delete");

    Ok(Json(movie))
}

#[utoipa::path(
    patch,
    path = "/movies/{id}",
    params(("id" = Uuid, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie with the caller's like toggled", body = Movie),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Movie or caller not found", body = ErrorResponse)
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn toggle_like(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<Json<Movie>, AppError> {
    let user_id = claims.user_id()?;
    UserService::ensure_exists(&state.db, user_id).await?;

    let movie = MovieService::toggle_like(&state.db, id, user_id).await?;
    track_movie_like(movie.likes.contains(&user_id));

    Ok(Json(movie))
}
