use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use marquee_auth::Claims;
use marquee_core::ErrorResponse;

use crate::modules::movies::model::{Movie, MovieDto};
use crate::modules::shows::model::{RatingDto, Show, ShowDto};
use crate::modules::users::model::{LoginRequest, RegisterUserDto, UpdateUserDto, User};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::login_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::toggle_admin,
        crate::modules::users::controller::delete_user,
        crate::modules::movies::controller::get_movies,
        crate::modules::movies::controller::get_movie,
        crate::modules::movies::controller::get_movies_by_genre,
        crate::modules::movies::controller::create_movie,
        crate::modules::movies::controller::update_movie,
        crate::modules::movies::controller::delete_movie,
        crate::modules::movies::controller::toggle_like,
        crate::modules::shows::controller::get_shows,
        crate::modules::shows::controller::get_show,
        crate::modules::shows::controller::create_show,
        crate::modules::shows::controller::update_show,
        crate::modules::shows::controller::delete_show,
        crate::modules::shows::controller::rate_show,
        crate::modules::shows::controller::like_show,
    ),
    components(
        schemas(
            User,
            RegisterUserDto,
            LoginRequest,
            UpdateUserDto,
            Movie,
            MovieDto,
            Show,
            ShowDto,
            RatingDto,
            Claims,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Registration, login and account management"),
        (name = "Movies", description = "Movie catalog with per-user likes"),
        (name = "Shows", description = "Show catalog, curated by admins")
    ),
    info(
        title = "Marquee API",
        version = "0.1.0",
        description = "A movie and show catalog API built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
