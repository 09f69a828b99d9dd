use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{
    create_show, delete_show, get_show, get_shows, like_show, rate_show, update_show,
};

pub fn init_shows_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_shows).post(create_show))
        .route(
            "/{id}",
            get(get_show).put(update_show).delete(delete_show),
        )
        .route("/{id}/rating", patch(rate_show))
        .route("/{id}/like", patch(like_show))
}
