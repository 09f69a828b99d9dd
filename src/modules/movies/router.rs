use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_movie, delete_movie, get_movie, get_movies, get_movies_by_genre, toggle_like,
    update_movie,
};

pub fn init_movies_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_movies).post(create_movie))
        .route("/genre/{genre}", get(get_movies_by_genre))
        .route(
            "/{id}",
            get(get_movie)
                .put(update_movie)
                .patch(toggle_like)
                .delete(delete_movie),
        )
}
