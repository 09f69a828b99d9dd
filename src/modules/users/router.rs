use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    delete_user, get_user, get_users, login_user, register_user, toggle_admin, update_user,
};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_user).get(get_users))
        .route("/login", post(login_user))
        .route(
            "/{id}",
            get(get_user)
                .put(update_user)
                .patch(toggle_admin)
                .delete(delete_user),
        )
}
