use std::sync::Arc;

use axum::{
    extract::{Path, State},
    middleware,
    routing::get,
    Json, Router
};

use crate::core::{parse_user_id, User, UserDirectory};
use crate::server::access_log::log_requests;

pub const ROOT_READY: &str = "Microservices Ready to receive requests";
pub const API_READY: &str = "Microservices API ready to receive requests for users";

type Directory = State<Arc<UserDirectory>>;

pub fn build_router(directory: Arc<UserDirectory>) -> Router {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/:userId", get(find_user))
        .route("/api/", get(api_ready))
        .route("/", get(root_ready))
        .with_state(directory)
        .layer(middleware::from_fn(log_requests))
}

async fn list_users(State(directory): Directory) -> Json<Arc<[User]>> {
    Json(directory.shared_users())
}

// A miss is answered with 200 and a `null` body, as is an id that
// does not parse.
async fn find_user(State(directory): Directory, Path(user_id): Path<String>) -> Json<Option<User>> {
    let user = parse_user_id(&user_id)
        .and_then(|id| directory.find_user_by_id(id))
        .cloned();
    Json(user)
}

async fn api_ready() -> &'static str {
    API_READY
}

async fn root_ready() -> &'static str {
    ROOT_READY
}
