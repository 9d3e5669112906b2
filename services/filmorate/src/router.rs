use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use filmorate_core::health::{healthz, readyz};
use filmorate_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    film::{
        create_film, delete_film, get_film, get_film_likes, get_popular_films, like_film,
        list_films, unlike_film, update_film,
    },
    lookup::{get_genre, get_mpa, list_genres, list_mpa},
    user::{
        add_friend, create_user, get_common_friends, get_friends, get_user, list_users,
        remove_friend, update_user,
    },
};
use crate::state::AppState;

async fn readiness(State(state): State<AppState>) -> StatusCode {
    readyz(&state.db).await
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readiness))
        // Films
        .route("/films", get(list_films).post(create_film).put(update_film))
        .route("/films/popular", get(get_popular_films))
        .route("/films/{id}", get(get_film).delete(delete_film))
        .route("/films/{id}/like/{user_id}", put(like_film).delete(unlike_film))
        .route("/films/{id}/likes", get(get_film_likes))
        // Users
        .route("/users", get(list_users).post(create_user).put(update_user))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/friends", get(get_friends))
        .route("/users/{id}/friends/{friend_id}", put(add_friend).delete(remove_friend))
        .route("/users/{id}/friends/common/{other_id}", get(get_common_friends))
        // Reference data
        .route("/genres", get(list_genres))
        .route("/genres/{id}", get(get_genre))
        .route("/mpa", get(list_mpa))
        .route("/mpa/{id}", get(get_mpa))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
