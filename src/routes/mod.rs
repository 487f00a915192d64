use crate::handlers::{
    auth::{login, register},
    directors::{create_director, delete_director, get_director, list_directors, update_director},
    health::status,
    movies::{create_movie, delete_movie, get_movie, list_movies, update_movie},
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let auth_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    // Reads are public. Writes take an `AuthenticatedUser`, which is what gates them.
    let movie_routes = Router::new()
        .route("/", get(list_movies).post(create_movie))
        .route(
            "/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        );

    let director_routes = Router::new()
        .route("/", get(list_directors).post(create_director))
        .route(
            "/{id}",
            get(get_director).put(update_director).delete(delete_director),
        );

    Router::new()
        .route("/status", get(status))
        .nest("/auth", auth_routes)
        .nest("/movies", movie_routes)
        .nest("/directors", director_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
