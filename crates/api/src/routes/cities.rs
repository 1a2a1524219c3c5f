//! Route definitions for the city endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::cities;
use crate::state::AppState;

/// City routes, mounted at the root.
///
/// ```text
/// POST   /          -> list_cities
/// POST   /create    -> create_city
/// POST   /update    -> update_city
/// POST   /delete    -> delete_city
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(cities::list_cities))
        .route("/create", post(cities::create_city))
        .route("/update", post(cities::update_city))
        .route("/delete", post(cities::delete_city))
}
