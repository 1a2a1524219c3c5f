//! Handlers for the city endpoints.
//!
//! Each handler binds the body fields into one parameterized statement (plus a
//! read-back by name for create/update) and returns the rows as a bare JSON
//! array. Database failures surface as 500 through [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

use axum::extract::State;
use axum::Json;
use worldcity_db::models::city::{City, CityLookup, CreateCity, DeleteStatus, UpdatePopulation};
use worldcity_db::repositories::CityRepo;

use crate::error::AppResult;
use crate::extract::JsonOrForm;
use crate::state::AppState;

/// POST /
///
/// List every city with the given name.
pub async fn list_cities(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<CityLookup>,
) -> AppResult<Json<Vec<City>>> {
    let cities = CityRepo::list_by_name(&state.pool, input.city_name.as_deref()).await?;

    tracing::debug!(city_name = ?input.city_name, count = cities.len(), "Cities listed");

    Ok(Json(cities))
}

/// POST /create
///
/// Insert a city and return every row sharing its name.
pub async fn create_city(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<CreateCity>,
) -> AppResult<Json<Vec<City>>> {
    let cities = CityRepo::create(&state.pool, &input).await?;

    tracing::info!(id = ?input.id, city_name = ?input.city_name, "City created");

    Ok(Json(cities))
}

/// POST /update
///
/// Set the population of every city with the given name and return them.
pub async fn update_city(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<UpdatePopulation>,
) -> AppResult<Json<Vec<City>>> {
    let cities = CityRepo::update_population(&state.pool, &input).await?;

    tracing::info!(
        city_name = ?input.city_name,
        population = ?input.population_count,
        matched = cities.len(),
        "City population updated",
    );

    Ok(Json(cities))
}

/// POST /delete
///
/// Delete every city with the given name. Reports whether anything was removed.
pub async fn delete_city(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<CityLookup>,
) -> AppResult<Json<DeleteStatus>> {
    let removed = CityRepo::delete_by_name(&state.pool, input.city_name.as_deref()).await?;

    tracing::info!(city_name = ?input.city_name, removed, "Cities deleted");

    Ok(Json(DeleteStatus::from_removed(removed > 0)))
}
