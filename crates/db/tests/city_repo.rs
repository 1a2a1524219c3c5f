//! Integration tests for `CityRepo` against a real MySQL database.
//!
//! Each test gets a fresh database seeded by `fixtures/city.sql`; `DATABASE_URL`
//! must point at a MySQL server.

use assert_matches::assert_matches;
use sqlx::MySqlPool;
use worldcity_db::models::city::{City, CreateCity, UpdatePopulation};
use worldcity_db::models::numeric::NumericInput;
use worldcity_db::repositories::CityRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn test_city() -> CreateCity {
    CreateCity {
        id: Some(NumericInput::Int(900)),
        city_name: Some("Test".to_string()),
        country_code: Some("TST".to_string()),
        district: Some("testDistrict".to_string()),
        population_count: Some(NumericInput::Int(10000)),
    }
}

async fn count_rows(pool: &MySqlPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM city")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures("city"))]
async fn list_returns_matching_rows(pool: MySqlPool) {
    let cities = CityRepo::list_by_name(&pool, Some("Paris")).await.unwrap();

    assert_eq!(
        cities,
        vec![City {
            id: 2974,
            name: "Paris".into(),
            country_code: "FRA".into(),
            district: "Île-de-France".into(),
            population: 2_125_246,
        }]
    );
}

#[sqlx::test(migrations = false, fixtures("city"))]
async fn list_unknown_name_is_empty(pool: MySqlPool) {
    let cities = CityRepo::list_by_name(&pool, Some("Atlantis")).await.unwrap();
    assert!(cities.is_empty());
}

#[sqlx::test(migrations = false, fixtures("city"))]
async fn list_without_name_matches_nothing(pool: MySqlPool) {
    let cities = CityRepo::list_by_name(&pool, None).await.unwrap();
    assert!(cities.is_empty());
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures("city"))]
async fn create_returns_inserted_row(pool: MySqlPool) {
    let cities = CityRepo::create(&pool, &test_city()).await.unwrap();

    assert_eq!(
        cities,
        vec![City {
            id: 900,
            name: "Test".into(),
            country_code: "TST".into(),
            district: "testDistrict".into(),
            population: 10000,
        }]
    );

    let listed = CityRepo::list_by_name(&pool, Some("Test")).await.unwrap();
    assert_eq!(listed, cities);
}

#[sqlx::test(migrations = false, fixtures("city"))]
async fn create_duplicate_id_fails_without_commit(pool: MySqlPool) {
    let before = count_rows(&pool).await;

    let duplicate = CreateCity {
        id: Some(NumericInput::Int(2974)),
        ..test_city()
    };
    let err = CityRepo::create(&pool, &duplicate).await.unwrap_err();

    assert_matches!(err, sqlx::Error::Database(_));
    assert_eq!(count_rows(&pool).await, before);
    assert!(CityRepo::list_by_name(&pool, Some("Test"))
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = false, fixtures("city"))]
async fn create_binds_text_numbers_for_mysql_to_coerce(pool: MySqlPool) {
    let input = CreateCity {
        id: Some(NumericInput::from("901")),
        population_count: Some(NumericInput::from("12345")),
        ..test_city()
    };

    let cities = CityRepo::create(&pool, &input).await.unwrap();

    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].id, 901);
    assert_eq!(cities[0].population, 12345);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures("city"))]
async fn update_changes_only_population(pool: MySqlPool) {
    CityRepo::create(&pool, &test_city()).await.unwrap();

    let cities = CityRepo::update_population(
        &pool,
        &UpdatePopulation {
            city_name: Some("Test".into()),
            population_count: Some(NumericInput::Int(50000)),
        },
    )
    .await
    .unwrap();

    assert_eq!(cities.len(), 1);
    let city = &cities[0];
    assert_eq!(city.population, 50000);
    assert_eq!(city.id, 900);
    assert_eq!(city.name, "Test");
    assert_eq!(city.country_code, "TST");
    assert_eq!(city.district, "testDistrict");
}

#[sqlx::test(migrations = false, fixtures("city"))]
async fn update_unknown_name_returns_empty(pool: MySqlPool) {
    let cities = CityRepo::update_population(
        &pool,
        &UpdatePopulation {
            city_name: Some("Atlantis".into()),
            population_count: Some(NumericInput::Int(1)),
        },
    )
    .await
    .unwrap();

    assert!(cities.is_empty());
}

#[sqlx::test(migrations = false, fixtures("city"))]
async fn update_applies_to_every_row_with_the_name(pool: MySqlPool) {
    let cities = CityRepo::update_population(
        &pool,
        &UpdatePopulation {
            city_name: Some("Springfield".into()),
            population_count: Some(NumericInput::Int(42)),
        },
    )
    .await
    .unwrap();

    assert_eq!(cities.len(), 3);
    assert!(cities.iter().all(|c| c.population == 42));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures("city"))]
async fn delete_removes_all_rows_with_the_name(pool: MySqlPool) {
    let removed = CityRepo::delete_by_name(&pool, Some("Springfield"))
        .await
        .unwrap();

    assert_eq!(removed, 3);
    assert!(CityRepo::list_by_name(&pool, Some("Springfield"))
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = false, fixtures("city"))]
async fn delete_unknown_name_leaves_table_unchanged(pool: MySqlPool) {
    let before = count_rows(&pool).await;

    let removed = CityRepo::delete_by_name(&pool, Some("Atlantis"))
        .await
        .unwrap();

    assert_eq!(removed, 0);
    assert_eq!(count_rows(&pool).await, before);
}
