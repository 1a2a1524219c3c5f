//! Repository for the `city` table.
//!
//! Every statement is parameterized. Lookups, updates and deletes match on
//! `Name`, so a single call may touch several rows sharing a name.

use sqlx::{MySqlConnection, MySqlPool};

use crate::models::city::{City, CreateCity, UpdatePopulation};

/// Lookup by name. The column list is the full `city` row.
const SELECT_BY_NAME: &str = "\
    SELECT ID, Name, CountryCode, District, Population \
    FROM city WHERE Name = ?";

const INSERT_CITY: &str = "\
    INSERT INTO city (ID, Name, CountryCode, District, Population) \
    VALUES (?, ?, ?, ?, ?)";

const UPDATE_POPULATION: &str = "UPDATE city SET Population = ? WHERE Name = ?";

const DELETE_BY_NAME: &str = "DELETE FROM city WHERE Name = ?";

/// Provides the list/create/update/delete statements for cities.
pub struct CityRepo;

impl CityRepo {
    /// List every city whose `Name` equals `name`. An empty result is not an error.
    pub async fn list_by_name(
        pool: &MySqlPool,
        name: Option<&str>,
    ) -> Result<Vec<City>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::fetch_by_name(&mut conn, name).await
    }

    /// Insert a city, then read back all rows sharing its name.
    ///
    /// The insert and the read-back share a transaction, so a failure in
    /// either step leaves nothing committed.
    pub async fn create(pool: &MySqlPool, input: &CreateCity) -> Result<Vec<City>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(INSERT_CITY)
            .bind(&input.id)
            .bind(input.city_name.as_deref())
            .bind(input.country_code.as_deref())
            .bind(input.district.as_deref())
            .bind(&input.population_count)
            .execute(&mut *tx)
            .await?;

        let cities = Self::fetch_by_name(&mut *tx, input.city_name.as_deref()).await?;

        tx.commit().await?;
        Ok(cities)
    }

    /// Set `Population` on every row matching the name, then read them back.
    ///
    /// Matching zero rows is a success; the read-back is then empty.
    pub async fn update_population(
        pool: &MySqlPool,
        input: &UpdatePopulation,
    ) -> Result<Vec<City>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(UPDATE_POPULATION)
            .bind(&input.population_count)
            .bind(input.city_name.as_deref())
            .execute(&mut *tx)
            .await?;
        tracing::debug!(rows_affected = result.rows_affected(), "Population updated");

        let cities = Self::fetch_by_name(&mut *tx, input.city_name.as_deref()).await?;

        tx.commit().await?;
        Ok(cities)
    }

    /// Delete every city matching the name.
    ///
    /// Returns the number of rows removed.
    pub async fn delete_by_name(pool: &MySqlPool, name: Option<&str>) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(DELETE_BY_NAME)
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn fetch_by_name(
        conn: &mut MySqlConnection,
        name: Option<&str>,
    ) -> Result<Vec<City>, sqlx::Error> {
        sqlx::query_as::<_, City>(SELECT_BY_NAME)
            .bind(name)
            .fetch_all(conn)
            .await
    }
}
