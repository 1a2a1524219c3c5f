//! City model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::numeric::NumericInput;

/// A row from the `city` table.
///
/// Serialized with the table's own column names (`ID`, `Name`, ...) so clients
/// see the rows exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct City {
    #[serde(rename = "ID")]
    #[sqlx(rename = "ID")]
    pub id: i32,
    pub name: String,
    pub country_code: String,
    pub district: String,
    pub population: i32,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------
//
// Every field is optional. Absent values bind as NULL and the database's own
// constraints decide whether the statement succeeds. Numeric columns accept a
// number or a string; MySQL does the coercion.

/// Body of a lookup or delete by city name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityLookup {
    pub city_name: Option<String>,
}

/// Body of an insert. The caller supplies the ID.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCity {
    pub id: Option<NumericInput>,
    pub city_name: Option<String>,
    pub country_code: Option<String>,
    pub district: Option<String>,
    pub population_count: Option<NumericInput>,
}

/// Body of a population update. Only `Population` is mutable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePopulation {
    pub city_name: Option<String>,
    pub population_count: Option<NumericInput>,
}

/// Result of a delete, rendered as `{"status":"true"}` or `{"status":"false"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteStatus {
    pub status: &'static str,
}

impl DeleteStatus {
    pub fn from_removed(removed: bool) -> Self {
        Self {
            status: if removed { "true" } else { "false" },
        }
    }
}
