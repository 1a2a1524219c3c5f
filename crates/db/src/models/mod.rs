//! Domain model structs and DTOs.
//!
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs carrying the fields each statement binds

pub mod city;
pub mod numeric;
