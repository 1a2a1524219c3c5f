//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&MySqlPool` as the first argument.

pub mod city_repo;

pub use city_repo::CityRepo;
