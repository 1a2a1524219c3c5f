pub mod cities;
