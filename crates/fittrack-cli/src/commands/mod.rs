pub mod catalog;
pub mod config;
pub mod habit;
pub mod workout;
