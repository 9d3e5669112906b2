pub mod catalog;
pub mod repository;
pub mod types;
pub mod validation;
