pub mod bootstrap;
pub mod db;
