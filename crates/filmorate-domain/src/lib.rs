//! Domain types shared across the Filmorate crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers as well as the repositories.

pub mod id;
pub mod reference;
