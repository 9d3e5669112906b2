//! sea-orm entities for the Filmorate database.

pub mod film_genre;
pub mod films;
pub mod friends;
pub mod genres;
pub mod likes;
pub mod mpa;
pub mod users;
