pub mod film;
pub mod friend;
pub mod like;
pub mod lookup;
pub mod user;

#[cfg(test)]
pub(crate) mod mock;
