#![allow(async_fn_in_trait)]

use std::collections::BTreeSet;

use filmorate_domain::id::{FilmId, UserId};
use filmorate_domain::reference::Genre;

use crate::domain::types::{Film, FilmDraft, User, UserDraft};
use crate::error::FilmorateError;

/// Repository for film records and their genre assignments.
///
/// Every returned [`Film`] carries its current like count and resolved reference data.
pub trait FilmRepository: Send + Sync {
    async fn find_by_id(&self, id: FilmId) -> Result<Option<Film>, FilmorateError>;

    /// All films, ordered by id.
    async fn list(&self) -> Result<Vec<Film>, FilmorateError>;

    async fn exists(&self, id: FilmId) -> Result<bool, FilmorateError>;

    /// Insert when `draft.id` is `None`, otherwise replace the stored film and its genres.
    /// Updating an id with no row is `FilmNotFound`.
    async fn save(&self, draft: &FilmDraft) -> Result<Film, FilmorateError>;

    /// Delete a film with its likes and genre rows. Returns `true` if a film was deleted.
    async fn delete(&self, id: FilmId) -> Result<bool, FilmorateError>;

    async fn genres_for_film(&self, id: FilmId) -> Result<BTreeSet<Genre>, FilmorateError>;
}

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, FilmorateError>;

    /// All users, ordered by id.
    async fn list(&self) -> Result<Vec<User>, FilmorateError>;

    async fn exists(&self, id: UserId) -> Result<bool, FilmorateError>;

    /// Insert when `draft.id` is `None`, otherwise update. Updating an id with no row is
    /// `UserNotFound`. The stored name is [`UserDraft::display_name`].
    async fn save(&self, draft: &UserDraft) -> Result<User, FilmorateError>;
}

/// Like relation between users and films, plus the popularity ranking built on it.
pub trait LikeRepository: Send + Sync {
    /// Idempotent: liking twice leaves one row.
    async fn add(&self, film_id: FilmId, user_id: UserId) -> Result<(), FilmorateError>;

    /// Removing an absent like is a no-op.
    async fn remove(&self, film_id: FilmId, user_id: UserId) -> Result<(), FilmorateError>;

    /// Users who liked the film, ordered by id.
    async fn list_by_film(&self, film_id: FilmId) -> Result<Vec<UserId>, FilmorateError>;

    /// At most `n` films ordered by like count descending, then id ascending.
    async fn top_films(&self, n: u64) -> Result<Vec<Film>, FilmorateError>;
}

/// Directed friendship edges between users.
pub trait FriendRepository: Send + Sync {
    /// Idempotent. Adds only the edge `user_id -> friend_id`.
    async fn add(&self, user_id: UserId, friend_id: UserId) -> Result<(), FilmorateError>;

    /// Removing an absent edge is a no-op.
    async fn remove(&self, user_id: UserId, friend_id: UserId) -> Result<(), FilmorateError>;

    /// Users `user_id` has added, ordered by id.
    async fn list_friends(&self, user_id: UserId) -> Result<Vec<User>, FilmorateError>;

    /// Users both `a` and `b` have added, ordered by id.
    async fn list_common(&self, a: UserId, b: UserId) -> Result<Vec<User>, FilmorateError>;
}
