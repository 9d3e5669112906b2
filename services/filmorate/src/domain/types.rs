use std::collections::BTreeSet;

use chrono::NaiveDate;

use filmorate_domain::id::{FilmId, GenreId, MpaId, UserId};
use filmorate_domain::reference::{Genre, Mpa};

/// A film with its reference data resolved and its like count attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    pub id: FilmId,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    /// Running time in minutes.
    pub duration: i32,
    /// Number of likes; always the cardinality of the film's rows in `likes`.
    pub rate: u64,
    pub genres: BTreeSet<Genre>,
    pub mpa: Mpa,
}

/// Film fields as submitted by a client. `id` is `None` when creating.
///
/// Genres are collected into a set of ids, so repeats in the request collapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmDraft {
    pub id: Option<FilmId>,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub genre_ids: BTreeSet<GenreId>,
    pub mpa_id: MpaId,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

/// User fields as submitted by a client. `id` is `None` when creating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub id: Option<UserId>,
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

impl UserDraft {
    /// Display name to store: the given name, or the login when the name is absent or blank.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }
}
