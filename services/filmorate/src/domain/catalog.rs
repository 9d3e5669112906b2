use std::collections::{BTreeMap, BTreeSet};

use filmorate_domain::id::{GenreId, MpaId};
use filmorate_domain::reference::{Genre, Mpa};

use crate::error::FilmorateError;

/// Genre and MPA reference tables, loaded once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    genres: BTreeMap<GenreId, Genre>,
    mpa: BTreeMap<MpaId, Mpa>,
}

impl Catalog {
    pub fn new(
        genres: impl IntoIterator<Item = Genre>,
        mpa: impl IntoIterator<Item = Mpa>,
    ) -> Self {
        Self {
            genres: genres.into_iter().map(|g| (g.id, g)).collect(),
            mpa: mpa.into_iter().map(|m| (m.id, m)).collect(),
        }
    }

    pub fn genre(&self, id: GenreId) -> Result<Genre, FilmorateError> {
        self.genres
            .get(&id)
            .cloned()
            .ok_or(FilmorateError::GenreNotFound(id))
    }

    /// All genres, ordered by id.
    pub fn genres(&self) -> Vec<Genre> {
        self.genres.values().cloned().collect()
    }

    pub fn mpa(&self, id: MpaId) -> Result<Mpa, FilmorateError> {
        self.mpa
            .get(&id)
            .cloned()
            .ok_or(FilmorateError::MpaNotFound(id))
    }

    /// All MPA ratings, ordered by id.
    pub fn all_mpa(&self) -> Vec<Mpa> {
        self.mpa.values().cloned().collect()
    }

    /// Fails on the first id with no matching genre.
    pub fn resolve_genres<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a GenreId>,
    ) -> Result<BTreeSet<Genre>, FilmorateError> {
        ids.into_iter().map(|id| self.genre(*id)).collect()
    }
}

#[cfg(test)]
pub(crate) fn seeded_catalog() -> Catalog {
    Catalog::new(
        [
            Genre::new(1, "Комедия"),
            Genre::new(2, "Драма"),
            Genre::new(3, "Мультфильм"),
            Genre::new(4, "Триллер"),
            Genre::new(5, "Документальный"),
            Genre::new(6, "Боевик"),
        ],
        [
            Mpa::new(1, "G"),
            Mpa::new(2, "PG"),
            Mpa::new(3, "PG-13"),
            Mpa::new(4, "R"),
            Mpa::new(5, "NC-17"),
        ],
    )
}
