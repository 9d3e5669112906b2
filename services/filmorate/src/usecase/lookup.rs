use std::sync::Arc;

use filmorate_domain::id::{GenreId, MpaId};
use filmorate_domain::reference::{Genre, Mpa};

use crate::domain::catalog::Catalog;
use crate::error::FilmorateError;

// ── Genres ───────────────────────────────────────────────────────────────────

pub struct ListGenresUseCase {
    pub catalog: Arc<Catalog>,
}

impl ListGenresUseCase {
    pub fn execute(&self) -> Vec<Genre> {
        self.catalog.genres()
    }
}

pub struct GetGenreUseCase {
    pub catalog: Arc<Catalog>,
}

impl GetGenreUseCase {
    pub fn execute(&self, id: GenreId) -> Result<Genre, FilmorateError> {
        self.catalog.genre(id)
    }
}

// ── MPA ratings ──────────────────────────────────────────────────────────────

pub struct ListMpaUseCase {
    pub catalog: Arc<Catalog>,
}

impl ListMpaUseCase {
    pub fn execute(&self) -> Vec<Mpa> {
        self.catalog.all_mpa()
    }
}

pub struct GetMpaUseCase {
    pub catalog: Arc<Catalog>,
}

impl GetMpaUseCase {
    pub fn execute(&self, id: MpaId) -> Result<Mpa, FilmorateError> {
        self.catalog.mpa(id)
    }
}
