use std::sync::Arc;

use filmorate_domain::id::FilmId;

use crate::domain::catalog::Catalog;
use crate::domain::repository::FilmRepository;
use crate::domain::types::{Film, FilmDraft};
use crate::domain::validation::{ValidationErrors, validate_film};
use crate::error::FilmorateError;

/// Validate a draft and make sure its MPA rating and genres exist.
fn check_draft(catalog: &Catalog, draft: &FilmDraft) -> Result<(), FilmorateError> {
    validate_film(draft)?;
    catalog.mpa(draft.mpa_id)?;
    catalog.resolve_genres(&draft.genre_ids)?;
    Ok(())
}

// ── ListFilms ────────────────────────────────────────────────────────────────

pub struct ListFilmsUseCase<R: FilmRepository> {
    pub repo: R,
}

impl<R: FilmRepository> ListFilmsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Film>, FilmorateError> {
        self.repo.list().await
    }
}

// ── GetFilm ──────────────────────────────────────────────────────────────────

pub struct GetFilmUseCase<R: FilmRepository> {
    pub repo: R,
}

impl<R: FilmRepository> GetFilmUseCase<R> {
    pub async fn execute(&self, id: FilmId) -> Result<Film, FilmorateError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(FilmorateError::FilmNotFound(id))
    }
}

// ── CreateFilm ───────────────────────────────────────────────────────────────

pub struct CreateFilmUseCase<R: FilmRepository> {
    pub repo: R,
    pub catalog: Arc<Catalog>,
}

impl<R: FilmRepository> CreateFilmUseCase<R> {
    /// Any id on the draft is ignored; the store assigns one.
    pub async fn execute(&self, mut draft: FilmDraft) -> Result<Film, FilmorateError> {
        draft.id = None;
        check_draft(&self.catalog, &draft)?;
        let film = self.repo.save(&draft).await?;
        tracing::info!(film_id = %film.id, name = %film.name, "film created");
        Ok(film)
    }
}

// ── UpdateFilm ───────────────────────────────────────────────────────────────

pub struct UpdateFilmUseCase<R: FilmRepository> {
    pub repo: R,
    pub catalog: Arc<Catalog>,
}

impl<R: FilmRepository> UpdateFilmUseCase<R> {
    /// Replaces every field of the stored film, including its genre set.
    pub async fn execute(&self, draft: FilmDraft) -> Result<Film, FilmorateError> {
        let Some(id) = draft.id else {
            return Err(ValidationErrors::single("id", "must be present").into());
        };
        check_draft(&self.catalog, &draft)?;
        if !self.repo.exists(id).await? {
            return Err(FilmorateError::FilmNotFound(id));
        }
        let film = self.repo.save(&draft).await?;
        tracing::info!(film_id = %film.id, "film updated");
        Ok(film)
    }
}

// ── DeleteFilm ───────────────────────────────────────────────────────────────

pub struct DeleteFilmUseCase<R: FilmRepository> {
    pub repo: R,
}

impl<R: FilmRepository> DeleteFilmUseCase<R> {
    pub async fn execute(&self, id: FilmId) -> Result<(), FilmorateError> {
        if !self.repo.delete(id).await? {
            return Err(FilmorateError::FilmNotFound(id));
        }
        tracing::info!(film_id = %id, "film deleted");
        Ok(())
    }
}
