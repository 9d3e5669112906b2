use filmorate_domain::id::{FilmId, UserId};

use crate::domain::repository::{FilmRepository, LikeRepository, UserRepository};
use crate::domain::types::Film;
use crate::domain::validation::validate_count;
use crate::error::FilmorateError;

/// Size of the popularity ranking when the client does not ask for one.
pub const DEFAULT_POPULAR_COUNT: i64 = 10;

async fn ensure_film_and_user<F: FilmRepository, U: UserRepository>(
    films: &F,
    users: &U,
    film_id: FilmId,
    user_id: UserId,
) -> Result<(), FilmorateError> {
    if !films.exists(film_id).await? {
        return Err(FilmorateError::FilmNotFound(film_id));
    }
    if !users.exists(user_id).await? {
        return Err(FilmorateError::UserNotFound(user_id));
    }
    Ok(())
}

/// Reload the film so `rate` reflects the like that was just added or removed.
async fn reload<F: FilmRepository>(films: &F, film_id: FilmId) -> Result<Film, FilmorateError> {
    films
        .find_by_id(film_id)
        .await?
        .ok_or(FilmorateError::FilmNotFound(film_id))
}

// ── LikeFilm ─────────────────────────────────────────────────────────────────

pub struct LikeFilmUseCase<F: FilmRepository, U: UserRepository, L: LikeRepository> {
    pub films: F,
    pub users: U,
    pub likes: L,
}

impl<F: FilmRepository, U: UserRepository, L: LikeRepository> LikeFilmUseCase<F, U, L> {
    pub async fn execute(&self, film_id: FilmId, user_id: UserId) -> Result<Film, FilmorateError> {
        ensure_film_and_user(&self.films, &self.users, film_id, user_id).await?;
        self.likes.add(film_id, user_id).await?;
        let film = reload(&self.films, film_id).await?;
        tracing::info!(film_id = %film_id, user_id = %user_id, rate = film.rate, "film liked");
        Ok(film)
    }
}

// ── UnlikeFilm ───────────────────────────────────────────────────────────────

pub struct UnlikeFilmUseCase<F: FilmRepository, U: UserRepository, L: LikeRepository> {
    pub films: F,
    pub users: U,
    pub likes: L,
}

impl<F: FilmRepository, U: UserRepository, L: LikeRepository> UnlikeFilmUseCase<F, U, L> {
    /// Removing a like that was never given still returns the film.
    pub async fn execute(&self, film_id: FilmId, user_id: UserId) -> Result<Film, FilmorateError> {
        ensure_film_and_user(&self.films, &self.users, film_id, user_id).await?;
        self.likes.remove(film_id, user_id).await?;
        let film = reload(&self.films, film_id).await?;
        tracing::info!(film_id = %film_id, user_id = %user_id, rate = film.rate, "film unliked");
        Ok(film)
    }
}

// ── GetFilmLikes ─────────────────────────────────────────────────────────────

pub struct GetFilmLikesUseCase<F: FilmRepository, L: LikeRepository> {
    pub films: F,
    pub likes: L,
}

impl<F: FilmRepository, L: LikeRepository> GetFilmLikesUseCase<F, L> {
    pub async fn execute(&self, film_id: FilmId) -> Result<Vec<UserId>, FilmorateError> {
        if !self.films.exists(film_id).await? {
            return Err(FilmorateError::FilmNotFound(film_id));
        }
        self.likes.list_by_film(film_id).await
    }
}

// ── GetPopularFilms ──────────────────────────────────────────────────────────

pub struct GetPopularFilmsUseCase<L: LikeRepository> {
    pub likes: L,
}

impl<L: LikeRepository> GetPopularFilmsUseCase<L> {
    pub async fn execute(&self, count: Option<i64>) -> Result<Vec<Film>, FilmorateError> {
        let n = validate_count(count.unwrap_or(DEFAULT_POPULAR_COUNT))?;
        if n == 0 {
            return Ok(Vec::new());
        }
        self.likes.top_films(n).await
    }
}
