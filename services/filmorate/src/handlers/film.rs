use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use filmorate_domain::id::{FilmId, GenreId, MpaId, UserId};
use filmorate_domain::reference::{Genre, Mpa};

use crate::domain::types::{Film, FilmDraft};
use crate::error::FilmorateError;
use crate::handlers::{IdRef, JsonBody, PathParam, QueryParams};
use crate::state::AppState;
use crate::usecase::film::{
    CreateFilmUseCase, DeleteFilmUseCase, GetFilmUseCase, ListFilmsUseCase, UpdateFilmUseCase,
};
use crate::usecase::like::{
    GetFilmLikesUseCase, GetPopularFilmsUseCase, LikeFilmUseCase, UnlikeFilmUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmRequest {
    pub id: Option<FilmId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    /// Genre names in the request are ignored; only ids are read.
    pub genres: Option<Vec<IdRef<GenreId>>>,
    pub mpa: IdRef<MpaId>,
}

impl From<FilmRequest> for FilmDraft {
    fn from(body: FilmRequest) -> Self {
        FilmDraft {
            id: body.id,
            name: body.name,
            description: body.description,
            release_date: body.release_date,
            duration: body.duration,
            genre_ids: body
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| g.id)
                .collect(),
            mpa_id: body.mpa.id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmResponse {
    pub id: FilmId,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub rate: u64,
    /// Ordered by genre id.
    pub genres: Vec<Genre>,
    pub mpa: Mpa,
}

impl From<Film> for FilmResponse {
    fn from(film: Film) -> Self {
        FilmResponse {
            id: film.id,
            name: film.name,
            description: film.description,
            release_date: film.release_date,
            duration: film.duration,
            rate: film.rate,
            genres: film.genres.into_iter().collect(),
            mpa: film.mpa,
        }
    }
}

fn film_responses(films: Vec<Film>) -> Json<Vec<FilmResponse>> {
    Json(films.into_iter().map(FilmResponse::from).collect())
}

#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    pub count: Option<i64>,
}

// ── GET /films ───────────────────────────────────────────────────────────────

pub async fn list_films(
    State(state): State<AppState>,
) -> Result<Json<Vec<FilmResponse>>, FilmorateError> {
    let usecase = ListFilmsUseCase {
        repo: state.film_repo(),
    };
    Ok(film_responses(usecase.execute().await?))
}

// ── GET /films/{id} ──────────────────────────────────────────────────────────

pub async fn get_film(
    State(state): State<AppState>,
    PathParam(id): PathParam<FilmId>,
) -> Result<Json<FilmResponse>, FilmorateError> {
    let usecase = GetFilmUseCase {
        repo: state.film_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /films ──────────────────────────────────────────────────────────────

pub async fn create_film(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<FilmRequest>,
) -> Result<(StatusCode, Json<FilmResponse>), FilmorateError> {
    let usecase = CreateFilmUseCase {
        repo: state.film_repo(),
        catalog: state.catalog.clone(),
    };
    let film = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(film.into())))
}

// ── PUT /films ───────────────────────────────────────────────────────────────

pub async fn update_film(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<FilmRequest>,
) -> Result<Json<FilmResponse>, FilmorateError> {
    let usecase = UpdateFilmUseCase {
        repo: state.film_repo(),
        catalog: state.catalog.clone(),
    };
    Ok(Json(usecase.execute(body.into()).await?.into()))
}

// ── DELETE /films/{id} ───────────────────────────────────────────────────────

pub async fn delete_film(
    State(state): State<AppState>,
    PathParam(id): PathParam<FilmId>,
) -> Result<StatusCode, FilmorateError> {
    let usecase = DeleteFilmUseCase {
        repo: state.film_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PUT /films/{id}/like/{userId} ────────────────────────────────────────────

pub async fn like_film(
    State(state): State<AppState>,
    PathParam((film_id, user_id)): PathParam<(FilmId, UserId)>,
) -> Result<Json<FilmResponse>, FilmorateError> {
    let usecase = LikeFilmUseCase {
        films: state.film_repo(),
        users: state.user_repo(),
        likes: state.like_repo(),
    };
    Ok(Json(usecase.execute(film_id, user_id).await?.into()))
}

// ── DELETE /films/{id}/like/{userId} ─────────────────────────────────────────

pub async fn unlike_film(
    State(state): State<AppState>,
    PathParam((film_id, user_id)): PathParam<(FilmId, UserId)>,
) -> Result<Json<FilmResponse>, FilmorateError> {
    let usecase = UnlikeFilmUseCase {
        films: state.film_repo(),
        users: state.user_repo(),
        likes: state.like_repo(),
    };
    Ok(Json(usecase.execute(film_id, user_id).await?.into()))
}

// ── GET /films/{id}/likes ────────────────────────────────────────────────────

pub async fn get_film_likes(
    State(state): State<AppState>,
    PathParam(film_id): PathParam<FilmId>,
) -> Result<Json<Vec<UserId>>, FilmorateError> {
    let usecase = GetFilmLikesUseCase {
        films: state.film_repo(),
        likes: state.like_repo(),
    };
    Ok(Json(usecase.execute(film_id).await?))
}

// ── GET /films/popular ───────────────────────────────────────────────────────

pub async fn get_popular_films(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PopularQuery>,
) -> Result<Json<Vec<FilmResponse>>, FilmorateError> {
    let usecase = GetPopularFilmsUseCase {
        likes: state.like_repo(),
    };
    Ok(film_responses(usecase.execute(query.count).await?))
}
