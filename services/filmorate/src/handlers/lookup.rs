use axum::{Json, extract::State};

use filmorate_domain::id::{GenreId, MpaId};
use filmorate_domain::reference::{Genre, Mpa};

use crate::error::FilmorateError;
use crate::handlers::PathParam;
use crate::state::AppState;
use crate::usecase::lookup::{GetGenreUseCase, GetMpaUseCase, ListGenresUseCase, ListMpaUseCase};

// ── GET /genres ──────────────────────────────────────────────────────────────

pub async fn list_genres(State(state): State<AppState>) -> Json<Vec<Genre>> {
    let usecase = ListGenresUseCase {
        catalog: state.catalog.clone(),
    };
    Json(usecase.execute())
}

// ── GET /genres/{id} ─────────────────────────────────────────────────────────

pub async fn get_genre(
    State(state): State<AppState>,
    PathParam(id): PathParam<GenreId>,
) -> Result<Json<Genre>, FilmorateError> {
    let usecase = GetGenreUseCase {
        catalog: state.catalog.clone(),
    };
    Ok(Json(usecase.execute(id)?))
}

// ── GET /mpa ─────────────────────────────────────────────────────────────────

pub async fn list_mpa(State(state): State<AppState>) -> Json<Vec<Mpa>> {
    let usecase = ListMpaUseCase {
        catalog: state.catalog.clone(),
    };
    Json(usecase.execute())
}

// ── GET /mpa/{id} ────────────────────────────────────────────────────────────

pub async fn get_mpa(
    State(state): State<AppState>,
    PathParam(id): PathParam<MpaId>,
) -> Result<Json<Mpa>, FilmorateError> {
    let usecase = GetMpaUseCase {
        catalog: state.catalog.clone(),
    };
    Ok(Json(usecase.execute(id)?))
}
