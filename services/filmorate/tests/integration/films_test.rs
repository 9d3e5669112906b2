use std::collections::BTreeSet;

use filmorate::domain::repository::FilmRepository;
use filmorate::domain::types::FilmDraft;
use filmorate::error::FilmorateError;
use filmorate::usecase::film::{
    CreateFilmUseCase, DeleteFilmUseCase, GetFilmUseCase, ListFilmsUseCase, UpdateFilmUseCase,
};
use filmorate_domain::id::{FilmId, GenreId, MpaId};

use crate::helpers::{date, empty_state, seeded_state};

fn draft(genres: &[i32]) -> FilmDraft {
    FilmDraft {
        id: None,
        name: "film4".into(),
        description: "fourth test film".into(),
        release_date: date(2012, 5, 1),
        duration: 95,
        genre_ids: genres.iter().copied().map(GenreId).collect(),
        mpa_id: MpaId(3),
    }
}

fn genre_ids(genres: &BTreeSet<filmorate_domain::reference::Genre>) -> Vec<i32> {
    genres.iter().map(|g| g.id.0).collect()
}

#[tokio::test]
async fn should_list_seeded_films_with_rate_genres_and_mpa() {
    let state = seeded_state().await;
    let films = ListFilmsUseCase {
        repo: state.film_repo(),
    }
    .execute()
    .await
    .unwrap();

    let summary: Vec<(i32, &str, u64, Vec<i32>, &str)> = films
        .iter()
        .map(|f| (f.id.0, f.name.as_str(), f.rate, genre_ids(&f.genres), f.mpa.name.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, "film1", 1, vec![1], "PG"),
            (2, "film2", 2, vec![4], "G"),
            (3, "film3", 3, vec![2, 4, 6], "R"),
        ]
    );
    assert_eq!(films[0].description, "first test film");
    assert_eq!(films[0].release_date, date(1990, 9, 10));
    assert_eq!(films[0].duration, 150);
}

#[tokio::test]
async fn should_report_unknown_film_with_exact_message() {
    let state = seeded_state().await;
    let err = GetFilmUseCase {
        repo: state.film_repo(),
    }
    .execute(FilmId(999))
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "film with id=999 not found");
}

#[tokio::test]
async fn should_create_film_with_collapsed_genres() {
    let state = empty_state().await;
    let usecase = CreateFilmUseCase {
        repo: state.film_repo(),
        catalog: state.catalog.clone(),
    };
    let film = usecase.execute(draft(&[1, 3, 1])).await.unwrap();

    assert_eq!(film.rate, 0);
    assert_eq!(genre_ids(&film.genres), vec![1, 3]);
    assert_eq!(film.mpa.name, "PG-13");

    let stored = state.film_repo().find_by_id(film.id).await.unwrap().unwrap();
    assert_eq!(stored, film);
}

#[tokio::test]
async fn should_assign_next_id_after_seeded_films() {
    let state = seeded_state().await;
    let usecase = CreateFilmUseCase {
        repo: state.film_repo(),
        catalog: state.catalog.clone(),
    };
    let film = usecase.execute(draft(&[])).await.unwrap();
    assert_eq!(film.id, FilmId(4));
    assert!(film.genres.is_empty());
}

#[tokio::test]
async fn should_shrink_genre_set_on_update() {
    let state = seeded_state().await;
    let usecase = UpdateFilmUseCase {
        repo: state.film_repo(),
        catalog: state.catalog.clone(),
    };
    let updated = usecase
        .execute(FilmDraft {
            id: Some(FilmId(3)),
            name: "film3 updated".into(),
            ..draft(&[4])
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "film3 updated");
    assert_eq!(updated.rate, 3, "likes survive an update");
    assert_eq!(genre_ids(&updated.genres), vec![4]);
    let genres = state.film_repo().genres_for_film(FilmId(3)).await.unwrap();
    assert_eq!(genre_ids(&genres), vec![4]);
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_film() {
    let state = seeded_state().await;
    let usecase = UpdateFilmUseCase {
        repo: state.film_repo(),
        catalog: state.catalog.clone(),
    };
    let result = usecase
        .execute(FilmDraft {
            id: Some(FilmId(999)),
            ..draft(&[])
        })
        .await;
    assert!(
        matches!(result, Err(FilmorateError::FilmNotFound(FilmId(999)))),
        "expected FilmNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_report_film_not_found_from_repository_save() {
    let state = seeded_state().await;
    let result = state
        .film_repo()
        .save(&FilmDraft {
            id: Some(FilmId(999)),
            ..draft(&[1])
        })
        .await;
    assert!(matches!(result, Err(FilmorateError::FilmNotFound(FilmId(999)))));
}

#[tokio::test]
async fn should_return_genres_for_film() {
    let state = seeded_state().await;
    let genres = state.film_repo().genres_for_film(FilmId(3)).await.unwrap();
    let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Драма", "Триллер", "Боевик"]);

    let none = state.film_repo().genres_for_film(FilmId(999)).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn should_delete_film_with_its_relations() {
    let state = seeded_state().await;
    let usecase = DeleteFilmUseCase {
        repo: state.film_repo(),
    };
    usecase.execute(FilmId(3)).await.unwrap();

    assert!(!state.film_repo().exists(FilmId(3)).await.unwrap());
    assert!(state.film_repo().genres_for_film(FilmId(3)).await.unwrap().is_empty());
    let result = usecase.execute(FilmId(3)).await;
    assert!(matches!(result, Err(FilmorateError::FilmNotFound(_))));
}
