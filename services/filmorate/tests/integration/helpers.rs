use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::{ActiveValue::Set, ConnectOptions, Database, DatabaseConnection, EntityTrait};

use filmorate::infra::bootstrap::{bootstrap_schema, load_catalog};
use filmorate::state::AppState;
use filmorate_schema::{film_genre, films, friends, likes, users};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fresh in-memory SQLite database with the schema and reference rows in place.
pub async fn empty_state() -> AppState {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // One long-lived connection, so every query sees the same in-memory database.
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    bootstrap_schema(&db).await.unwrap();
    let catalog = load_catalog(&db).await.unwrap();
    AppState {
        db,
        catalog: Arc::new(catalog),
    }
}

/// [`empty_state`] plus three films, three users and their likes and friendships:
///
/// - likes: film1 <- {2}, film2 <- {1, 2}, film3 <- {1, 2, 3}
/// - friends: 1 -> 2, 1 -> 3, 2 -> 3, 3 -> 1
pub async fn seeded_state() -> AppState {
    let state = empty_state().await;
    seed(&state.db).await;
    state
}

async fn seed(db: &DatabaseConnection) {
    let films = [
        (1, "film1", "first test film", date(1990, 9, 10), 150, 2),
        (2, "film2", "second test film", date(2005, 12, 4), 120, 1),
        (3, "film3", "third test film", date(2008, 10, 1), 180, 4),
    ];
    films::Entity::insert_many(films.map(
        |(id, name, description, release_date, duration, mpa_id)| films::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            description: Set(description.to_owned()),
            release_date: Set(release_date),
            duration: Set(duration),
            mpa_id: Set(mpa_id),
        },
    ))
    .exec_without_returning(db)
    .await
    .unwrap();

    let users = [
        (1, "1@yandex.ru", "user1", "first", date(1992, 3, 4)),
        (2, "2@yandex.ru", "user2", "second", date(1994, 10, 14)),
        (3, "3@yandex.ru", "user3", "third", date(1996, 6, 20)),
    ];
    users::Entity::insert_many(users.map(|(id, email, login, name, birthday)| {
        users::ActiveModel {
            id: Set(id),
            email: Set(email.to_owned()),
            login: Set(login.to_owned()),
            name: Set(name.to_owned()),
            birthday: Set(birthday),
        }
    }))
    .exec_without_returning(db)
    .await
    .unwrap();

    let film_genres = [(1, 1), (2, 4), (3, 2), (3, 4), (3, 6)];
    film_genre::Entity::insert_many(film_genres.map(|(film_id, genre_id)| {
        film_genre::ActiveModel {
            film_id: Set(film_id),
            genre_id: Set(genre_id),
        }
    }))
    .exec_without_returning(db)
    .await
    .unwrap();

    let film_likes = [(1, 2), (2, 1), (2, 2), (3, 1), (3, 2), (3, 3)];
    likes::Entity::insert_many(film_likes.map(|(film_id, user_id)| likes::ActiveModel {
        film_id: Set(film_id),
        user_id: Set(user_id),
    }))
    .exec_without_returning(db)
    .await
    .unwrap();

    let edges = [(1, 2), (1, 3), (2, 3), (3, 1)];
    friends::Entity::insert_many(edges.map(|(user_id, friend_id)| friends::ActiveModel {
        user_id: Set(user_id),
        friend_id: Set(friend_id),
    }))
    .exec_without_returning(db)
    .await
    .unwrap();
}
