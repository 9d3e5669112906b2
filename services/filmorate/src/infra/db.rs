use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Select, TransactionError, TransactionTrait,
    sea_query::{Expr, OnConflict, Query, SimpleExpr},
};

use filmorate_domain::id::{FilmId, GenreId, MpaId, UserId};
use filmorate_domain::reference::Genre;
use filmorate_schema::{film_genre, films, friends, likes, users};

use crate::domain::catalog::Catalog;
use crate::domain::repository::{
    FilmRepository, FriendRepository, LikeRepository, UserRepository,
};
use crate::domain::types::{Film, FilmDraft, User, UserDraft};
use crate::error::FilmorateError;

// ── Film rows ────────────────────────────────────────────────────────────────

/// A `films` row with its like count.
#[derive(Debug, FromQueryResult)]
struct FilmRow {
    id: i32,
    name: String,
    description: String,
    release_date: chrono::NaiveDate,
    duration: i32,
    mpa_id: i32,
    rate: i64,
}

fn like_count() -> SimpleExpr {
    Expr::col((likes::Entity, likes::Column::UserId)).count()
}

/// `films LEFT JOIN likes`, one row per film with `rate = COUNT(likes.user_id)`.
fn film_rows() -> Select<films::Entity> {
    films::Entity::find()
        .column_as(like_count(), "rate")
        .left_join(likes::Entity)
        .group_by(films::Column::Id)
}

/// Run a film query and attach each film's genres and MPA rating.
async fn load_films(
    db: &DatabaseConnection,
    catalog: &Catalog,
    select: Select<films::Entity>,
) -> Result<Vec<Film>, FilmorateError> {
    let rows = select
        .into_model::<FilmRow>()
        .all(db)
        .await
        .context("select films with like counts")?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let links = film_genre::Entity::find()
        .filter(film_genre::Column::FilmId.is_in(rows.iter().map(|r| r.id)))
        .all(db)
        .await
        .context("select film genres")?;
    let mut genre_ids: BTreeMap<i32, BTreeSet<GenreId>> = BTreeMap::new();
    for link in links {
        genre_ids
            .entry(link.film_id)
            .or_default()
            .insert(GenreId(link.genre_id));
    }

    rows.into_iter()
        .map(|row| {
            let genres = genre_ids.remove(&row.id).unwrap_or_default();
            film_from_row(catalog, row, &genres)
        })
        .collect()
}

fn film_from_row(
    catalog: &Catalog,
    row: FilmRow,
    genre_ids: &BTreeSet<GenreId>,
) -> Result<Film, FilmorateError> {
    let genres = catalog
        .resolve_genres(genre_ids)
        .context("resolve stored film genres")?;
    let mpa = catalog
        .mpa(MpaId(row.mpa_id))
        .context("resolve stored film mpa")?;
    Ok(Film {
        id: FilmId(row.id),
        name: row.name,
        description: row.description,
        release_date: row.release_date,
        duration: row.duration,
        rate: u64::try_from(row.rate).unwrap_or_default(),
        genres,
        mpa,
    })
}

// ── Film repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFilmRepository {
    pub db: DatabaseConnection,
    pub catalog: Arc<Catalog>,
}

impl FilmRepository for DbFilmRepository {
    async fn find_by_id(&self, id: FilmId) -> Result<Option<Film>, FilmorateError> {
        let select = film_rows().filter(films::Column::Id.eq(id.0));
        let films = load_films(&self.db, &self.catalog, select).await?;
        Ok(films.into_iter().next())
    }

    async fn list(&self) -> Result<Vec<Film>, FilmorateError> {
        let select = film_rows().order_by_asc(films::Column::Id);
        load_films(&self.db, &self.catalog, select).await
    }

    async fn exists(&self, id: FilmId) -> Result<bool, FilmorateError> {
        let count = films::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .context("count film by id")?;
        Ok(count > 0)
    }

    async fn save(&self, draft: &FilmDraft) -> Result<Film, FilmorateError> {
        let saved = self
            .db
            .transaction::<_, i32, DbErr>(|txn| {
                let draft = draft.clone();
                Box::pin(async move {
                    let am = films::ActiveModel {
                        id: NotSet,
                        name: Set(draft.name),
                        description: Set(draft.description),
                        release_date: Set(draft.release_date),
                        duration: Set(draft.duration),
                        mpa_id: Set(draft.mpa_id.0),
                    };
                    let id = match draft.id {
                        None => am.insert(txn).await?.id,
                        Some(id) => {
                            let result = films::Entity::update_many()
                                .set(am)
                                .filter(films::Column::Id.eq(id.0))
                                .exec(txn)
                                .await?;
                            if result.rows_affected == 0 {
                                return Err(DbErr::RecordNotUpdated);
                            }
                            film_genre::Entity::delete_many()
                                .filter(film_genre::Column::FilmId.eq(id.0))
                                .exec(txn)
                                .await?;
                            id.0
                        }
                    };
                    if !draft.genre_ids.is_empty() {
                        film_genre::Entity::insert_many(draft.genre_ids.iter().map(|genre_id| {
                            film_genre::ActiveModel {
                                film_id: Set(id),
                                genre_id: Set(genre_id.0),
                            }
                        }))
                        .exec_without_returning(txn)
                        .await?;
                    }
                    Ok(id)
                })
            })
            .await;

        let id = match (saved, draft.id) {
            (Ok(id), _) => FilmId(id),
            (Err(TransactionError::Transaction(DbErr::RecordNotUpdated)), Some(id)) => {
                return Err(FilmorateError::FilmNotFound(id));
            }
            (Err(e), _) => return Err(anyhow::Error::new(e).context("save film").into()),
        };
        self.find_by_id(id)
            .await?
            .ok_or(FilmorateError::FilmNotFound(id))
    }

    async fn delete(&self, id: FilmId) -> Result<bool, FilmorateError> {
        let deleted = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                Box::pin(async move {
                    likes::Entity::delete_many()
                        .filter(likes::Column::FilmId.eq(id.0))
                        .exec(txn)
                        .await?;
                    film_genre::Entity::delete_many()
                        .filter(film_genre::Column::FilmId.eq(id.0))
                        .exec(txn)
                        .await?;
                    let result = films::Entity::delete_by_id(id.0).exec(txn).await?;
                    Ok(result.rows_affected)
                })
            })
            .await
            .context("delete film")?;
        Ok(deleted > 0)
    }

    async fn genres_for_film(&self, id: FilmId) -> Result<BTreeSet<Genre>, FilmorateError> {
        let links = film_genre::Entity::find()
            .filter(film_genre::Column::FilmId.eq(id.0))
            .all(&self.db)
            .await
            .context("select genres for film")?;
        let ids: BTreeSet<GenreId> = links.into_iter().map(|l| GenreId(l.genre_id)).collect();
        let genres = self
            .catalog
            .resolve_genres(&ids)
                .context("resolve stored film genres")?;
        Ok(genres)
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, FilmorateError> {
        let model = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn list(&self) -> Result<Vec<User>, FilmorateError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn exists(&self, id: UserId) -> Result<bool, FilmorateError> {
        let count = users::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .context("count user by id")?;
        Ok(count > 0)
    }

    async fn save(&self, draft: &UserDraft) -> Result<User, FilmorateError> {
        let am = users::ActiveModel {
            id: draft.id.map_or(NotSet, |id| Set(id.0)),
            email: Set(draft.email.clone()),
            login: Set(draft.login.clone()),
            name: Set(draft.display_name().to_owned()),
            birthday: Set(draft.birthday),
        };
        let Some(id) = draft.id else {
            let model = am.insert(&self.db).await.context("insert user")?;
            return Ok(user_from_model(model));
        };
        match am.update(&self.db).await {
            Ok(model) => Ok(user_from_model(model)),
            Err(DbErr::RecordNotUpdated) => Err(FilmorateError::UserNotFound(id)),
            Err(e) => Err(anyhow::Error::new(e).context("update user").into()),
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: UserId(model.id),
        email: model.email,
        login: model.login,
        name: model.name,
        birthday: model.birthday,
    }
}

// ── Like repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLikeRepository {
    pub db: DatabaseConnection,
    pub catalog: Arc<Catalog>,
}

impl LikeRepository for DbLikeRepository {
    async fn add(&self, film_id: FilmId, user_id: UserId) -> Result<(), FilmorateError> {
        let like = likes::ActiveModel {
            film_id: Set(film_id.0),
            user_id: Set(user_id.0),
        };
        likes::Entity::insert(like)
            .on_conflict(
                OnConflict::columns([likes::Column::FilmId, likes::Column::UserId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert like")?;
        Ok(())
    }

    async fn remove(&self, film_id: FilmId, user_id: UserId) -> Result<(), FilmorateError> {
        likes::Entity::delete_many()
            .filter(likes::Column::FilmId.eq(film_id.0))
            .filter(likes::Column::UserId.eq(user_id.0))
            .exec(&self.db)
            .await
            .context("delete like")?;
        Ok(())
    }

    async fn list_by_film(&self, film_id: FilmId) -> Result<Vec<UserId>, FilmorateError> {
        let models = likes::Entity::find()
            .filter(likes::Column::FilmId.eq(film_id.0))
            .order_by_asc(likes::Column::UserId)
            .all(&self.db)
            .await
            .context("list likes by film")?;
        Ok(models.into_iter().map(|m| UserId(m.user_id)).collect())
    }

    async fn top_films(&self, n: u64) -> Result<Vec<Film>, FilmorateError> {
        // LIMIT is a signed 64-bit value on every backend.
        let limit = n.min(i64::MAX as u64);
        let select = film_rows()
            .order_by_desc(like_count())
            .order_by_asc(films::Column::Id)
            .limit(limit);
        load_films(&self.db, &self.catalog, select).await
    }
}

// ── Friend repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFriendRepository {
    pub db: DatabaseConnection,
}

/// `SELECT friend_id FROM friends WHERE user_id = ?`
fn friend_ids_of(user_id: UserId) -> sea_orm::sea_query::SelectStatement {
    Query::select()
        .column(friends::Column::FriendId)
        .from(friends::Entity)
        .and_where(Expr::col(friends::Column::UserId).eq(user_id.0))
        .to_owned()
}

impl FriendRepository for DbFriendRepository {
    async fn add(&self, user_id: UserId, friend_id: UserId) -> Result<(), FilmorateError> {
        let edge = friends::ActiveModel {
            user_id: Set(user_id.0),
            friend_id: Set(friend_id.0),
        };
        friends::Entity::insert(edge)
            .on_conflict(
                OnConflict::columns([friends::Column::UserId, friends::Column::FriendId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert friend edge")?;
        Ok(())
    }

    async fn remove(&self, user_id: UserId, friend_id: UserId) -> Result<(), FilmorateError> {
        friends::Entity::delete_many()
            .filter(friends::Column::UserId.eq(user_id.0))
            .filter(friends::Column::FriendId.eq(friend_id.0))
            .exec(&self.db)
            .await
            .context("delete friend edge")?;
        Ok(())
    }

    async fn list_friends(&self, user_id: UserId) -> Result<Vec<User>, FilmorateError> {
        let models = users::Entity::find()
            .filter(users::Column::Id.in_subquery(friend_ids_of(user_id)))
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list friends")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn list_common(&self, a: UserId, b: UserId) -> Result<Vec<User>, FilmorateError> {
        let models = users::Entity::find()
            .filter(users::Column::Id.in_subquery(friend_ids_of(a)))
            .filter(users::Column::Id.in_subquery(friend_ids_of(b)))
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list common friends")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }
}
