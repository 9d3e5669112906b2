//! Startup schema creation and reference data.

use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Schema,
    sea_query::OnConflict,
};

use filmorate_domain::reference::{Genre, Mpa};
use filmorate_schema::{film_genre, films, friends, genres, likes, mpa, users};

use crate::domain::catalog::Catalog;

pub const GENRES: [(i32, &str); 6] = [
    (1, "Комедия"),
    (2, "Драма"),
    (3, "Мультфильм"),
    (4, "Триллер"),
    (5, "Документальный"),
    (6, "Боевик"),
];

pub const MPA_RATINGS: [(i32, &str); 5] =
    [(1, "G"), (2, "PG"), (3, "PG-13"), (4, "R"), (5, "NC-17")];

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(db.get_database_backend().build(&stmt)).await?;
    Ok(())
}

/// Create every table that does not exist yet, then seed the genre and MPA rows.
///
/// Safe to run on every start; existing tables and reference rows are left alone.
pub async fn bootstrap_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());
    // Parents before the tables whose foreign keys point at them.
    create_table(db, &schema, mpa::Entity).await?;
    create_table(db, &schema, genres::Entity).await?;
    create_table(db, &schema, users::Entity).await?;
    create_table(db, &schema, films::Entity).await?;
    create_table(db, &schema, film_genre::Entity).await?;
    create_table(db, &schema, likes::Entity).await?;
    create_table(db, &schema, friends::Entity).await?;

    genres::Entity::insert_many(GENRES.map(|(id, name)| genres::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
    }))
    .on_conflict(OnConflict::column(genres::Column::Id).do_nothing().to_owned())
    .exec_without_returning(db)
    .await?;

    mpa::Entity::insert_many(MPA_RATINGS.map(|(id, name)| mpa::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
    }))
    .on_conflict(OnConflict::column(mpa::Column::Id).do_nothing().to_owned())
    .exec_without_returning(db)
    .await?;

    tracing::info!("database schema ready");
    Ok(())
}

/// Read both lookup tables into an immutable [`Catalog`].
pub async fn load_catalog(db: &DatabaseConnection) -> Result<Catalog, DbErr> {
    let genre_rows = genres::Entity::find()
        .order_by_asc(genres::Column::Id)
        .all(db)
        .await?;
    let mpa_rows = mpa::Entity::find()
        .order_by_asc(mpa::Column::Id)
        .all(db)
        .await?;
    tracing::info!(
        genres = genre_rows.len(),
        mpa = mpa_rows.len(),
        "reference data loaded"
    );
    Ok(Catalog::new(
        genre_rows.into_iter().map(|g| Genre::new(g.id, g.name)),
        mpa_rows.into_iter().map(|m| Mpa::new(m.id, m.name)),
    ))
}
