use sea_orm::entity::prelude::*;

/// Film record. `rate` is not stored; it is the row count in `likes`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "films")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub release_date: chrono::NaiveDate,
    pub duration: i32,
    pub mpa_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mpa::Entity",
        from = "Column::MpaId",
        to = "super::mpa::Column::Id"
    )]
    Mpa,
    #[sea_orm(has_many = "super::likes::Entity")]
    Likes,
    #[sea_orm(has_many = "super::film_genre::Entity")]
    FilmGenre,
}

impl Related<super::mpa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mpa.def()
    }
}

impl Related<super::likes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl Related<super::film_genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmGenre.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
