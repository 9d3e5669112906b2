use sea_orm::entity::prelude::*;

/// Genre reference row. Seeded at bootstrap, read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "genres")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::film_genre::Entity")]
    FilmGenre,
}

impl Related<super::film_genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmGenre.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
