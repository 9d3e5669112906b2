use sea_orm::entity::prelude::*;

/// MPA rating reference row. Seeded at bootstrap, read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mpa")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::films::Entity")]
    Films,
}

impl Related<super::films::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Films.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
