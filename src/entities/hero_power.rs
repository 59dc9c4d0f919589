use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Join row carrying the Hero↔Power edge attribute `strength`.
/// Allowed values are enforced in `crate::validation`, not by the schema.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "hero_power")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub strength: String,
    pub hero_id: i32,
    pub power_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hero::Entity",
        from = "Column::HeroId",
        to = "super::hero::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Hero,
    #[sea_orm(
        belongs_to = "super::power::Entity",
        from = "Column::PowerId",
        to = "super::power::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Power,
}

impl Related<super::hero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hero.def()
    }
}

impl Related<super::power::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Power.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
