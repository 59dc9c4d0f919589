use crate::db::StoreError;
use crate::entities::{hero, hero_power, power, prelude::*};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// Repository for heroes and their power associations.
pub struct HeroRepository {
    conn: DatabaseConnection,
}

impl HeroRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Flat projection in primary-key order.
    pub async fn list(&self) -> Result<Vec<hero::Model>, StoreError> {
        let heroes = Hero::find()
            .order_by_asc(hero::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(heroes)
    }

    /// Hero plus one level of eager-loaded hero_power rows, each resolved
    /// to its Power. Returns `None` when the hero id is unknown.
    pub async fn get_with_powers(
        &self,
        id: i32,
    ) -> Result<Option<(hero::Model, Vec<(hero_power::Model, power::Model)>)>, StoreError> {
        let Some(hero) = Hero::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let rows = HeroPower::find()
            .filter(hero_power::Column::HeroId.eq(id))
            .find_also_related(Power)
            .order_by_asc(hero_power::Column::Id)
            .all(&self.conn)
            .await?;

        let mut hero_powers = Vec::with_capacity(rows.len());
        for (hp, related) in rows {
            // FK + cascade delete guarantee the power row exists; a miss
            // here means the schema invariant was broken out-of-band.
            let power = related.ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "power {} referenced by hero_power {} is missing",
                    hp.power_id, hp.id
                ))
            })?;
            hero_powers.push((hp, power));
        }

        Ok(Some((hero, hero_powers)))
    }

    /// Used by the seeder and tests; heroes have no creation endpoint.
    pub async fn create(&self, name: String, super_name: String) -> Result<hero::Model, StoreError> {
        let insert = Hero::insert(hero::ActiveModel {
            name: Set(name),
            super_name: Set(super_name),
            ..Default::default()
        })
        .exec(&self.conn)
        .await?;

        let model = Hero::find_by_id(insert.last_insert_id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("hero row vanished after insert".into()))?;

        Ok(model)
    }
}
