use crate::db::StoreError;
use crate::entities::{hero, hero_power, power, prelude::*};
use crate::validation::{ValidationError, validate_strength};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set, TransactionTrait};

pub struct HeroPowerRepository {
    conn: DatabaseConnection,
}

impl HeroPowerRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Validates strength and both foreign keys inside the insert's
    /// transaction; the first failing check aborts the whole write.
    /// Returns the new row together with the hero and power it joins,
    /// for the nested creation response.
    pub async fn create(
        &self,
        strength: String,
        hero_id: i32,
        power_id: i32,
    ) -> Result<(hero_power::Model, hero::Model, power::Model), StoreError> {
        validate_strength(&strength)?;

        let txn = self.conn.begin().await?;

        let hero = Hero::find_by_id(hero_id)
            .one(&txn)
            .await?
            .ok_or(ValidationError::UnknownHero)?;
        let power = Power::find_by_id(power_id)
            .one(&txn)
            .await?
            .ok_or(ValidationError::UnknownPower)?;

        let insert = HeroPower::insert(hero_power::ActiveModel {
            strength: Set(strength),
            hero_id: Set(hero_id),
            power_id: Set(power_id),
            ..Default::default()
        })
        .exec(&txn)
        .await?;

        let model = HeroPower::find_by_id(insert.last_insert_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("hero_power row vanished after insert".into()))?;

        txn.commit().await?;
        Ok((model, hero, power))
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        let count = HeroPower::find().count(&self.conn).await?;
        Ok(count)
    }
}
