use crate::db::StoreError;
use crate::entities::{power, prelude::*};
use crate::validation::validate_description;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set,
    TransactionTrait,
};

pub struct PowerRepository {
    conn: DatabaseConnection,
}

impl PowerRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<power::Model>, StoreError> {
        let powers = Power::find()
            .order_by_asc(power::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(powers)
    }

    pub async fn get(&self, id: i32) -> Result<Option<power::Model>, StoreError> {
        let power = Power::find_by_id(id).one(&self.conn).await?;
        Ok(power)
    }

    /// Partial update: an absent description leaves the stored value
    /// untouched, a present one is validated before anything is written.
    /// Returns `None` when the power id is unknown.
    pub async fn update_description(
        &self,
        id: i32,
        description: Option<String>,
    ) -> Result<Option<power::Model>, StoreError> {
        let txn = self.conn.begin().await?;

        let Some(power) = Power::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let updated = if let Some(description) = description {
            validate_description(&description)?;

            let mut active = power.into_active_model();
            active.description = Set(description);
            active.update(&txn).await?
        } else {
            power
        };

        txn.commit().await?;
        Ok(Some(updated))
    }

    /// Used by the seeder and tests; powers have no creation endpoint.
    pub async fn create(
        &self,
        name: String,
        description: String,
    ) -> Result<power::Model, StoreError> {
        let insert = Power::insert(power::ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        })
        .exec(&self.conn)
        .await?;

        let model = Power::find_by_id(insert.last_insert_id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("power row vanished after insert".into()))?;

        Ok(model)
    }
}
