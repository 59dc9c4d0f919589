use crate::db::StoreError;
use crate::entities::{appearance, episode, guest, prelude::*};
use crate::validation::{ValidationError, validate_rating};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set, TransactionTrait};

pub struct AppearanceRepository {
    conn: DatabaseConnection,
}

impl AppearanceRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Validates the rating and both foreign keys inside the insert's
    /// transaction. Episode and guest existence are checked the same way
    /// hero_power checks its references.
    pub async fn create(
        &self,
        rating: i32,
        episode_id: i32,
        guest_id: i32,
    ) -> Result<(appearance::Model, episode::Model, guest::Model), StoreError> {
        validate_rating(rating)?;

        let txn = self.conn.begin().await?;

        let episode = Episode::find_by_id(episode_id)
            .one(&txn)
            .await?
            .ok_or(ValidationError::UnknownEpisode)?;
        let guest = Guest::find_by_id(guest_id)
            .one(&txn)
            .await?
            .ok_or(ValidationError::UnknownGuest)?;

        let insert = Appearance::insert(appearance::ActiveModel {
            rating: Set(rating),
            episode_id: Set(episode_id),
            guest_id: Set(guest_id),
            ..Default::default()
        })
        .exec(&txn)
        .await?;

        let model = Appearance::find_by_id(insert.last_insert_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("appearance row vanished after insert".into()))?;

        txn.commit().await?;
        Ok((model, episode, guest))
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        let count = Appearance::find().count(&self.conn).await?;
        Ok(count)
    }
}
