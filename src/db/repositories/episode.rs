use crate::db::StoreError;
use crate::entities::{appearance, episode, guest, prelude::*};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};

pub struct EpisodeRepository {
    conn: DatabaseConnection,
}

impl EpisodeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<episode::Model>, StoreError> {
        let episodes = Episode::find()
            .order_by_asc(episode::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(episodes)
    }

    /// Episode plus its appearances, each resolved to the appearing Guest.
    /// Returns `None` when the episode id is unknown.
    pub async fn get_with_appearances(
        &self,
        id: i32,
    ) -> Result<Option<(episode::Model, Vec<(appearance::Model, guest::Model)>)>, StoreError> {
        let Some(episode) = Episode::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let rows = Appearance::find()
            .filter(appearance::Column::EpisodeId.eq(id))
            .find_also_related(Guest)
            .order_by_asc(appearance::Column::Id)
            .all(&self.conn)
            .await?;

        let mut appearances = Vec::with_capacity(rows.len());
        for (appearance, related) in rows {
            let guest = related.ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "guest {} referenced by appearance {} is missing",
                    appearance.guest_id, appearance.id
                ))
            })?;
            appearances.push((appearance, guest));
        }

        Ok(Some((episode, appearances)))
    }

    /// Used by the seeder and tests; episodes have no creation endpoint.
    pub async fn create(&self, date: String, number: i32) -> Result<episode::Model, StoreError> {
        let insert = Episode::insert(episode::ActiveModel {
            date: Set(date),
            number: Set(number),
            ..Default::default()
        })
        .exec(&self.conn)
        .await?;

        let model = Episode::find_by_id(insert.last_insert_id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("episode row vanished after insert".into()))?;

        Ok(model)
    }
}
