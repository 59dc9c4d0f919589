use crate::db::StoreError;
use crate::entities::{guest, prelude::*};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

pub struct GuestRepository {
    conn: DatabaseConnection,
}

impl GuestRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<guest::Model>, StoreError> {
        let guests = Guest::find()
            .order_by_asc(guest::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(guests)
    }

    /// Used by the seeder and tests; guests have no creation endpoint.
    pub async fn create(
        &self,
        name: String,
        occupation: String,
    ) -> Result<guest::Model, StoreError> {
        let insert = Guest::insert(guest::ActiveModel {
            name: Set(name),
            occupation: Set(occupation),
            ..Default::default()
        })
        .exec(&self.conn)
        .await?;

        let model = Guest::find_by_id(insert.last_insert_id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("guest row vanished after insert".into()))?;

        Ok(model)
    }
}
