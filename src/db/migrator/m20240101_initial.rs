use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        // Parents before join tables so the FK clauses resolve.
        manager
            .create_table(
                schema
                    .create_table_from_entity(Hero)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Power)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(HeroPower)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Episode)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Guest)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Appearance)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appearance).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Guest).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Episode).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HeroPower).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Power).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hero).to_owned())
            .await?;

        Ok(())
    }
}
