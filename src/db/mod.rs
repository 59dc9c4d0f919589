use crate::entities::{appearance, episode, guest, hero, hero_power, power};
use crate::validation::ValidationError;
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub mod migrator;
pub mod repositories;
pub mod seed;

/// Storage-layer failure: either a rejected write (surfaced to the client
/// as a 400) or a database error (surfaced as a 500).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Db(#[from] DbErr),
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        // Every pooled connection to ":memory:" opens a distinct database,
        // so in-memory stores must run on a single connection.
        if db_url.contains(":memory:") {
            Self::with_pool_options(db_url, 1, 1).await
        } else {
            Self::with_pool_options(db_url, 5, 1).await
        }
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn hero_repo(&self) -> repositories::hero::HeroRepository {
        repositories::hero::HeroRepository::new(self.conn.clone())
    }

    fn power_repo(&self) -> repositories::power::PowerRepository {
        repositories::power::PowerRepository::new(self.conn.clone())
    }

    fn hero_power_repo(&self) -> repositories::hero_power::HeroPowerRepository {
        repositories::hero_power::HeroPowerRepository::new(self.conn.clone())
    }

    fn episode_repo(&self) -> repositories::episode::EpisodeRepository {
        repositories::episode::EpisodeRepository::new(self.conn.clone())
    }

    fn guest_repo(&self) -> repositories::guest::GuestRepository {
        repositories::guest::GuestRepository::new(self.conn.clone())
    }

    fn appearance_repo(&self) -> repositories::appearance::AppearanceRepository {
        repositories::appearance::AppearanceRepository::new(self.conn.clone())
    }

    // ========================================================================
    // Heroes & Powers
    // ========================================================================

    pub async fn list_heroes(&self) -> Result<Vec<hero::Model>, StoreError> {
        self.hero_repo().list().await
    }

    pub async fn get_hero(
        &self,
        id: i32,
    ) -> Result<Option<(hero::Model, Vec<(hero_power::Model, power::Model)>)>, StoreError> {
        self.hero_repo().get_with_powers(id).await
    }

    pub async fn create_hero(
        &self,
        name: String,
        super_name: String,
    ) -> Result<hero::Model, StoreError> {
        self.hero_repo().create(name, super_name).await
    }

    pub async fn list_powers(&self) -> Result<Vec<power::Model>, StoreError> {
        self.power_repo().list().await
    }

    pub async fn get_power(&self, id: i32) -> Result<Option<power::Model>, StoreError> {
        self.power_repo().get(id).await
    }

    pub async fn update_power(
        &self,
        id: i32,
        description: Option<String>,
    ) -> Result<Option<power::Model>, StoreError> {
        self.power_repo().update_description(id, description).await
    }

    pub async fn create_power(
        &self,
        name: String,
        description: String,
    ) -> Result<power::Model, StoreError> {
        self.power_repo().create(name, description).await
    }

    pub async fn create_hero_power(
        &self,
        strength: String,
        hero_id: i32,
        power_id: i32,
    ) -> Result<(hero_power::Model, hero::Model, power::Model), StoreError> {
        self.hero_power_repo()
            .create(strength, hero_id, power_id)
            .await
    }

    pub async fn count_hero_powers(&self) -> Result<u64, StoreError> {
        self.hero_power_repo().count().await
    }

    // ========================================================================
    // Episodes, Guests & Appearances
    // ========================================================================

    pub async fn list_episodes(&self) -> Result<Vec<episode::Model>, StoreError> {
        self.episode_repo().list().await
    }

    pub async fn get_episode(
        &self,
        id: i32,
    ) -> Result<Option<(episode::Model, Vec<(appearance::Model, guest::Model)>)>, StoreError> {
        self.episode_repo().get_with_appearances(id).await
    }

    pub async fn create_episode(
        &self,
        date: String,
        number: i32,
    ) -> Result<episode::Model, StoreError> {
        self.episode_repo().create(date, number).await
    }

    pub async fn list_guests(&self) -> Result<Vec<guest::Model>, StoreError> {
        self.guest_repo().list().await
    }

    pub async fn create_guest(
        &self,
        name: String,
        occupation: String,
    ) -> Result<guest::Model, StoreError> {
        self.guest_repo().create(name, occupation).await
    }

    pub async fn create_appearance(
        &self,
        rating: i32,
        episode_id: i32,
        guest_id: i32,
    ) -> Result<(appearance::Model, episode::Model, guest::Model), StoreError> {
        self.appearance_repo()
            .create(rating, episode_id, guest_id)
            .await
    }

    pub async fn count_appearances(&self) -> Result<u64, StoreError> {
        self.appearance_repo().count().await
    }
}
