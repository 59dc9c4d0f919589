//! Sample-data seeding for local development, invoked via `herodex seed`.

use super::{Store, StoreError};
use tracing::info;

/// Inserts the sample heroes, powers, episodes, guests and appearances.
/// A no-op when heroes already exist, so running it twice is safe.
pub async fn seed_sample_data(store: &Store) -> Result<(), StoreError> {
    if !store.list_heroes().await?.is_empty() {
        info!("Database already seeded, skipping");
        return Ok(());
    }

    store
        .create_hero("Kamala Khan".into(), "Ms. Marvel".into())
        .await?;
    store
        .create_hero("Doreen Green".into(), "Squirrel Girl".into())
        .await?;

    store
        .create_power(
            "super strength".into(),
            "gives the wielder super-human strengths".into(),
        )
        .await?;
    store
        .create_power(
            "flight".into(),
            "gives the wielder the ability to fly through the skies at supersonic speed".into(),
        )
        .await?;

    let episode1 = store.create_episode("1/11/99".into(), 1).await?;
    let episode2 = store.create_episode("1/12/99".into(), 2).await?;

    let guest1 = store
        .create_guest("Michael J. Fox".into(), "actor".into())
        .await?;
    let guest2 = store
        .create_guest("Sandra Bernhard".into(), "Comedian".into())
        .await?;

    store.create_appearance(4, episode1.id, guest1.id).await?;
    store.create_appearance(5, episode2.id, guest2.id).await?;

    info!("Seeded sample heroes, powers, episodes and guests");
    Ok(())
}
