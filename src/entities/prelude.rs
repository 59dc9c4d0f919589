pub use super::appearance::Entity as Appearance;
pub use super::episode::Entity as Episode;
pub use super::guest::Entity as Guest;
pub use super::hero::Entity as Hero;
pub use super::hero_power::Entity as HeroPower;
pub use super::power::Entity as Power;
