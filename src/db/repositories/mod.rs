pub mod appearance;
pub mod episode;
pub mod guest;
pub mod hero;
pub mod hero_power;
pub mod power;
