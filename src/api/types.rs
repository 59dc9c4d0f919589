use serde::{Deserialize, Serialize};

use crate::entities::{appearance, episode, guest, hero, hero_power, power};

// ============================================================================
// Response DTOs — exact documented shapes, list views stay flat while
// detail/create views expand one level of relations.
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HeroDto {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

impl From<hero::Model> for HeroDto {
    fn from(m: hero::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            super_name: m.super_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PowerDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<power::Model> for PowerDto {
    fn from(m: power::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HeroDetailDto {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerWithPowerDto>,
}

impl HeroDetailDto {
    pub fn new(hero: hero::Model, hero_powers: Vec<(hero_power::Model, power::Model)>) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
            hero_powers: hero_powers
                .into_iter()
                .map(|(hp, power)| HeroPowerWithPowerDto {
                    id: hp.id,
                    hero_id: hp.hero_id,
                    power_id: hp.power_id,
                    strength: hp.strength,
                    power: power.into(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HeroPowerWithPowerDto {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: String,
    pub power: PowerDto,
}

#[derive(Debug, Serialize)]
pub struct HeroPowerDetailDto {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: String,
    pub hero: HeroDto,
    pub power: PowerDto,
}

impl HeroPowerDetailDto {
    pub fn new(hp: hero_power::Model, hero: hero::Model, power: power::Model) -> Self {
        Self {
            id: hp.id,
            hero_id: hp.hero_id,
            power_id: hp.power_id,
            strength: hp.strength,
            hero: hero.into(),
            power: power.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EpisodeDto {
    pub id: i32,
    pub date: String,
    pub number: i32,
}

impl From<episode::Model> for EpisodeDto {
    fn from(m: episode::Model) -> Self {
        Self {
            id: m.id,
            date: m.date,
            number: m.number,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GuestDto {
    pub id: i32,
    pub name: String,
    pub occupation: String,
}

impl From<guest::Model> for GuestDto {
    fn from(m: guest::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            occupation: m.occupation,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EpisodeDetailDto {
    pub id: i32,
    pub date: String,
    pub number: i32,
    pub appearances: Vec<AppearanceWithGuestDto>,
}

impl EpisodeDetailDto {
    pub fn new(episode: episode::Model, appearances: Vec<(appearance::Model, guest::Model)>) -> Self {
        Self {
            id: episode.id,
            date: episode.date,
            number: episode.number,
            appearances: appearances
                .into_iter()
                .map(|(a, guest)| AppearanceWithGuestDto {
                    id: a.id,
                    rating: a.rating,
                    guest_id: a.guest_id,
                    guest: guest.into(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AppearanceWithGuestDto {
    pub id: i32,
    pub rating: i32,
    pub guest_id: i32,
    pub guest: GuestDto,
}

#[derive(Debug, Serialize)]
pub struct AppearanceDetailDto {
    pub id: i32,
    pub rating: i32,
    pub episode_id: i32,
    pub guest_id: i32,
    pub episode: EpisodeDto,
    pub guest: GuestDto,
}

impl AppearanceDetailDto {
    pub fn new(a: appearance::Model, episode: episode::Model, guest: guest::Model) -> Self {
        Self {
            id: a.id,
            rating: a.rating,
            episode_id: a.episode_id,
            guest_id: a.guest_id,
            episode: episode.into(),
            guest: guest.into(),
        }
    }
}

// ============================================================================
// Request bodies
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateHeroPowerRequest {
    pub strength: String,
    pub hero_id: i32,
    pub power_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePowerRequest {
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAppearanceRequest {
    pub rating: i32,
    pub episode_id: i32,
    pub guest_id: i32,
}
