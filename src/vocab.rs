//! Shared generation vocabulary: closed enumerations, bounded samplers and
//! the naming rules used by both fixture shapes.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Weapon loadout of a marine. Always present on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeaponType {
    Boltgun,
    HeavyBoltgun,
    Flamer,
    HeavyFlamer,
    MultiMelta,
}

/// Battlefield role of a marine. Nullable on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Aggressor,
    Inceptor,
    Tactical,
    Chaplain,
    Apothecary,
}

pub const WEAPON_TYPES: [WeaponType; 5] = [
    WeaponType::Boltgun,
    WeaponType::HeavyBoltgun,
    WeaponType::Flamer,
    WeaponType::HeavyFlamer,
    WeaponType::MultiMelta,
];

pub const CATEGORIES: [Category; 5] = [
    Category::Aggressor,
    Category::Inceptor,
    Category::Tactical,
    Category::Chaplain,
    Category::Apothecary,
];

/// Chapter catalog for the embedded shape. Entries repeat across a batch;
/// the index-derived suffix keeps them distinguishable.
pub const CHAPTER_NAMES: [&str; 12] = [
    "Ultramarines",
    "Blood Angels",
    "Dark Angels",
    "Space Wolves",
    "Imperial Fists",
    "White Scars",
    "Salamanders",
    "Raven Guard",
    "Iron Hands",
    "Alpha Legion",
    "Night Lords",
    "Word Bearers",
];

pub const HEALTH_MIN: i64 = 1;
pub const HEALTH_MAX: i64 = 200;
pub const COORD_X_MIN: i64 = -1000;
pub const COORD_X_MAX: i64 = 1000;
pub const COORD_Y_MIN: f64 = -343.0;
pub const COORD_Y_MAX: f64 = 343.0;
pub const COORD_Y_SCALE: u32 = 2;
pub const MARINES_COUNT_MIN: i64 = 10;
pub const MARINES_COUNT_MAX: i64 = 1000;
pub const REFERENCE_ID_MIN: i64 = 1;
pub const REFERENCE_ID_MAX: i64 = 100;

const NAME_PREFIX: &str = "Brother_";
const NAME_TAG_LEN: usize = 4;
const NAME_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const CHAPTER_SUFFIX_BUCKETS: u64 = 4;

/// Uniform integer in `min..=max`. An inverted range is a configuration
/// error and aborts the run.
pub fn int_in_range(rng: &mut impl Rng, min: i64, max: i64) -> Result<i64, GenerationError> {
    if min > max {
        return Err(GenerationError::InvalidRange(format!(
            "int range {min}..={max} is inverted"
        )));
    }
    Ok(rng.random_range(min..=max))
}

/// Uniform float in `min..=max`, rounded to `scale` decimal digits. The
/// rounded value stays within the declared bounds.
pub fn float_in_range(
    rng: &mut impl Rng,
    min: f64,
    max: f64,
    scale: u32,
) -> Result<f64, GenerationError> {
    if min > max {
        return Err(GenerationError::InvalidRange(format!(
            "float range {min}..={max} is inverted"
        )));
    }
    let factor = 10_f64.powi(scale as i32);
    let value = rng.random_range(min..=max);
    Ok((value * factor).round() / factor)
}

pub fn weapon_type(rng: &mut impl Rng) -> WeaponType {
    WEAPON_TYPES
        .choose(rng)
        .copied()
        .unwrap_or(WeaponType::Boltgun)
}

/// Six equally weighted outcomes: the five categories plus the absent
/// sentinel, which serializes as an explicit null.
pub fn category(rng: &mut impl Rng) -> Option<Category> {
    let outcome = rng.random_range(0..=CATEGORIES.len());
    CATEGORIES.get(outcome).copied()
}

/// Three equally weighted outcomes: true, false, absent.
pub fn loyalty(rng: &mut impl Rng) -> Option<bool> {
    match rng.random_range(0..3) {
        0 => Some(true),
        1 => Some(false),
        _ => None,
    }
}

pub fn health(rng: &mut impl Rng) -> Result<i64, GenerationError> {
    int_in_range(rng, HEALTH_MIN, HEALTH_MAX)
}

/// `Brother_` + four random uppercase letters + the 1-based position padded
/// to at least three digits. Positions past 999 keep their full width, so
/// uniqueness within a batch is only probabilistic via the letter tag.
pub fn marine_name(rng: &mut impl Rng, index: u64) -> String {
    let mut tag = String::with_capacity(NAME_TAG_LEN);
    for _ in 0..NAME_TAG_LEN {
        let letter = NAME_ALPHABET[rng.random_range(0..NAME_ALPHABET.len())];
        tag.push(letter as char);
    }
    format!("{NAME_PREFIX}{tag}{index:03}")
}

/// Catalog entry disambiguated by the position's modulo-4 bucket.
pub fn chapter_name(catalog_entry: &str, index: u64) -> String {
    format!("{}_{}", catalog_entry, index % CHAPTER_SUFFIX_BUCKETS)
}
