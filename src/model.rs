use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::vocab::{Category, WeaponType};

pub const DEFAULT_BATCH_SIZE: u64 = 1000;

/// Batch size and output path for one generation run. The defaults match
/// the reference runs; callers and tests can override both.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub count: u64,
    pub out_path: PathBuf,
}

impl BatchOptions {
    pub fn embedded() -> Self {
        Self {
            count: DEFAULT_BATCH_SIZE,
            out_path: PathBuf::from("spacemarines_embedded_1000.json"),
        }
    }

    pub fn referenced() -> Self {
        Self {
            count: DEFAULT_BATCH_SIZE,
            out_path: PathBuf::from("spacemarines_with_ids_1000.json"),
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureReport {
    pub records: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
    pub path: PathBuf,
}

/// Record with fully inlined sub-entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedMarine {
    pub name: String,
    pub coordinates: Coordinates,
    pub chapter: Chapter,
    pub health: i64,
    pub loyal: Option<bool>,
    pub category: Option<Category>,
    pub weapon_type: WeaponType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub name: String,
    pub marines_count: i64,
}

/// Record with sub-entities replaced by sampled identifier references. The
/// ids are opaque; nothing ties them to records that actually exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencedMarine {
    pub name: String,
    pub coordinates_id: i64,
    pub chapter_id: i64,
    pub health: i64,
    pub loyal: Option<bool>,
    pub category: Option<Category>,
    pub weapon_type: WeaponType,
}
