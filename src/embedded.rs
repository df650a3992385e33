//! Embedded-shape pipeline: every record carries its `coordinates` and
//! `chapter` sub-entities inline.

use std::time::Instant;

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::info;

use crate::errors::GenerationError;
use crate::model::{BatchOptions, Chapter, Coordinates, EmbeddedMarine, FixtureReport};
use crate::output::write_json_array;
use crate::vocab::{
    CHAPTER_NAMES, COORD_X_MAX, COORD_X_MIN, COORD_Y_MAX, COORD_Y_MIN, COORD_Y_SCALE,
    MARINES_COUNT_MAX, MARINES_COUNT_MIN, category, chapter_name, float_in_range, health,
    int_in_range, loyalty, marine_name, weapon_type,
};

/// Build one fully populated record for the 1-based position `index`.
pub fn generate_record(
    rng: &mut impl Rng,
    index: u64,
) -> Result<EmbeddedMarine, GenerationError> {
    let catalog_entry = CHAPTER_NAMES.choose(rng).copied().unwrap_or("Ultramarines");
    Ok(EmbeddedMarine {
        name: marine_name(rng, index),
        coordinates: Coordinates {
            x: int_in_range(rng, COORD_X_MIN, COORD_X_MAX)?,
            y: float_in_range(rng, COORD_Y_MIN, COORD_Y_MAX, COORD_Y_SCALE)?,
        },
        chapter: Chapter {
            name: chapter_name(catalog_entry, index),
            marines_count: int_in_range(rng, MARINES_COUNT_MIN, MARINES_COUNT_MAX)?,
        },
        health: health(rng)?,
        loyal: loyalty(rng),
        category: category(rng),
        weapon_type: weapon_type(rng),
    })
}

/// Build the whole batch in index order 1..=count.
pub fn generate_batch(
    rng: &mut impl Rng,
    count: u64,
) -> Result<Vec<EmbeddedMarine>, GenerationError> {
    let mut records = Vec::with_capacity(count as usize);
    for index in 1..=count {
        records.push(generate_record(rng, index)?);
    }
    Ok(records)
}

/// Generate the batch and write it as a single JSON array.
pub fn write_fixture(
    rng: &mut impl Rng,
    options: &BatchOptions,
) -> Result<FixtureReport, GenerationError> {
    let start = Instant::now();
    info!(
        shape = "embedded",
        records = options.count,
        path = %options.out_path.display(),
        "generating fixture"
    );

    let records = generate_batch(rng, options.count)?;
    let bytes_written = write_json_array(&options.out_path, &records)?;

    let report = FixtureReport {
        records: records.len() as u64,
        bytes_written,
        duration_ms: start.elapsed().as_millis() as u64,
        path: options.out_path.clone(),
    };
    info!(
        shape = "embedded",
        records = report.records,
        bytes_written = report.bytes_written,
        duration_ms = report.duration_ms,
        "fixture written"
    );
    Ok(report)
}
