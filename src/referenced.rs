//! Referenced-shape pipeline: sub-entities are replaced by independently
//! sampled identifier references assumed to exist elsewhere.

use std::time::Instant;

use rand::Rng;
use tracing::info;

use crate::errors::GenerationError;
use crate::model::{BatchOptions, FixtureReport, ReferencedMarine};
use crate::output::write_json_array;
use crate::vocab::{
    REFERENCE_ID_MAX, REFERENCE_ID_MIN, category, health, int_in_range, loyalty, marine_name,
    weapon_type,
};

/// Build one fully populated record for the 1-based position `index`. The
/// two id fields are sampled independently of each other.
pub fn generate_record(
    rng: &mut impl Rng,
    index: u64,
) -> Result<ReferencedMarine, GenerationError> {
    Ok(ReferencedMarine {
        name: marine_name(rng, index),
        coordinates_id: int_in_range(rng, REFERENCE_ID_MIN, REFERENCE_ID_MAX)?,
        chapter_id: int_in_range(rng, REFERENCE_ID_MIN, REFERENCE_ID_MAX)?,
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
) -> Result<Vec<ReferencedMarine>, GenerationError> {
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
        shape = "referenced",
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
        shape = "referenced",
        records = report.records,
        bytes_written = report.bytes_written,
        duration_ms = report.duration_ms,
        "fixture written"
    );
    Ok(report)
}
