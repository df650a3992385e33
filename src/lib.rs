//! Synthetic space-marine fixtures for bulk-import load testing.
//!
//! Two batch pipelines share one generation vocabulary: the embedded shape
//! inlines `coordinates` and `chapter` objects per record, the referenced
//! shape samples opaque `coordinatesId`/`chapterId` integers in their place.
//! Each run builds the whole batch in memory, serializes it once as a
//! pretty-printed JSON array and writes it in a single call.

pub mod embedded;
pub mod errors;
pub mod model;
pub mod output;
pub mod referenced;
pub mod vocab;

pub use errors::GenerationError;
pub use model::{BatchOptions, FixtureReport};
