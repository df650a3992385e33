use marine_fixtures::model::BatchOptions;
use marine_fixtures::referenced;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = BatchOptions::referenced();
    let mut rng = ChaCha8Rng::from_os_rng();
    let report = referenced::write_fixture(&mut rng, &options)?;

    println!(
        "generated {} ({} records, {} bytes)",
        report.path.display(),
        report.records,
        report.bytes_written
    );
    Ok(())
}
