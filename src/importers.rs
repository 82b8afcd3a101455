// Loading and normalizing Water Quality Portal result exports

pub mod csv_importer;
pub mod normalizer;

use tracing::instrument;

// Re-export commonly used items
pub use csv_importer::{CsvImporter, ImportError};
pub use normalizer::{normalize_sample, normalize_samples};

use crate::models::SampleRecord;

/// Read every matching file and return the normalized records
///
/// Blocking; async callers should run this inside `spawn_blocking`.
#[instrument(skip(importer), fields(data_dir = %importer.data_dir().display()))]
pub fn load_records(importer: &CsvImporter) -> Result<Vec<SampleRecord>, ImportError> {
    let raw_samples = importer.load_all()?;
    Ok(normalize_samples(raw_samples))
}
