use tracing::{debug, info};

use crate::models::{RawSample, SampleRecord};
use crate::utils::{parse_activity_date, parse_measure_value};

/// Convert one raw row into a typed record
///
/// Returns `None` when the date or result value does not parse, or when the
/// station id or characteristic name is missing.
pub fn normalize_sample(raw: RawSample) -> Option<SampleRecord> {
    let activity_date = raw.activity_date.as_deref().and_then(parse_activity_date)?;
    let result_value = raw.result_value.as_deref().and_then(parse_measure_value)?;
    let station_id = raw.station_id?;
    let characteristic_name = raw.characteristic_name?;

    Some(SampleRecord {
        station_id,
        latitude: raw.latitude,
        longitude: raw.longitude,
        characteristic_name,
        result_value,
        organization_name: raw.organization_name,
        activity_date,
    })
}

/// Normalize a loaded batch, dropping every row with a missing required field
///
/// Row order is preserved.
pub fn normalize_samples(raw_samples: Vec<RawSample>) -> Vec<SampleRecord> {
    let total = raw_samples.len();
    let records: Vec<SampleRecord> = raw_samples
        .into_iter()
        .filter_map(normalize_sample)
        .collect();

    let dropped = total - records.len();
    if dropped > 0 {
        debug!(
            "Dropped {} of {} rows with missing date, characteristic, value or station id",
            dropped, total
        );
    }
    info!("Normalized {} sample records", records.len());

    records
}
