//! Per-station aggregation for one selected characteristic

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{SampleRecord, StationSummary};
use crate::palette::{OrganizationColors, DEFAULT_PALETTE};

/// Intervals longer than this many days count as a gap
pub const GAP_THRESHOLD_DAYS: i64 = 30;

/// Organization shown for stations that never report one
pub const UNKNOWN_ORGANIZATION: &str = "Unknown";

/// Number of chronologically adjacent date pairs more than
/// `GAP_THRESHOLD_DAYS` apart
///
/// Input order does not matter; the dates are sorted first. Duplicate dates
/// are zero days apart.
pub fn gap_count(dates: &[NaiveDate]) -> usize {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();

    sorted
        .windows(2)
        .filter(|pair| (pair[1] - pair[0]).num_days() > GAP_THRESHOLD_DAYS)
        .count()
}

/// Records of a single characteristic, in their original order
pub fn filter_characteristic<'a>(
    records: &'a [SampleRecord],
    characteristic: &str,
) -> Vec<&'a SampleRecord> {
    records
        .iter()
        .filter(|r| r.characteristic_name == characteristic)
        .collect()
}

/// Distinct organizations in order of first appearance
pub fn organization_colors(records: &[&SampleRecord], palette: &[&str]) -> OrganizationColors {
    OrganizationColors::assign_with_palette(
        records.iter().filter_map(|r| r.organization_name.as_deref()),
        palette,
    )
}

/// Summarize every station that has samples for `characteristic`
///
/// Stations are returned in ascending station id order.
pub fn summarize(records: &[SampleRecord], characteristic: &str) -> Vec<StationSummary> {
    summarize_with_palette(records, characteristic, DEFAULT_PALETTE).0
}

/// Like [`summarize`], also returning the color mapping used for the legend
pub fn summarize_with_palette(
    records: &[SampleRecord],
    characteristic: &str,
    palette: &[&str],
) -> (Vec<StationSummary>, OrganizationColors) {
    let filtered = filter_characteristic(records, characteristic);
    let colors = organization_colors(&filtered, palette);

    let mut groups: BTreeMap<&str, Vec<&SampleRecord>> = BTreeMap::new();
    for &record in &filtered {
        groups
            .entry(record.station_id.as_str())
            .or_default()
            .push(record);
    }

    let summaries = groups
        .into_iter()
        .filter_map(|(station_id, group)| summarize_station(station_id, &group, &colors))
        .collect();

    (summaries, colors)
}

/// Build one station's summary from its group of records
///
/// Location comes from the first record; later records are not averaged.
fn summarize_station(
    station_id: &str,
    group: &[&SampleRecord],
    colors: &OrganizationColors,
) -> Option<StationSummary> {
    let first = group.first()?;

    if group
        .iter()
        .any(|r| r.latitude != first.latitude || r.longitude != first.longitude)
    {
        debug!(
            "Station {} reports more than one location, using ({}, {})",
            station_id, first.latitude, first.longitude
        );
    }

    let organization = group
        .iter()
        .find_map(|r| r.organization_name.as_deref())
        .unwrap_or(UNKNOWN_ORGANIZATION);

    let dates: Vec<NaiveDate> = group.iter().map(|r| r.activity_date).collect();
    let first_sample = *dates.iter().min()?;
    let last_sample = *dates.iter().max()?;

    Some(StationSummary {
        station_id: station_id.to_string(),
        latitude: first.latitude,
        longitude: first.longitude,
        organization: organization.to_string(),
        color: colors.color_for(organization).to_string(),
        gap_count: gap_count(&dates),
        sample_count: group.len(),
        first_sample,
        last_sample,
    })
}
