use std::collections::BTreeSet;
use std::sync::Arc;

use crate::aggregator::{summarize, summarize_with_palette};
use crate::map::MapView;
use crate::models::{SampleRecord, StationSummary};
use crate::palette::DEFAULT_PALETTE;

/// Read-only access to the loaded sample records
///
/// Records are loaded once and shared; every query recomputes its summaries
/// from scratch.
#[derive(Clone)]
pub struct StationService {
    records: Arc<[SampleRecord]>,
    characteristics: Arc<[String]>,
}

impl StationService {
    pub fn new(records: Vec<SampleRecord>) -> Self {
        let characteristics: BTreeSet<&str> = records
            .iter()
            .map(|r| r.characteristic_name.as_str())
            .collect();
        let characteristics: Arc<[String]> =
            characteristics.into_iter().map(str::to_string).collect();

        Self {
            records: records.into(),
            characteristics,
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Distinct characteristic names, sorted
    pub fn characteristics(&self) -> &[String] {
        &self.characteristics
    }

    pub fn has_characteristic(&self, characteristic: &str) -> bool {
        self.characteristics
            .binary_search_by(|c| c.as_str().cmp(characteristic))
            .is_ok()
    }

    /// Characteristic selected when the user has not picked one yet
    pub fn default_characteristic(&self) -> Option<&str> {
        self.characteristics.first().map(String::as_str)
    }

    pub fn summarize(&self, characteristic: &str) -> Vec<StationSummary> {
        summarize(&self.records, characteristic)
    }

    /// One station's summary, `None` if it has no samples for `characteristic`
    pub fn station(&self, characteristic: &str, station_id: &str) -> Option<StationSummary> {
        self.summarize(characteristic)
            .into_iter()
            .find(|s| s.station_id == station_id)
    }

    /// Map view for `characteristic`, or for the default characteristic
    ///
    /// Returns `None` only when a characteristic was requested and is unknown.
    pub fn map_view(&self, characteristic: Option<&str>) -> Option<MapView> {
        let selected = match characteristic {
            Some(c) if self.has_characteristic(c) => c,
            Some(_) => return None,
            None => match self.default_characteristic() {
                Some(c) => c,
                None => return Some(MapView::empty()),
            },
        };

        let (stations, colors) = summarize_with_palette(&self.records, selected, DEFAULT_PALETTE);
        Some(MapView::new(Some(selected.to_string()), &stations, &colors))
    }
}
