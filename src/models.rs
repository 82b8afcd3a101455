use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// A row as read from a result CSV, before type normalization.
///
/// Rows without a usable latitude/longitude never become a `RawSample`.
/// Every other cell is kept as trimmed text, `None` when the cell was empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    pub station_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub characteristic_name: Option<String>,
    pub result_value: Option<String>,
    pub organization_name: Option<String>,
    pub activity_date: Option<String>,
}

/// One normalized observation. All required fields are present.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRecord {
    pub station_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub characteristic_name: String,
    pub result_value: f64,
    pub organization_name: Option<String>,
    pub activity_date: NaiveDate,
}

/// Per-station summary for one selected characteristic
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StationSummary {
    pub station_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub organization: String,
    pub color: String,
    pub gap_count: usize,
    pub sample_count: usize,
    #[schema(value_type = String, format = Date)]
    pub first_sample: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub last_sample: NaiveDate,
}

// API response DTOs
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CharacteristicListResponse {
    pub characteristics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StationListResponse {
    pub characteristic: String,
    pub total_stations: usize,
    pub stations: Vec<StationSummary>,
}
