use serde::Serialize;
use utoipa::ToSchema;

use crate::aggregator::GAP_THRESHOLD_DAYS;
use crate::models::StationSummary;
use crate::palette::OrganizationColors;

pub const MAP_CENTER: (f64, f64) = (29.5, -97.5);
pub const MAP_ZOOM: u8 = 7;
pub const MAP_TILES: &str = "CartoDB positron";
pub const MARKER_RADIUS: u8 = 7;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn gap_note() -> String {
    format!("* Gap = interval > {GAP_THRESHOLD_DAYS} days")
}

/// Everything the map page needs to draw one characteristic
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MapView {
    pub characteristic: Option<String>,
    /// `[latitude, longitude]`
    #[schema(value_type = Vec<f64>)]
    pub center: [f64; 2],
    pub zoom: u8,
    pub tiles: String,
    pub markers: Vec<StationMarker>,
    pub legend: Legend,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StationMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: u8,
    pub color: String,
    pub popup: StationPopup,
}

/// Popup fields, dates already formatted as `YYYY-MM-DD`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StationPopup {
    pub station_id: String,
    pub organization: String,
    pub first_sample: String,
    pub last_sample: String,
    pub gap_count: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LegendEntry {
    pub organization: String,
    pub color: String,
}

impl MapView {
    pub fn new(
        characteristic: Option<String>,
        stations: &[StationSummary],
        colors: &OrganizationColors,
    ) -> Self {
        let markers = stations.iter().map(StationMarker::from).collect();

        let entries = colors
            .entries()
            .iter()
            .map(|(organization, color)| LegendEntry {
                organization: organization.clone(),
                color: color.clone(),
            })
            .collect();

        Self {
            characteristic,
            center: [MAP_CENTER.0, MAP_CENTER.1],
            zoom: MAP_ZOOM,
            tiles: MAP_TILES.to_string(),
            markers,
            legend: Legend {
                entries,
                note: gap_note(),
            },
        }
    }

    /// Map with no stations and an empty legend
    pub fn empty() -> Self {
        Self::new(None, &[], &OrganizationColors::default())
    }
}

impl From<&StationSummary> for StationMarker {
    fn from(station: &StationSummary) -> Self {
        Self {
            latitude: station.latitude,
            longitude: station.longitude,
            radius: MARKER_RADIUS,
            color: station.color.clone(),
            popup: StationPopup {
                station_id: station.station_id.clone(),
                organization: station.organization.clone(),
                first_sample: station.first_sample.format(DATE_FORMAT).to_string(),
                last_sample: station.last_sample.format(DATE_FORMAT).to_string(),
                gap_count: station.gap_count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn station() -> StationSummary {
        StationSummary {
            station_id: "TCEQMN-12345".to_string(),
            latitude: 30.1,
            longitude: -97.9,
            organization: "TCEQ".to_string(),
            color: "#1f77b4".to_string(),
            gap_count: 4,
            sample_count: 20,
            first_sample: NaiveDate::from_ymd_opt(2018, 3, 7).unwrap(),
            last_sample: NaiveDate::from_ymd_opt(2023, 11, 30).unwrap(),
        }
    }

    #[test]
    fn test_marker_from_station() {
        let marker = StationMarker::from(&station());

        assert_eq!(marker.radius, 7);
        assert_eq!(marker.color, "#1f77b4");
        assert_eq!(marker.popup.first_sample, "2018-03-07");
        assert_eq!(marker.popup.last_sample, "2023-11-30");
        assert_eq!(marker.popup.gap_count, 4);
    }

    #[test]
    fn test_map_view_fixed_viewport() {
        let colors = OrganizationColors::assign(["TCEQ"]);
        let view = MapView::new(Some("pH".to_string()), &[station()], &colors);

        assert_eq!(view.center, [29.5, -97.5]);
        assert_eq!(view.zoom, 7);
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.legend.entries.len(), 1);
        assert_eq!(view.legend.entries[0].organization, "TCEQ");
        assert_eq!(view.legend.note, "* Gap = interval > 30 days");
    }

    #[test]
    fn test_empty_map_view() {
        let view = MapView::empty();

        assert!(view.characteristic.is_none());
        assert!(view.markers.is_empty());
        assert!(view.legend.entries.is_empty());
    }
}
