#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const HEADER: &str = "OrganizationIdentifier,OrganizationFormalName,ActivityStartDate,MonitoringLocationIdentifier,ActivityLocation/LatitudeMeasure,ActivityLocation/LongitudeMeasure,CharacteristicName,ResultMeasureValue,ResultMeasure/MeasureUnitCode";

/// One fixture row; `None` leaves the cell empty
pub struct Row<'a> {
    pub org: Option<&'a str>,
    pub date: &'a str,
    pub station: &'a str,
    pub lat: &'a str,
    pub lon: &'a str,
    pub characteristic: &'a str,
    pub value: &'a str,
}

impl<'a> Row<'a> {
    pub fn new(station: &'a str, characteristic: &'a str, date: &'a str) -> Self {
        Self {
            org: Some("Texas Commission on Environmental Quality"),
            date,
            station,
            lat: "29.88",
            lon: "-97.93",
            characteristic,
            value: "7.4",
        }
    }

    pub fn org(mut self, org: Option<&'a str>) -> Self {
        self.org = org;
        self
    }

    pub fn location(mut self, lat: &'a str, lon: &'a str) -> Self {
        self.lat = lat;
        self.lon = lon;
        self
    }

    pub fn value(mut self, value: &'a str) -> Self {
        self.value = value;
        self
    }

    fn to_csv_line(&self) -> String {
        // Quote free-text cells, real exports contain commas there
        let org = self.org.map(|o| format!("\"{o}\"")).unwrap_or_default();
        format!(
            "ORG,{},{},{},{},{},\"{}\",{},units",
            org, self.date, self.station, self.lat, self.lon, self.characteristic, self.value
        )
    }
}

pub fn csv_content(rows: &[Row]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&row.to_csv_line());
        out.push('\n');
    }
    out
}

pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write fixture file");
}

/// Temp directory holding the standard two-file fixture dataset
///
/// - TX-100: Temperature on 2020-01-01, 2020-01-15, 2020-03-01, 2020-03-02 (one gap)
///   and pH on 2019-06-01, 2020-12-01
/// - TX-200: Temperature twice, no organization, one row with a bad value
/// - rows without location, date or station that must be dropped
pub fn fixture_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let first = csv_content(&[
        Row::new("TX-100", "Temperature, water", "2020-01-01"),
        Row::new("TX-100", "Temperature, water", "2020-03-01"),
        Row::new("TX-100", "pH", "2019-06-01"),
        Row::new("TX-300", "pH", "2020-01-01").location("", "-97.0"),
        Row::new("TX-200", "Temperature, water", "2021-05-05")
            .org(None)
            .location("30.25", "-97.75"),
    ]);

    let second = csv_content(&[
        Row::new("TX-100", "Temperature, water", "2020-03-02"),
        Row::new("TX-100", "Temperature, water", "2020-01-15"),
        Row::new("TX-100", "pH", "2020-12-01"),
        Row::new("", "pH", "2020-01-01"),
        Row::new("TX-400", "pH", "not-a-date"),
        Row::new("TX-200", "Temperature, water", "2021-06-01")
            .org(None)
            .value("*Non-detect"),
        Row::new("TX-200", "Temperature, water", "2021-09-01")
            .org(None)
            .location("30.25", "-97.75"),
    ]);

    write_file(dir.path(), "resultphyschem_2020.csv", &first);
    write_file(dir.path(), "resultphyschem_2021.csv", &second);
    write_file(dir.path(), "station.csv", "not,a,result,file\n");
    write_file(dir.path(), "resultphyschem_notes.txt", "ignored");

    dir
}
