use csv::{ReaderBuilder, StringRecord};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::RawSample;
use crate::utils::non_empty;

pub const LATITUDE_COLUMN: &str = "ActivityLocation/LatitudeMeasure";
pub const LONGITUDE_COLUMN: &str = "ActivityLocation/LongitudeMeasure";
pub const ACTIVITY_DATE_COLUMN: &str = "ActivityStartDate";
pub const CHARACTERISTIC_COLUMN: &str = "CharacteristicName";
pub const RESULT_VALUE_COLUMN: &str = "ResultMeasureValue";
pub const STATION_ID_COLUMN: &str = "MonitoringLocationIdentifier";
pub const ORGANIZATION_COLUMN: &str = "OrganizationFormalName";

pub const DEFAULT_FILE_PREFIX: &str = "resultphyschem";
const FILE_SUFFIX: &str = ".csv";

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read data directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed CSV in {source_name}: {error}")]
    Csv {
        source_name: String,
        error: csv::Error,
    },

    #[error("Row at line {line} of {source_name} has {found} fields, header has {expected}")]
    TooManyFields {
        source_name: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Missing required column '{column}' in {source_name}")]
    MissingColumn {
        source_name: String,
        column: &'static str,
    },
}

/// Positions of the required columns within one file's header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    latitude: usize,
    longitude: usize,
    activity_date: usize,
    characteristic: usize,
    result_value: usize,
    station_id: usize,
    organization: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, source_name: &str) -> Result<Self, ImportError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| ImportError::MissingColumn {
                    source_name: source_name.to_string(),
                    column,
                })
        };

        Ok(Self {
            latitude: find(LATITUDE_COLUMN)?,
            longitude: find(LONGITUDE_COLUMN)?,
            activity_date: find(ACTIVITY_DATE_COLUMN)?,
            characteristic: find(CHARACTERISTIC_COLUMN)?,
            result_value: find(RESULT_VALUE_COLUMN)?,
            station_id: find(STATION_ID_COLUMN)?,
            organization: find(ORGANIZATION_COLUMN)?,
        })
    }
}

/// Loader for Water Quality Portal result exports (`resultphyschem*.csv`)
///
/// Every matching file in the data directory is read in file-name order and
/// the rows are concatenated. Rows without a parseable latitude and longitude
/// are dropped here; all other cleanup is left to the normalizer.
#[derive(Debug, Clone)]
pub struct CsvImporter {
    data_dir: PathBuf,
    file_prefix: String,
}

impl CsvImporter {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(data_dir, DEFAULT_FILE_PREFIX)
    }

    pub fn with_prefix(data_dir: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_prefix: file_prefix.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// List matching files, sorted by file name
    pub fn discover_files(&self) -> Result<Vec<PathBuf>, ImportError> {
        let entries = fs::read_dir(&self.data_dir).map_err(|source| ImportError::DirectoryRead {
            path: self.data_dir.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ImportError::DirectoryRead {
                path: self.data_dir.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|name| name.starts_with(&self.file_prefix) && name.ends_with(FILE_SUFFIX))
                .unwrap_or(false);
            if matches {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Read and concatenate every matching file
    ///
    /// Any file that fails to parse aborts the whole load.
    pub fn load_all(&self) -> Result<Vec<RawSample>, ImportError> {
        let files = self.discover_files()?;
        if files.is_empty() {
            warn!(
                "No {}*{} files found in {}",
                self.file_prefix,
                FILE_SUFFIX,
                self.data_dir.display()
            );
            return Ok(Vec::new());
        }

        info!(
            "Loading {} result files from {}",
            files.len(),
            self.data_dir.display()
        );

        let mut all_samples = Vec::new();
        for path in &files {
            let mut samples = self.parse_file(path)?;
            info!("Loaded {} rows from {}", samples.len(), path.display());
            all_samples.append(&mut samples);
        }

        info!(
            "Loaded total of {} located rows from {} files",
            all_samples.len(),
            files.len()
        );
        Ok(all_samples)
    }

    /// Parse a single result file from disk
    pub fn parse_file(&self, path: &Path) -> Result<Vec<RawSample>, ImportError> {
        let file = File::open(path).map_err(|source| ImportError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_reader(file, &path.display().to_string())
    }

    /// Parse result rows from any reader
    ///
    /// `source_name` only appears in errors and logs.
    pub fn parse_reader<R: Read>(
        reader: R,
        source_name: &str,
    ) -> Result<Vec<RawSample>, ImportError> {
        let csv_error = |error: csv::Error| ImportError::Csv {
            source_name: source_name.to_string(),
            error,
        };

        // Short rows are padded with missing cells; long rows are an error
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers().map_err(csv_error)?.clone();
        let columns = ColumnIndex::from_headers(&headers, source_name)?;

        let mut samples = Vec::new();
        let mut dropped = 0usize;

        for row in rdr.records() {
            let record = row.map_err(csv_error)?;
            if record.len() > headers.len() {
                return Err(ImportError::TooManyFields {
                    source_name: source_name.to_string(),
                    line: record.position().map(|p| p.line()).unwrap_or(0),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            match Self::parse_record(&record, &columns) {
                Some(sample) => samples.push(sample),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!(
                "Dropped {} rows without latitude/longitude from {}",
                dropped, source_name
            );
        }

        Ok(samples)
    }

    /// Build a `RawSample`, or `None` when the row has no usable location
    fn parse_record(record: &StringRecord, columns: &ColumnIndex) -> Option<RawSample> {
        let cell = |idx: usize| record.get(idx).and_then(non_empty);
        let coordinate = |idx: usize| {
            record
                .get(idx)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
        };

        let latitude = coordinate(columns.latitude)?;
        let longitude = coordinate(columns.longitude)?;

        Some(RawSample {
            station_id: cell(columns.station_id),
            latitude,
            longitude,
            characteristic_name: cell(columns.characteristic),
            result_value: cell(columns.result_value),
            organization_name: cell(columns.organization),
            activity_date: cell(columns.activity_date),
        })
    }
}
