#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crime extract CSV loader.
//!
//! Reads a Chicago-style crime extract (`Crimes_-_2001_to_Present.csv` and
//! friends) into [`RawIncidentRecord`]s. Columns are located by header name
//! so column order and extra columns don't matter. Rows without an `ID`
//! value are skipped with a warning; every other malformed field degrades
//! to `None` so a single bad cell never rejects a row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use gun_trends_classifier_models::RawIncidentRecord;

/// Errors that can occur while loading an extract.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// I/O error (file open/read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed at the reader level.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The extract has no `ID` column, so rows cannot be identified.
    #[error("extract has no ID column (headers: {headers})")]
    MissingIdColumn {
        /// The header row that was found instead.
        headers: String,
    },
}

/// Column indexes resolved from the extract's header row.
struct ColumnMap {
    id: usize,
    date: Option<usize>,
    primary_type: Option<usize>,
    description: Option<usize>,
    arrest: Option<usize>,
    district: Option<usize>,
    community_area: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &[String]) -> Result<Self, IngestError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
        };

        let Some(id) = find("ID") else {
            return Err(IngestError::MissingIdColumn {
                headers: headers.join(", "),
            });
        };

        Ok(Self {
            id,
            date: find("Date"),
            primary_type: find("Primary Type"),
            description: find("Description"),
            arrest: find("Arrest"),
            district: find("District"),
            community_area: find("Community Area"),
            latitude: find("Latitude"),
            longitude: find("Longitude"),
        })
    }
}

/// Loads a crime extract CSV from disk.
///
/// # Errors
///
/// Returns [`IngestError`] if the file cannot be opened, the CSV is
/// structurally unreadable, or the header row has no `ID` column.
pub fn load_extract(path: &Path) -> Result<Vec<RawIncidentRecord>, IngestError> {
    log::info!("Loading crime extract from {}", path.display());
    let file = File::open(path)?;
    read_extract(file)
}

/// Reads a crime extract CSV from any reader.
///
/// # Errors
///
/// Returns [`IngestError`] if the CSV is structurally unreadable or the
/// header row has no `ID` column.
pub fn read_extract<R: Read>(reader: R) -> Result<Vec<RawIncidentRecord>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    let columns = ColumnMap::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut skipped_no_id: u64 = 0;

    for result in reader.records() {
        let row = result?;

        let Some(id) = field(&row, Some(columns.id)) else {
            skipped_no_id += 1;
            continue;
        };

        records.push(RawIncidentRecord {
            id: id.to_owned(),
            description: field(&row, columns.description).map(str::to_owned),
            primary_type: field(&row, columns.primary_type).map(str::to_owned),
            date: field(&row, columns.date).map(str::to_owned),
            arrest: field(&row, columns.arrest).and_then(parse_bool),
            district: field(&row, columns.district).map(str::to_owned),
            community_area: field(&row, columns.community_area).map(str::to_owned),
            latitude: field(&row, columns.latitude).and_then(|s| s.parse::<f64>().ok()),
            longitude: field(&row, columns.longitude).and_then(|s| s.parse::<f64>().ok()),
        });
    }

    if skipped_no_id > 0 {
        log::warn!("Skipped {skipped_no_id} rows with no ID value");
    }
    log::info!("Parsed {} records from extract", records.len());

    Ok(records)
}

/// Returns the trimmed cell at `idx`, or `None` if the column is absent,
/// out of range for this row, or empty.
fn field<'a>(row: &'a csv::StringRecord, idx: Option<usize>) -> Option<&'a str> {
    let value = row.get(idx?)?.trim();
    if value.is_empty() { None } else { Some(value) }
}

/// Parses the extract's boolean encoding (`true`/`false`, any case).
fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
