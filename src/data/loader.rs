use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::error::DataUnavailable;
use super::model::{ScoreTable, WideRow, WideTable};

// ---------------------------------------------------------------------------
// DataSource – where the sheet lives
// ---------------------------------------------------------------------------

/// A published sheet URL or a CSV file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched, anything else is a path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::Path(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Fetch the sheet, parse it and melt it into a [`ScoreTable`].
///
/// Blocks until the whole document is read. Meant to run once, before the
/// window opens.
pub fn load(source: &DataSource) -> Result<ScoreTable, DataUnavailable> {
    let wide = match source {
        DataSource::Url(url) => parse_wide(fetch(url)?.as_slice())?,
        DataSource::Path(path) => parse_wide(open(path)?)?,
    };

    let table = ScoreTable::reshape(wide);
    if table.is_empty() {
        log::warn!("{source} contains no races");
    }

    Ok(table)
}

fn fetch(url: &str) -> Result<Vec<u8>, DataUnavailable> {
    log::info!("Fetching scores from {url}");
    let fetch_err = |source| DataUnavailable::Fetch {
        url: url.to_string(),
        source,
    };

    let response = reqwest::blocking::get(url).map_err(fetch_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(DataUnavailable::Status {
            url: url.to_string(),
            status,
        });
    }
    let body = response.bytes().map_err(fetch_err)?;
    Ok(body.to_vec())
}

fn open(path: &Path) -> Result<std::fs::File, DataUnavailable> {
    log::info!("Reading scores from {}", path.display());
    std::fs::File::open(path).map_err(|source| DataUnavailable::Read {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// CSV layout: header row, first column is the race label (its header is
/// ignored), every other column is one participant's scores.
///
/// Blank score cells become `NaN`. Rows with a blank race label and columns
/// with a blank header are skipped.
pub fn parse_wide<R: Read>(reader: R) -> Result<WideTable, DataUnavailable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();

    // (column index, participant name) of every named value column.
    let mut columns: Vec<(usize, String)> = Vec::new();
    let mut seen = HashSet::new();
    for (col_idx, header) in headers.iter().enumerate().skip(1) {
        if header.is_empty() {
            log::warn!("Skipping CSV column {}: blank header", col_idx + 1);
            continue;
        }
        if !seen.insert(header) {
            return Err(DataUnavailable::DuplicateParticipant(header.to_string()));
        }
        columns.push((col_idx, header.to_string()));
    }
    if columns.is_empty() {
        return Err(DataUnavailable::NoParticipants);
    }

    let mut labels = HashSet::new();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let label = record.get(0).unwrap_or("");
        if label.is_empty() {
            let line = record.position().map_or(0, |p| p.line());
            log::warn!("Skipping CSV line {line}: blank race label");
            continue;
        }
        if !labels.insert(label.to_string()) {
            return Err(DataUnavailable::DuplicateCategory(label.to_string()));
        }

        let scores = columns
            .iter()
            .map(|(col_idx, participant)| {
                parse_score(record.get(*col_idx).unwrap_or(""), label, participant)
            })
            .collect::<Result<Vec<f64>, _>>()?;

        rows.push(WideRow {
            label: label.to_string(),
            scores,
        });
    }

    let participants = columns.into_iter().map(|(_, name)| name).collect();
    Ok(WideTable { participants, rows })
}

fn parse_score(cell: &str, race: &str, participant: &str) -> Result<f64, DataUnavailable> {
    if cell.is_empty() {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>()
        .map_err(|_| DataUnavailable::InvalidScore {
            race: race.to_string(),
            participant: participant.to_string(),
            value: cell.to_string(),
        })
}
