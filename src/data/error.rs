use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// DataUnavailable – every way the score sheet can fail to load
// ---------------------------------------------------------------------------

/// The score sheet could not be fetched or parsed.
///
/// Always fatal at startup: the viewer never opens on a partial table.
#[derive(Debug, Error)]
pub enum DataUnavailable {
    #[error("fetching {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetching {url}: server answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("reading {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    #[error("sheet has no participant columns")]
    NoParticipants,

    #[error("participant column '{0}' appears more than once")]
    DuplicateParticipant(String),

    #[error("race '{0}' appears more than once")]
    DuplicateCategory(String),

    #[error("race '{race}', participant '{participant}': '{value}' is not a number")]
    InvalidScore {
        race: String,
        participant: String,
        value: String,
    },
}
