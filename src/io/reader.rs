use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::{Pickup, PickupRecord, Recipient, RecipientRecord, RecordError};

/// A load that could not complete
///
/// Distinguishes the three failure classes at this boundary: the file
/// could not be opened, the CSV itself was malformed, or a row failed
/// schema validation. All are fail-fast; no partial data survives.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {source}")]
    Record {
        /// 1-based line number in the source file, counting the header
        row: usize,
        #[source]
        source: RecordError,
    },
}

/// Load pickups from a CSV file, sorted ascending by pickup time
pub fn load_pickups(path: &Path) -> Result<Vec<Pickup>, LoadError> {
    let file = open(path)?;
    let pickups = read_pickups(file)?;

    info!("Loaded {} pickups from {}", pickups.len(), path.display());
    Ok(pickups)
}

/// Load recipients from a CSV file, in file order
pub fn load_recipients(path: &Path) -> Result<Vec<Recipient>, LoadError> {
    let file = open(path)?;
    let recipients = read_recipients(file)?;

    info!(
        "Loaded {} recipients from {}",
        recipients.len(),
        path.display()
    );
    Ok(recipients)
}

/// Read pickups from any CSV source with the standard header row
pub fn read_pickups<R: Read>(reader: R) -> Result<Vec<Pickup>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut pickups = Vec::new();

    for (index, row) in csv_reader.deserialize::<PickupRecord>().enumerate() {
        let record = row?;
        let pickup = Pickup::try_from(record).map_err(|source| LoadError::Record {
            row: index + 2,
            source,
        })?;
        pickups.push(pickup);
    }

    // Stable sort keeps file order for pickups sharing an instant
    pickups.sort_by(|a, b| a.pickup_at.cmp(&b.pickup_at));

    Ok(pickups)
}

/// Read recipients from any CSV source with the standard header row
pub fn read_recipients<R: Read>(reader: R) -> Result<Vec<Recipient>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut recipients = Vec::new();

    for (index, row) in csv_reader.deserialize::<RecipientRecord>().enumerate() {
        let record = row?;
        let recipient = Recipient::try_from(record).map_err(|source| LoadError::Record {
            row: index + 2,
            source,
        })?;
        recipients.push(recipient);
    }

    Ok(recipients)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })
}
