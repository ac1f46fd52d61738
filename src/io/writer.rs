use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::core::grouper::DailyPickups;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot create {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush output: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the match report to a CSV file
pub fn write_matches(path: &Path, daily_pickups: &DailyPickups) -> Result<(), WriteError> {
    let file = File::create(path).map_err(|source| WriteError::Create {
        path: path.display().to_string(),
        source,
    })?;

    write_matches_to(file, daily_pickups)?;

    let rows: usize = daily_pickups.values().map(Vec::len).sum();
    info!("Wrote {} match rows to {}", rows, path.display());
    Ok(())
}

/// Write the match report to any sink
///
/// One row per pickup: date, pickup full name, then either the literal
/// `None` or repeating (recipient full name, distance) pairs in match
/// order. Distances are rendered to two decimal places. Rows are grouped
/// by ascending date; within a date, pickups keep their stored order.
pub fn write_matches_to<W: Write>(
    writer: W,
    daily_pickups: &DailyPickups,
) -> Result<(), WriteError> {
    // Rows vary in length with the number of matches
    let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    for (date, pickups) in daily_pickups {
        for pickup in pickups {
            let mut row = vec![date.clone(), pickup.full_name()];

            if pickup.matches.is_empty() {
                row.push("None".to_string());
            } else {
                for m in &pickup.matches {
                    row.push(m.recipient.full_name());
                    row.push(format!("{:.2}", m.distance_miles));
                }
            }

            csv_writer.write_record(&row)?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grouper::group_pickups;
    use crate::core::schedule::WeeklySchedule;
    use crate::models::{Match, Pickup, Recipient};

    fn create_pickup(name: &str, pickup_at: &str) -> Pickup {
        Pickup {
            first_name: name.to_string(),
            last_name: "Moore".to_string(),
            latitude: 37.7749,
            longitude: -122.4194,
            categories: 0,
            pickup_at: pickup_at.parse().unwrap(),
            matches: vec![],
        }
    }

    fn create_recipient(name: &str) -> Recipient {
        Recipient {
            first_name: name.to_string(),
            last_name: "Pantry".to_string(),
            latitude: 37.7750,
            longitude: -122.4190,
            restrictions: 0,
            schedule: WeeklySchedule::always_open(),
        }
    }

    #[test]
    fn test_rows_with_and_without_matches() {
        let mut matched = create_pickup("Dana", "2016-11-29T16:00[America/Los_Angeles]");
        matched.matches = vec![
            Match {
                recipient: create_recipient("Near"),
                distance_miles: 0.0234,
            },
            Match {
                recipient: create_recipient("Far"),
                distance_miles: 4.986,
            },
        ];
        let unmatched = create_pickup("Lee", "2016-11-30T10:00[America/Los_Angeles]");

        let mut daily = group_pickups(vec![unmatched]);
        daily
            .entry("2016-11-29".to_string())
            .or_default()
            .push(matched);

        let mut buffer = Vec::new();
        write_matches_to(&mut buffer, &daily).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        // Earlier date first, distances to two decimal places
        assert_eq!(lines[0], "2016-11-29,Dana Moore,Near Pantry,0.02,Far Pantry,4.99");
        assert_eq!(lines[1], "2016-11-30,Lee Moore,None");
    }
}
