use jiff::civil;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::core::schedule::WeeklySchedule;
use crate::models::domain::{Pickup, Recipient};

/// A record that could not be converted into a domain type
///
/// Schema validation is fail-fast: a single bad record aborts the whole
/// load rather than being skipped, since silently dropping records would
/// change match results unpredictably.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid field values: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("malformed phone number {0:?}, expected NNN-NNN-NNNN")]
    Phone(String),

    #[error("unparseable pickup time {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: jiff::Error,
    },

    #[error("unknown IANA time zone {0:?}")]
    TimeZone(String),
}

/// One row of the pickups CSV, headers exactly as supplied upstream
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct PickupRecord {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub street: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(range(min = 10000, max = 99999))]
    pub postal: u32,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    /// 6-bit offered-categories mask
    #[validate(range(max = 63))]
    pub categories: u8,
    pub pickup_at: String,
    pub time_zone_id: String,
}

/// One row of the recipients CSV
///
/// Carries the same identity/contact/location columns as a pickup, plus
/// the restrictions mask and one closed-hours column per weekday.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct RecipientRecord {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub street: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(range(min = 10000, max = 99999))]
    pub postal: u32,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    /// 6-bit restricted-categories mask
    #[validate(range(max = 63))]
    pub restrictions: u8,
    #[validate(range(max = 65536))]
    pub sunday: u32,
    #[validate(range(max = 65536))]
    pub monday: u32,
    #[validate(range(max = 65536))]
    pub tuesday: u32,
    #[validate(range(max = 65536))]
    pub wednesday: u32,
    #[validate(range(max = 65536))]
    pub thursday: u32,
    #[validate(range(max = 65536))]
    pub friday: u32,
    #[validate(range(max = 65536))]
    pub saturday: u32,
}

impl TryFrom<PickupRecord> for Pickup {
    type Error = RecordError;

    fn try_from(record: PickupRecord) -> Result<Self, Self::Error> {
        record.validate()?;
        check_phone(&record.phone)?;

        let tz = TimeZone::get(&record.time_zone_id)
            .map_err(|_| RecordError::TimeZone(record.time_zone_id.clone()))?;
        let pickup_at = parse_pickup_at(&record.pickup_at, tz)?;

        Ok(Pickup {
            first_name: record.first_name,
            last_name: record.last_name,
            latitude: record.latitude,
            longitude: record.longitude,
            categories: record.categories,
            pickup_at,
            matches: Vec::new(),
        })
    }
}

impl TryFrom<RecipientRecord> for Recipient {
    type Error = RecordError;

    fn try_from(record: RecipientRecord) -> Result<Self, Self::Error> {
        record.validate()?;
        check_phone(&record.phone)?;

        // Sunday = 0 through Saturday = 6
        let schedule = WeeklySchedule::new([
            record.sunday,
            record.monday,
            record.tuesday,
            record.wednesday,
            record.thursday,
            record.friday,
            record.saturday,
        ]);

        Ok(Recipient {
            first_name: record.first_name,
            last_name: record.last_name,
            latitude: record.latitude,
            longitude: record.longitude,
            restrictions: record.restrictions,
            schedule,
        })
    }
}

/// Resolve a pickup timestamp in its IANA zone
///
/// Accepts either an instant with a UTC offset (localized into the
/// supplied zone) or a bare civil datetime (interpreted in that zone).
fn parse_pickup_at(value: &str, tz: TimeZone) -> Result<Zoned, RecordError> {
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(tz));
    }

    value
        .parse::<civil::DateTime>()
        .and_then(|datetime| datetime.to_zoned(tz))
        .map_err(|source| RecordError::Timestamp {
            value: value.to_string(),
            source,
        })
}

/// Phone numbers arrive formatted NNN-NNN-NNNN
fn check_phone(phone: &str) -> Result<(), RecordError> {
    let parts: Vec<&str> = phone.split('-').collect();
    let well_formed = parts.len() == 3
        && parts[0].len() == 3
        && parts[1].len() == 3
        && parts[2].len() == 4
        && parts
            .iter()
            .all(|part| part.chars().all(|c| c.is_ascii_digit()));

    if well_formed {
        Ok(())
    } else {
        Err(RecordError::Phone(phone.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pickup_record() -> PickupRecord {
        PickupRecord {
            first_name: "Dana".to_string(),
            last_name: "Moore".to_string(),
            street: "123 Mission St".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            postal: 94103,
            country: "USA".to_string(),
            email: "dana.moore@example.com".to_string(),
            phone: "415-555-0134".to_string(),
            latitude: 37.7749,
            longitude: -122.4194,
            categories: 0b000010,
            pickup_at: "2016-11-29T16:00:00".to_string(),
            time_zone_id: "America/Los_Angeles".to_string(),
        }
    }

    fn recipient_record() -> RecipientRecord {
        RecipientRecord {
            first_name: "Glide".to_string(),
            last_name: "Memorial".to_string(),
            street: "330 Ellis St".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            postal: 94102,
            country: "USA".to_string(),
            email: "intake@example.org".to_string(),
            phone: "415-555-0199".to_string(),
            latitude: 37.7853,
            longitude: -122.4111,
            restrictions: 0b000001,
            sunday: 44536,
            monday: 44382,
            tuesday: 0,
            wednesday: 0,
            thursday: 0,
            friday: 0,
            saturday: 65535,
        }
    }

    #[test]
    fn test_pickup_conversion() {
        let pickup = Pickup::try_from(pickup_record()).unwrap();

        assert_eq!(pickup.full_name(), "Dana Moore");
        assert_eq!(pickup.categories, 0b000010);
        assert!(pickup.categories <= crate::models::MAX_CATEGORY_MASK);
        assert!(pickup.matches.is_empty());
        assert_eq!(pickup.pickup_at.date().to_string(), "2016-11-29");
        assert_eq!(pickup.pickup_at.hour(), 16);
    }

    #[test]
    fn test_pickup_with_offset_timestamp() {
        let mut record = pickup_record();
        record.pickup_at = "2016-11-29T16:00:00-08:00".to_string();

        let pickup = Pickup::try_from(record).unwrap();
        // Local hour in the zone column, not the raw offset arithmetic
        assert_eq!(pickup.pickup_at.hour(), 16);
    }

    #[test]
    fn test_recipient_conversion() {
        let recipient = Recipient::try_from(recipient_record()).unwrap();

        assert_eq!(recipient.full_name(), "Glide Memorial");
        assert_eq!(recipient.restrictions, 0b000001);
        assert_eq!(
            recipient
                .schedule
                .closed_mask(crate::core::schedule::Weekday::Sunday),
            44536
        );
    }

    #[test]
    fn test_categories_out_of_range_rejected() {
        let mut record = pickup_record();
        record.categories = 64;

        assert!(matches!(
            Pickup::try_from(record),
            Err(RecordError::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_time_zone_rejected() {
        let mut record = pickup_record();
        record.time_zone_id = "America/Atlantis".to_string();

        assert!(matches!(
            Pickup::try_from(record),
            Err(RecordError::TimeZone(_))
        ));
    }

    #[test]
    fn test_unparseable_timestamp_rejected() {
        let mut record = pickup_record();
        record.pickup_at = "tuesday-ish".to_string();

        assert!(matches!(
            Pickup::try_from(record),
            Err(RecordError::Timestamp { .. })
        ));
    }

    #[test]
    fn test_bad_phone_rejected() {
        let mut record = pickup_record();
        record.phone = "555-0134".to_string();

        assert!(matches!(
            Pickup::try_from(record),
            Err(RecordError::Phone(_))
        ));
    }

    #[test]
    fn test_schedule_mask_out_of_range_rejected() {
        let mut record = recipient_record();
        record.monday = 65537;

        assert!(matches!(
            Recipient::try_from(record),
            Err(RecordError::Validation(_))
        ));
    }
}
