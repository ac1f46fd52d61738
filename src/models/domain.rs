use jiff::Zoned;

use crate::core::schedule::WeeklySchedule;

/// Highest value representable in the 6-bit category/restriction encoding
pub const MAX_CATEGORY_MASK: u8 = 0b0011_1111;

/// A scheduled food-donation offering at a specific time and place
///
/// `matches` starts empty and is assigned exactly once by the matching
/// engine; everything else is immutable after construction.
#[derive(Debug, Clone)]
pub struct Pickup {
    pub first_name: String,
    pub last_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// 6-bit mask of offered food/handling categories (0-63)
    pub categories: u8,
    /// Pickup instant, carrying its IANA time zone
    pub pickup_at: Zoned,
    pub matches: Vec<Match>,
}

impl Pickup {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An organization able to receive donations
///
/// Read-only after construction; the matching engine never mutates
/// recipients.
#[derive(Debug, Clone)]
pub struct Recipient {
    pub first_name: String,
    pub last_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// 6-bit mask of categories this recipient cannot accept (0-63)
    pub restrictions: u8,
    pub schedule: WeeklySchedule,
}

impl Recipient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the recipient is open at the given instant, per its
    /// weekly schedule evaluated in the instant's local time
    pub fn is_open(&self, at: &Zoned) -> bool {
        self.schedule.is_open(at)
    }
}

/// An eligible (recipient, distance) pairing for a single pickup
#[derive(Debug, Clone)]
pub struct Match {
    pub recipient: Recipient,
    pub distance_miles: f64,
}
