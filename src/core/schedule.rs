use jiff::Zoned;

/// First hour slot covered by the bitpacked schedule encoding
pub const OPENING_HOUR: i8 = 8;

/// Number of hour slots carried per weekday (hours 8 through 23)
pub const HOURS_PER_DAY: i8 = 16;

/// Day of the week, `Sunday = 0` through `Saturday = 6`
///
/// Fixed enumeration rather than day-name strings so every weekday is
/// guaranteed a schedule entry at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl From<jiff::civil::Weekday> for Weekday {
    fn from(weekday: jiff::civil::Weekday) -> Self {
        Weekday::ALL[weekday.to_sunday_zero_offset() as usize]
    }
}

/// Bitpacked weekly operating hours for a recipient
///
/// Each weekday carries a mask where bit `h - 8` covers the hour slot
/// starting at `h` o'clock local time. A *set* bit marks a closed hour;
/// an unset bit marks an open one. This inverted sense comes from the
/// upstream data encoding and is deliberately preserved here.
///
/// The encoding only covers hours 8 through 23. Instants falling before
/// 08:00 local time are treated as always-closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    masks: [u32; 7],
}

impl WeeklySchedule {
    /// Build a schedule from per-weekday closed-hour masks, indexed
    /// `Sunday = 0` through `Saturday = 6`
    pub fn new(masks: [u32; 7]) -> Self {
        Self { masks }
    }

    /// A schedule with every covered hour open, every day
    pub fn always_open() -> Self {
        Self::new([0; 7])
    }

    /// The closed-hour mask for a single weekday
    pub fn closed_mask(&self, day: Weekday) -> u32 {
        self.masks[day as usize]
    }

    /// Whether the schedule is open for the hour slot containing the
    /// given instant, evaluated in the instant's own local time
    pub fn is_open(&self, at: &Zoned) -> bool {
        let hour = at.hour();
        if hour < OPENING_HOUR || hour >= OPENING_HOUR + HOURS_PER_DAY {
            // Outside the bitpacked range; treated as closed
            return false;
        }

        let day = Weekday::from(at.weekday());
        let bit = (hour - OPENING_HOUR) as u32;

        self.masks[day as usize] & (1 << bit) == 0
    }
}
