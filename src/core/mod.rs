// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod grouper;
pub mod matcher;
pub mod schedule;

pub use distance::geodesic_distance_miles;
pub use filters::{accepts_categories, open_at_pickup};
pub use grouper::{group_pickups, DailyPickups};
pub use matcher::{Matcher, MAX_DISTANCE_MILES};
pub use schedule::{Weekday, WeeklySchedule};
