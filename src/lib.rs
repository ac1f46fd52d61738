//! Foodmatch - matching engine for surplus-food pickups
//!
//! Pairs food-donation pickups with recipient organizations based on
//! geographic proximity, category/restriction compatibility, and the
//! recipient's hours of operation. A single batch run loads both record
//! sets, groups pickups by date, matches, and writes a report.

pub mod config;
pub mod core;
pub mod io;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    geodesic_distance_miles, group_pickups, DailyPickups, Matcher, Weekday, WeeklySchedule,
    MAX_DISTANCE_MILES,
};
pub use crate::models::{Match, Pickup, Recipient};
