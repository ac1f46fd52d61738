use tracing::debug;

use crate::core::distance::geodesic_distance_miles;
use crate::core::filters::{accepts_categories, open_at_pickup};
use crate::core::grouper::DailyPickups;
use crate::models::{Match, Pickup, Recipient};

/// Default eligibility radius around a pickup, in miles
pub const MAX_DISTANCE_MILES: f64 = 5.0;

/// Matching engine - pairs each pickup with its eligible recipients
///
/// A recipient is eligible when all three gates hold: no overlap between
/// the pickup's categories and the recipient's restrictions, geodesic
/// distance strictly under the radius, and the recipient open at the
/// pickup instant.
#[derive(Debug, Clone)]
pub struct Matcher {
    max_distance_miles: f64,
}

impl Matcher {
    pub fn new(max_distance_miles: f64) -> Self {
        Self { max_distance_miles }
    }

    pub fn with_default_radius() -> Self {
        Self::new(MAX_DISTANCE_MILES)
    }

    /// Find all eligible recipients for one pickup, sorted by distance
    ///
    /// Scans the full candidate set: the category gate runs first because
    /// it is a single AND, and only survivors pay for the geodesic
    /// distance and the schedule lookup. Ties in distance keep the input
    /// iteration order. An empty result is not an error.
    pub fn find_matches(&self, pickup: &Pickup, recipients: &[Recipient]) -> Vec<Match> {
        let mut eligible: Vec<Match> = recipients
            .iter()
            .filter(|recipient| accepts_categories(pickup, recipient))
            .filter_map(|recipient| {
                let distance_miles = geodesic_distance_miles(
                    pickup.latitude,
                    pickup.longitude,
                    recipient.latitude,
                    recipient.longitude,
                );

                if distance_miles < self.max_distance_miles && open_at_pickup(pickup, recipient) {
                    Some(Match {
                        recipient: recipient.clone(),
                        distance_miles,
                    })
                } else {
                    None
                }
            })
            .collect();

        eligible.sort_by(|a, b| {
            a.distance_miles
                .partial_cmp(&b.distance_miles)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        eligible
    }

    /// Match recipients to every pickup across all date groups
    ///
    /// Dates are visited in ascending order and pickups in their stored
    /// order; each pickup's `matches` field is written at most once, and
    /// only when at least one recipient is eligible.
    pub fn assign_matches(&self, daily_pickups: &mut DailyPickups, recipients: &[Recipient]) {
        for (date, pickups) in daily_pickups.iter_mut() {
            for pickup in pickups.iter_mut() {
                let matches = self.find_matches(pickup, recipients);

                debug!(
                    "{}: {} -> {} eligible recipient(s)",
                    date,
                    pickup.full_name(),
                    matches.len()
                );

                if !matches.is_empty() {
                    pickup.matches = matches;
                }
            }
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_radius()
    }
}
