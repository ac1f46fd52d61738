use std::collections::BTreeMap;

use crate::models::Pickup;

/// Pickups partitioned by local calendar date (`YYYY-MM-DD`), in
/// ascending date order
pub type DailyPickups = BTreeMap<String, Vec<Pickup>>;

/// Partition pickups by the local date of their pickup instant
///
/// Purely an ordering convenience for the output report: it fixes the
/// traversal order but has no effect on which recipients match which
/// pickups. Relative input order is preserved within each date.
pub fn group_pickups(pickups: Vec<Pickup>) -> DailyPickups {
    let mut daily_pickups = DailyPickups::new();

    for pickup in pickups {
        let date = pickup.pickup_at.date().to_string();
        daily_pickups.entry(date).or_default().push(pickup);
    }

    daily_pickups
}
