use crate::models::{Pickup, Recipient};

/// Check whether a recipient can accept a pickup's offered categories
///
/// The two 6-bit masks must not intersect: any overlap between an
/// offered category and a restricted category disqualifies the
/// recipient. All bits are treated symmetrically, with no weighting.
#[inline]
pub fn accepts_categories(pickup: &Pickup, recipient: &Recipient) -> bool {
    pickup.categories & recipient.restrictions == 0
}

/// Check whether a recipient is open at the pickup's own instant
#[inline]
pub fn open_at_pickup(pickup: &Pickup, recipient: &Recipient) -> bool {
    recipient.is_open(&pickup.pickup_at)
}
