// Model exports
pub mod domain;
pub mod records;

pub use domain::{Match, Pickup, Recipient, MAX_CATEGORY_MASK};
pub use records::{PickupRecord, RecipientRecord, RecordError};
