// I/O adapter exports
pub mod reader;
pub mod writer;

pub use reader::{load_pickups, load_recipients, read_pickups, read_recipients, LoadError};
pub use writer::{write_matches, write_matches_to, WriteError};
