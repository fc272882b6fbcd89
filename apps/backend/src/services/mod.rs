//! Application services.

pub mod sequence;

pub use sequence::{SequenceService, StoreBackedSequenceService};
