//! Domain entities

pub mod criteria;
pub mod firm;

pub use criteria::{FilterCriteria, FilterOutcome};
pub use firm::{FirmId, NewPropFirm, PropFirm};
