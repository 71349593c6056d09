pub mod cli;
pub mod config;
pub mod consumption;
pub mod directory;
pub mod enclosure;
pub mod error;
pub mod logging;
pub mod policy;
pub mod record;
pub mod report;
pub mod shared;

pub use consumption::consumption_totals;
pub use directory::{AllocationDirectory, EnclosureRef, LookupStatus, Placement, PlacementOutcome};
pub use enclosure::{Enclosure, EnclosureId};
pub use error::{AviaryError, AviaryErrorKind};
pub use record::{BirdRecord, BirdSpec, Classification, Food, Species, Traits};
pub use shared::SharedDirectory;
