pub mod competition;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use competition::{CompetitionRepository, CompetitionStore};
