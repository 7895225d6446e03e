mod competition;
mod stage;

pub use competition::Competition;
pub use stage::Stage;
