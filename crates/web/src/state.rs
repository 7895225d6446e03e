use std::sync::Arc;

use storage::Database;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    /// Held while a new competition is validated and inserted, so two saves
    /// in this process cannot both pass the conflict checks. Other processes
    /// sharing the database are not covered.
    pub schedule_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            schedule_lock: Arc::new(Mutex::new(())),
        }
    }
}
