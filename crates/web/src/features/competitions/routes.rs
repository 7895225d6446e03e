use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{find_competitions, save_competition};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/find", get(find_competitions))
        .route("/save", post(save_competition))
}
