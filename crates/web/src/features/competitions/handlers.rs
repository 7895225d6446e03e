use axum::{
    Json,
    extract::{Query, State},
};
use storage::{
    dto::competition::{CompetitionResponse, CreateCompetitionRequest, FindCompetitionsParams},
    repository::CompetitionRepository,
};
use validator::Validate;

use crate::{error::WebResult, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/find",
    params(FindCompetitionsParams),
    responses(
        (status = 200, description = "Competitions, filtered by modality when given", body = Vec<CompetitionResponse>)
    ),
    tag = "competitions"
)]
pub async fn find_competitions(
    State(state): State<AppState>,
    Query(params): Query<FindCompetitionsParams>,
) -> WebResult<Json<Vec<CompetitionResponse>>> {
    let repo = CompetitionRepository::new(state.db.pool());
    let competitions = services::find_competitions(&repo, params.modality.as_deref()).await?;

    let response: Vec<CompetitionResponse> = competitions
        .into_iter()
        .map(CompetitionResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/save",
    request_body = CreateCompetitionRequest,
    responses(
        (status = 200, description = "Competition scheduled successfully", body = CompetitionResponse),
        (status = 400, description = "A scheduling rule was violated (plain-text message) or a field is too long", body = String, content_type = "text/plain")
    ),
    tag = "competitions"
)]
pub async fn save_competition(
    State(state): State<AppState>,
    Json(req): Json<CreateCompetitionRequest>,
) -> WebResult<Json<CompetitionResponse>> {
    req.validate()?;

    let _guard = state.schedule_lock.lock().await;
    let repo = CompetitionRepository::new(state.db.pool());
    let competition = services::save_competition(&repo, &req).await?;

    Ok(Json(CompetitionResponse::from(competition)))
}
