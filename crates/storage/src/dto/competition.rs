use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{Competition, Stage};

/// Request payload for scheduling a new competition.
///
/// Any `id` sent by the client is ignored; storage assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompetitionRequest {
    #[validate(length(max = 255, message = "Modality must be at most 255 characters"))]
    pub modality: String,

    #[validate(length(max = 255, message = "Local must be at most 255 characters"))]
    pub local: String,

    #[schema(example = "2018-08-01T13:00:00")]
    pub start_date: NaiveDateTime,

    #[schema(example = "2018-08-01T15:00:00")]
    pub end_date: NaiveDateTime,

    pub stage: Stage,

    #[validate(length(max = 255))]
    pub first_country: String,

    /// Spelled `secondeCountry` for compatibility with existing clients;
    /// `secondCountry` is accepted as well.
    #[validate(length(max = 255))]
    #[serde(rename = "secondeCountry", alias = "secondCountry")]
    pub second_country: String,
}

/// Response containing a stored competition
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionResponse {
    pub id: i64,
    pub modality: String,
    pub local: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub stage: Stage,
    pub first_country: String,
    /// Legacy spelling kept on the wire
    #[serde(rename = "secondeCountry")]
    pub second_country: String,
}

/// Query string of the listing endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindCompetitionsParams {
    /// Case-insensitive fragment of the modality; blank lists everything
    pub modality: Option<String>,
}

impl From<Competition> for CompetitionResponse {
    fn from(comp: Competition) -> Self {
        Self {
            id: comp.id,
            modality: comp.modality,
            local: comp.local,
            start_date: comp.start_date,
            end_date: comp.end_date,
            stage: comp.stage,
            first_country: comp.first_country,
            second_country: comp.second_country,
        }
    }
}
