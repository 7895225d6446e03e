use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Stage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: i64,
    pub modality: String,
    pub local: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub stage: Stage,
    pub first_country: String,
    #[serde(rename = "secondeCountry", alias = "secondCountry")]
    pub second_country: String,
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Competition [id= {}, modality= {}, local= {}, startDate= {}, endDate= {}, stage= {}]",
            self.id,
            self.modality,
            self.local,
            self.start_date,
            self.end_date,
            self.stage.label()
        )
    }
}
