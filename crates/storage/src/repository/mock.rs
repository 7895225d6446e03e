use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;

use super::CompetitionStore;
use crate::dto::competition::CreateCompetitionRequest;
use crate::error::Result;
use crate::models::Competition;

/// Store call recorded by [`MockCompetitionStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Insert,
    FetchAll,
    FetchByModality(String),
    CountOverlappingPeriod(NaiveDateTime, NaiveDateTime),
    CountByDayAndLocal(NaiveDateTime, NaiveDateTime, String),
}

/// In-memory store answering the count queries with canned values
#[derive(Clone, Default)]
pub struct MockCompetitionStore {
    pub overlapping: i64,
    pub same_day_at_local: i64,
    pub competitions: Arc<Mutex<Vec<Competition>>>,
    pub calls: Arc<Mutex<Vec<StoreCall>>>,
}

#[allow(unused)]
impl MockCompetitionStore {
    pub fn with_counts(overlapping: i64, same_day_at_local: i64) -> Self {
        Self {
            overlapping,
            same_day_at_local,
            ..Self::default()
        }
    }

    pub fn with_competitions(competitions: Vec<Competition>) -> Self {
        Self {
            competitions: Arc::new(Mutex::new(competitions)),
            ..Self::default()
        }
    }

    pub fn get_calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<Competition> {
        self.competitions.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl CompetitionStore for MockCompetitionStore {
    async fn insert(&self, req: &CreateCompetitionRequest) -> Result<Competition> {
        self.record(StoreCall::Insert);

        let mut competitions = self.competitions.lock().unwrap();
        let competition = Competition {
            id: competitions.len() as i64 + 1,
            modality: req.modality.clone(),
            local: req.local.clone(),
            start_date: req.start_date,
            end_date: req.end_date,
            stage: req.stage,
            first_country: req.first_country.clone(),
            second_country: req.second_country.clone(),
        };
        competitions.push(competition.clone());

        Ok(competition)
    }

    async fn fetch_all(&self) -> Result<Vec<Competition>> {
        self.record(StoreCall::FetchAll);
        Ok(self.stored())
    }

    async fn fetch_by_modality(&self, modality: &str) -> Result<Vec<Competition>> {
        self.record(StoreCall::FetchByModality(modality.to_string()));

        let needle = modality.to_lowercase();
        Ok(self
            .stored()
            .into_iter()
            .filter(|c| c.modality.to_lowercase().contains(&needle))
            .collect())
    }

    async fn count_overlapping_period(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<i64> {
        self.record(StoreCall::CountOverlappingPeriod(start, end));
        Ok(self.overlapping)
    }

    async fn count_by_day_and_local(
        &self,
        day_start: NaiveDateTime,
        day_end: NaiveDateTime,
        local: &str,
    ) -> Result<i64> {
        self.record(StoreCall::CountByDayAndLocal(
            day_start,
            day_end,
            local.to_string(),
        ));
        Ok(self.same_day_at_local)
    }
}
