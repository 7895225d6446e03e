//! Rules a new competition must satisfy before it is stored.
//!
//! Rules run in the order of [`SchedulingRule::ALL`] and the first violation
//! wins, so a candidate that is too short never reaches the store queries.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

use crate::dto::competition::CreateCompetitionRequest;
use crate::error::{RuleViolation, ScheduleError};
use crate::repository::CompetitionStore;

/// Shortest allowed competition, in whole minutes
pub const MIN_DURATION_MINUTES: i64 = 30;

/// Most competitions a single venue may host on one calendar day
pub const MAX_COMPETITIONS_PER_DAY: i64 = 4;

/// First and last second of a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DayWindow {
    /// The day `at` falls on, from 00:00:00 to 23:59:59
    pub fn containing(at: NaiveDateTime) -> Self {
        let start = at.date().and_time(NaiveTime::MIN);
        let end = start + TimeDelta::seconds(86_399);
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingRule {
    MinimumDuration,
    NoOverlap,
    DailyLimitPerLocal,
}

impl SchedulingRule {
    pub const ALL: [SchedulingRule; 3] = [
        SchedulingRule::MinimumDuration,
        SchedulingRule::NoOverlap,
        SchedulingRule::DailyLimitPerLocal,
    ];

    pub async fn check<S>(
        self,
        candidate: &CreateCompetitionRequest,
        store: &S,
    ) -> Result<(), ScheduleError>
    where
        S: CompetitionStore + ?Sized,
    {
        match self {
            SchedulingRule::MinimumDuration => {
                let minutes = (candidate.end_date - candidate.start_date).num_minutes();
                if minutes < MIN_DURATION_MINUTES {
                    return Err(RuleViolation::Duration.into());
                }
            }
            SchedulingRule::NoOverlap => {
                if candidate.stage.allows_overlap() {
                    return Ok(());
                }

                let overlapping = store
                    .count_overlapping_period(candidate.start_date, candidate.end_date)
                    .await?;
                if overlapping > 0 {
                    return Err(RuleViolation::SameTime.into());
                }
            }
            SchedulingRule::DailyLimitPerLocal => {
                let day = DayWindow::containing(candidate.start_date);
                let scheduled = store
                    .count_by_day_and_local(day.start, day.end, &candidate.local)
                    .await?;
                if scheduled >= MAX_COMPETITIONS_PER_DAY {
                    return Err(RuleViolation::Quantity.into());
                }
            }
        }

        Ok(())
    }
}

/// Run every scheduling rule against `candidate`, stopping at the first violation
pub async fn validate<S>(
    candidate: &CreateCompetitionRequest,
    store: &S,
) -> Result<(), ScheduleError>
where
    S: CompetitionStore + ?Sized,
{
    for rule in SchedulingRule::ALL {
        rule.check(candidate, store).await?;
    }

    Ok(())
}
