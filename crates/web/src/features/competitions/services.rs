use storage::{
    dto::competition::CreateCompetitionRequest,
    error::{Result, ScheduleError},
    models::Competition,
    repository::CompetitionStore,
    services::scheduling,
};

/// List competitions, narrowed to a modality when one is given.
///
/// A missing or blank modality lists everything in storage order.
pub async fn find_competitions<S>(store: &S, modality: Option<&str>) -> Result<Vec<Competition>>
where
    S: CompetitionStore + ?Sized,
{
    match modality {
        Some(modality) if !modality.trim().is_empty() => store.fetch_by_modality(modality).await,
        _ => {
            tracing::info!("No modality given, listing every competition");
            store.fetch_all().await
        }
    }
}

/// Check the scheduling rules and store the competition if they all pass
pub async fn save_competition<S>(
    store: &S,
    candidate: &CreateCompetitionRequest,
) -> std::result::Result<Competition, ScheduleError>
where
    S: CompetitionStore + ?Sized,
{
    scheduling::validate(candidate, store)
        .await
        .inspect_err(|e| {
            if let ScheduleError::Rule(violation) = e {
                tracing::warn!(
                    local = %candidate.local,
                    stage = candidate.stage.label(),
                    "Competition rejected: {}",
                    violation
                );
            }
        })?;

    let saved = store.insert(candidate).await?;
    tracing::info!("Competition saved: {}", saved);

    Ok(saved)
}
