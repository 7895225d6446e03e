use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::dto::competition::CreateCompetitionRequest;
use crate::error::Result;
use crate::models::Competition;

/// Storage operations the scheduling rules and request handling rely on
#[async_trait::async_trait]
pub trait CompetitionStore: Send + Sync {
    /// Persist a new competition and return it with its assigned id
    async fn insert(&self, req: &CreateCompetitionRequest) -> Result<Competition>;

    async fn fetch_all(&self) -> Result<Vec<Competition>>;

    /// Competitions whose modality contains `modality`, ignoring case
    async fn fetch_by_modality(&self, modality: &str) -> Result<Vec<Competition>>;

    /// Number of competitions whose window intersects `[start, end]`, bounds included
    async fn count_overlapping_period(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<i64>;

    /// Number of competitions at `local` starting within `[day_start, day_end]`
    async fn count_by_day_and_local(
        &self,
        day_start: NaiveDateTime,
        day_end: NaiveDateTime,
        local: &str,
    ) -> Result<i64>;
}

/// Repository for Competition database operations
pub struct CompetitionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitionRepository<'a> {
    /// Create a new CompetitionRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl<'a> CompetitionStore for CompetitionRepository<'a> {
    async fn insert(&self, req: &CreateCompetitionRequest) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            INSERT INTO competitions (
                modality, "local", start_date, end_date, stage, first_country, second_country
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, modality, "local", start_date, end_date, stage,
                      first_country, second_country
            "#,
        )
        .bind(&req.modality)
        .bind(&req.local)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(req.stage)
        .bind(&req.first_country)
        .bind(&req.second_country)
        .fetch_one(self.pool)
        .await?;

        Ok(competition)
    }

    async fn fetch_all(&self) -> Result<Vec<Competition>> {
        let competitions = sqlx::query_as::<_, Competition>(
            r#"
            SELECT id, modality, "local", start_date, end_date, stage,
                   first_country, second_country
            FROM competitions
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(competitions)
    }

    async fn fetch_by_modality(&self, modality: &str) -> Result<Vec<Competition>> {
        let pattern = format!("%{}%", escape_like(modality));

        let competitions = sqlx::query_as::<_, Competition>(
            r#"
            SELECT id, modality, "local", start_date, end_date, stage,
                   first_country, second_country
            FROM competitions
            WHERE modality ILIKE $1 ESCAPE '\'
            "#,
        )
        .bind(pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(competitions)
    }

    async fn count_overlapping_period(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM competitions
            WHERE (start_date BETWEEN $1 AND $2)
               OR (end_date BETWEEN $1 AND $2)
               OR ($1 BETWEEN start_date AND end_date)
               OR ($2 BETWEEN start_date AND end_date)
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    async fn count_by_day_and_local(
        &self,
        day_start: NaiveDateTime,
        day_end: NaiveDateTime,
        local: &str,
    ) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM competitions
            WHERE (start_date BETWEEN $1 AND $2)
              AND "local" = $3
            "#,
        )
        .bind(day_start)
        .bind(day_end)
        .bind(local)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}

/// Escape LIKE wildcards so user input matches literally
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sqlx::PgPool;

    use super::*;
    use crate::models::Stage;
    use crate::services::scheduling::DayWindow;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("futebol"), "futebol");
        assert_eq!(escape_like("100%_raso\\"), "100\\%\\_raso\\\\");
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 8, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn request(
        local: &str,
        modality: &str,
        start: (u32, u32),
        end: (u32, u32),
    ) -> CreateCompetitionRequest {
        CreateCompetitionRequest {
            modality: modality.to_string(),
            local: local.to_string(),
            start_date: at(start.0, start.1),
            end_date: at(end.0, end.1),
            stage: Stage::GroupPhase,
            first_country: "Brasil".to_string(),
            second_country: "Argentina".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run when PostgreSQL is available through DATABASE_URL
    async fn test_insert_assigns_id(pool: PgPool) {
        let repo = CompetitionRepository::new(&pool);

        let first = repo
            .insert(&request("Maracana", "Futebol", (13, 0), (15, 0)))
            .await
            .unwrap();
        let second = repo
            .insert(&request("Maracana", "Volei", (16, 0), (17, 0)))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.stage, Stage::GroupPhase);
        assert_eq!(repo.fetch_all().await.unwrap().len(), 2);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run when PostgreSQL is available through DATABASE_URL
    async fn test_every_stage_round_trips(pool: PgPool) {
        let repo = CompetitionRepository::new(&pool);

        for (hour, stage) in (8..).zip(Stage::ALL) {
            let mut req = request("Maracana", "Futebol", (hour, 0), (hour, 45));
            req.stage = stage;

            let inserted = repo.insert(&req).await.unwrap();
            assert_eq!(inserted.stage, stage);
        }

        let stages: Vec<Stage> = sqlx::query_scalar::<_, String>(
            "SELECT stage FROM competitions ORDER BY id",
        )
        .fetch_all(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|stored| match stored.as_str() {
            "GROUP_PHASE" => Stage::GroupPhase,
            "ROUND_OF_SIXTEEN" => Stage::RoundOfSixteen,
            "QUARTER_FINALS" => Stage::QuarterFinals,
            "SEMI_FINALS" => Stage::SemiFinals,
            "FINALS" => Stage::Finals,
            other => panic!("unexpected stored stage {other}"),
        })
        .collect();
        assert_eq!(stages, Stage::ALL.to_vec());

        let fetched: Vec<Stage> = repo
            .fetch_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.stage)
            .collect();
        assert_eq!(fetched.len(), Stage::ALL.len());
        for stage in Stage::ALL {
            assert!(fetched.contains(&stage), "{stage:?}");
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run when PostgreSQL is available through DATABASE_URL
    async fn test_fetch_rows_written_outside_the_repository(pool: PgPool) {
        sqlx::query(
            r#"
            INSERT INTO competitions (
                modality, "local", start_date, end_date, stage, first_country, second_country
            )
            VALUES ('Futebol', 'Maracana', '2018-08-01 13:00:00', '2018-08-01 15:00:00',
                    'SEMI_FINALS', 'Brasil', 'Alemanha')
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        let competitions = CompetitionRepository::new(&pool).fetch_all().await.unwrap();

        assert_eq!(competitions.len(), 1);
        assert_eq!(competitions[0].stage, Stage::SemiFinals);
        assert_eq!(competitions[0].start_date, at(13, 0));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run when PostgreSQL is available through DATABASE_URL
    async fn test_fetch_by_modality_ignores_case(pool: PgPool) {
        let repo = CompetitionRepository::new(&pool);
        repo.insert(&request("Maracana", "Futebol de areia", (9, 0), (10, 0)))
            .await
            .unwrap();
        repo.insert(&request("Maracana", "Volei", (11, 0), (12, 0)))
            .await
            .unwrap();

        let found = repo.fetch_by_modality("FUTEBOL").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].modality, "Futebol de areia");

        assert!(repo.fetch_by_modality("%").await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run when PostgreSQL is available through DATABASE_URL
    async fn test_count_overlapping_period(pool: PgPool) {
        let repo = CompetitionRepository::new(&pool);
        repo.insert(&request("Maracana", "Futebol", (12, 0), (16, 0)))
            .await
            .unwrap();

        let inside = repo
            .count_overlapping_period(at(13, 0), at(15, 0))
            .await
            .unwrap();
        let touching = repo
            .count_overlapping_period(at(16, 0), at(17, 0))
            .await
            .unwrap();
        let apart = repo
            .count_overlapping_period(at(17, 0), at(18, 0))
            .await
            .unwrap();

        assert_eq!(inside, 1);
        assert_eq!(touching, 1);
        assert_eq!(apart, 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run when PostgreSQL is available through DATABASE_URL
    async fn test_count_by_day_and_local(pool: PgPool) {
        let repo = CompetitionRepository::new(&pool);
        repo.insert(&request("Maracana", "Futebol", (9, 0), (10, 0)))
            .await
            .unwrap();
        repo.insert(&request("Maracana", "Futebol", (23, 0), (23, 45)))
            .await
            .unwrap();
        repo.insert(&request("maracana", "Futebol", (18, 0), (19, 0)))
            .await
            .unwrap();
        repo.insert(&request("Engenhao", "Futebol", (11, 0), (12, 0)))
            .await
            .unwrap();

        let day = DayWindow::containing(at(13, 0));
        let count = repo
            .count_by_day_and_local(day.start, day.end, "Maracana")
            .await
            .unwrap();

        assert_eq!(count, 2);
    }
}
