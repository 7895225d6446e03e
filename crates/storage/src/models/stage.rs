use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tournament phase of a competition.
///
/// Stored in the database under its SCREAMING_SNAKE_CASE variant name. On the
/// wire the round of sixteen keeps the historical `ROUNDE_SIXTEEN` spelling
/// that existing API consumers send and expect; `ROUND_OF_SIXTEEN` is accepted
/// as input too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "varchar", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    #[serde(rename = "GROUP_PHASE")]
    GroupPhase,
    #[serde(rename = "ROUNDE_SIXTEEN", alias = "ROUND_OF_SIXTEEN")]
    RoundOfSixteen,
    #[serde(rename = "QUARTER_FINALS")]
    QuarterFinals,
    #[serde(rename = "SEMI_FINALS")]
    SemiFinals,
    #[serde(rename = "FINALS")]
    Finals,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::GroupPhase,
        Stage::RoundOfSixteen,
        Stage::QuarterFinals,
        Stage::SemiFinals,
        Stage::Finals,
    ];

    /// Label shown to people following the event
    pub fn label(self) -> &'static str {
        match self {
            Stage::GroupPhase => "eliminatorias",
            Stage::RoundOfSixteen => "oitavas de final",
            Stage::QuarterFinals => "quartas de final",
            Stage::SemiFinals => "semi finais",
            Stage::Finals => "finais",
        }
    }

    /// Semifinals and finals may share their time slot with other competitions
    pub fn allows_overlap(self) -> bool {
        match self {
            Stage::SemiFinals | Stage::Finals => true,
            Stage::GroupPhase | Stage::RoundOfSixteen | Stage::QuarterFinals => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_final_rounds_allow_overlap() {
        let exempt: Vec<Stage> = Stage::ALL
            .into_iter()
            .filter(|stage| stage.allows_overlap())
            .collect();

        assert_eq!(exempt, vec![Stage::SemiFinals, Stage::Finals]);
    }

    #[test]
    fn test_wire_names() {
        let names: Vec<String> = Stage::ALL
            .iter()
            .map(|stage| serde_json::to_string(stage).unwrap())
            .collect();

        assert_eq!(
            names,
            vec![
                "\"GROUP_PHASE\"",
                "\"ROUNDE_SIXTEEN\"",
                "\"QUARTER_FINALS\"",
                "\"SEMI_FINALS\"",
                "\"FINALS\"",
            ]
        );
    }

    #[test]
    fn test_round_of_sixteen_accepts_corrected_spelling() {
        let legacy: Stage = serde_json::from_str("\"ROUNDE_SIXTEEN\"").unwrap();
        let corrected: Stage = serde_json::from_str("\"ROUND_OF_SIXTEEN\"").unwrap();

        assert_eq!(legacy, Stage::RoundOfSixteen);
        assert_eq!(corrected, Stage::RoundOfSixteen);
    }

    #[test]
    fn test_unknown_stage_is_rejected() {
        assert!(serde_json::from_str::<Stage>("\"PLAYOFFS\"").is_err());
    }
}
