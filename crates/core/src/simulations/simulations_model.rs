//! Simulation domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::scoring::SubjectScores;
use crate::{errors::ValidationError, Error, Result};

/// Distinguishes a self-reported simulation from an officially recorded
/// score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreKind {
    #[default]
    Simulation,
    Official,
}

impl ScoreKind {
    /// Stable integer code used by the storage layer.
    pub fn code(self) -> i32 {
        match self {
            ScoreKind::Simulation => 0,
            ScoreKind::Official => 1,
        }
    }

    /// Inverse of [`code`](Self::code). Unknown codes fall back to
    /// `Simulation`.
    pub fn from_code(code: i32) -> Self {
        if code == 1 {
            ScoreKind::Official
        } else {
            ScoreKind::Simulation
        }
    }
}

/// Domain model for one scored attempt against one ambition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub id: String,
    pub user_id: String,
    pub ambition_id: String,
    pub name: String,
    pub math: f64,
    pub languages: f64,
    pub natural_science: f64,
    pub human_science: f64,
    pub essay: f64,
    pub score_kind: ScoreKind,
    /// Weighted mean frozen at the time it was computed; later weight changes
    /// on the ambition do not rewrite it.
    pub final_score: f64,
    pub created_at: NaiveDateTime,
}

/// Input model for inserting one simulation row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSimulation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub ambition_id: String,
    pub name: String,
    pub math: f64,
    pub languages: f64,
    pub natural_science: f64,
    pub human_science: f64,
    pub essay: f64,
    pub score_kind: ScoreKind,
    pub final_score: f64,
}

/// Score submission payload. One submission fans out into one simulation per
/// ambition owned by the submitting user.
///
/// Fields are optional so that an absent field can be told apart from a
/// legitimate zero score; `validate` enforces presence.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSubmission {
    pub name: Option<String>,
    pub math: Option<f64>,
    pub languages: Option<f64>,
    pub natural_science: Option<f64>,
    pub human_science: Option<f64>,
    pub essay: Option<f64>,
    pub score_kind: Option<ScoreKind>,
}

impl SimulationSubmission {
    /// Checks that every required field is present.
    pub fn validate(&self) -> Result<()> {
        if self.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        for (field, value) in [
            ("math score", self.math),
            ("languages score", self.languages),
            ("natural science score", self.natural_science),
            ("human science score", self.human_science),
            ("essay score", self.essay),
        ] {
            if value.is_none() {
                return Err(Error::Validation(ValidationError::MissingField(
                    field.to_string(),
                )));
            }
        }
        if self.score_kind.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "score kind".to_string(),
            )));
        }
        Ok(())
    }

    /// Raw score vector. `validate` runs first; a `None` here only happens on
    /// an unvalidated payload and falls back to zero.
    pub fn scores(&self) -> SubjectScores {
        SubjectScores {
            math: self.math.unwrap_or_default(),
            languages: self.languages.unwrap_or_default(),
            natural_science: self.natural_science.unwrap_or_default(),
            human_science: self.human_science.unwrap_or_default(),
            essay: self.essay.unwrap_or_default(),
        }
    }
}

/// Update payload for a single existing simulation. Same field set as a
/// submission, plus the target id.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SimulationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: SimulationSubmission,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> SimulationSubmission {
        SimulationSubmission {
            name: Some("Simulado 1".to_string()),
            math: Some(700.0),
            languages: Some(650.0),
            natural_science: Some(600.0),
            human_science: Some(550.0),
            essay: Some(800.0),
            score_kind: Some(ScoreKind::Simulation),
        }
    }

    #[test]
    fn test_complete_submission_validates() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn test_missing_score_rejected() {
        let mut s = submission();
        s.human_science = None;
        assert!(matches!(
            s.validate(),
            Err(Error::Validation(ValidationError::MissingField(f))) if f == "human science score"
        ));
    }

    #[test]
    fn test_zero_score_is_a_value_not_missing() {
        let mut s = submission();
        s.math = Some(0.0);
        assert!(s.validate().is_ok());
        assert_eq!(s.scores().math, 0.0);
    }

    #[test]
    fn test_missing_kind_rejected() {
        let mut s = submission();
        s.score_kind = None;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_score_kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&ScoreKind::Simulation).unwrap(),
            "\"SIMULATION\""
        );
        assert_eq!(
            serde_json::to_string(&ScoreKind::Official).unwrap(),
            "\"OFFICIAL\""
        );
        assert_eq!(
            serde_json::from_str::<ScoreKind>("\"OFFICIAL\"").unwrap(),
            ScoreKind::Official
        );
    }

    #[test]
    fn test_score_kind_codes_round_trip() {
        assert_eq!(ScoreKind::from_code(ScoreKind::Simulation.code()), ScoreKind::Simulation);
        assert_eq!(ScoreKind::from_code(ScoreKind::Official.code()), ScoreKind::Official);
        // Unknown codes degrade to the default kind.
        assert_eq!(ScoreKind::from_code(7), ScoreKind::Simulation);
    }

    #[test]
    fn test_update_payload_flattens_fields() {
        let update: SimulationUpdate = serde_json::from_str(
            r#"{"name":"Retake","math":500.0,"languages":500.0,"naturalScience":500.0,"humanScience":500.0,"essay":500.0,"scoreKind":"OFFICIAL"}"#,
        )
        .unwrap();
        assert!(update.id.is_none());
        assert_eq!(update.fields.score_kind, Some(ScoreKind::Official));
        assert!(update.fields.validate().is_ok());
    }
}
