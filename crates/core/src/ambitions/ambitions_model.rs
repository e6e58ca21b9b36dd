//! Ambition domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SUBJECT_WEIGHT, MIN_SUBJECT_WEIGHT};
use crate::simulations::SubjectWeights;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a user's target goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ambition {
    pub id: String,
    pub user_id: String,
    pub city: String,
    pub course: String,
    pub college: String,
    pub math_weight: i32,
    pub languages_weight: i32,
    pub natural_science_weight: i32,
    pub human_science_weight: i32,
    pub essay_weight: i32,
    pub created_at: NaiveDateTime,
}

impl Ambition {
    /// Weight vector consumed by the scoring engine.
    pub fn weights(&self) -> SubjectWeights {
        SubjectWeights {
            math: self.math_weight,
            languages: self.languages_weight,
            natural_science: self.natural_science_weight,
            human_science: self.human_science_weight,
            essay: self.essay_weight,
        }
    }

    /// Descriptive label appended to simulation names created against this
    /// ambition.
    pub fn describe(&self) -> String {
        format!("{} - {} {}", self.course, self.college, self.city)
    }
}

/// Input model for creating a new ambition.
///
/// Text fields are optional so that presence can be validated explicitly;
/// weights fall back to [`DEFAULT_SUBJECT_WEIGHT`] when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAmbition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owner id. Overwritten by the transport layer with the authenticated
    /// identity; never trusted from the request body.
    #[serde(default)]
    pub user_id: String,
    pub city: Option<String>,
    pub course: Option<String>,
    pub college: Option<String>,
    #[serde(default = "default_weight")]
    pub math_weight: i32,
    #[serde(default = "default_weight")]
    pub languages_weight: i32,
    #[serde(default = "default_weight")]
    pub natural_science_weight: i32,
    #[serde(default = "default_weight")]
    pub human_science_weight: i32,
    #[serde(default = "default_weight")]
    pub essay_weight: i32,
}

impl NewAmbition {
    /// Validates the new ambition data.
    pub fn validate(&self) -> Result<()> {
        validate_target_fields(&self.city, &self.course, &self.college)?;
        validate_weights(&[
            self.math_weight,
            self.languages_weight,
            self.natural_science_weight,
            self.human_science_weight,
            self.essay_weight,
        ])
    }
}

/// Input model for a wholesale update of an existing ambition.
///
/// There is no partial update: every field travels together, exactly as on
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbitionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub city: Option<String>,
    pub course: Option<String>,
    pub college: Option<String>,
    #[serde(default = "default_weight")]
    pub math_weight: i32,
    #[serde(default = "default_weight")]
    pub languages_weight: i32,
    #[serde(default = "default_weight")]
    pub natural_science_weight: i32,
    #[serde(default = "default_weight")]
    pub human_science_weight: i32,
    #[serde(default = "default_weight")]
    pub essay_weight: i32,
}

impl AmbitionUpdate {
    /// Validates the update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Ambition id is required for updates".to_string(),
            )));
        }
        validate_target_fields(&self.city, &self.course, &self.college)?;
        validate_weights(&[
            self.math_weight,
            self.languages_weight,
            self.natural_science_weight,
            self.human_science_weight,
            self.essay_weight,
        ])
    }

    /// Applies this update onto an existing record, keeping its identity and
    /// creation timestamp.
    pub fn apply_to(&self, existing: Ambition) -> Ambition {
        Ambition {
            id: existing.id,
            user_id: existing.user_id,
            city: self.city.clone().unwrap_or_default(),
            course: self.course.clone().unwrap_or_default(),
            college: self.college.clone().unwrap_or_default(),
            math_weight: self.math_weight,
            languages_weight: self.languages_weight,
            natural_science_weight: self.natural_science_weight,
            human_science_weight: self.human_science_weight,
            essay_weight: self.essay_weight,
            created_at: existing.created_at,
        }
    }
}

fn default_weight() -> i32 {
    DEFAULT_SUBJECT_WEIGHT
}

fn validate_target_fields(
    city: &Option<String>,
    course: &Option<String>,
    college: &Option<String>,
) -> Result<()> {
    for (field, value) in [("city", city), ("course", course), ("college", college)] {
        if value.as_deref().map_or(true, |v| v.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::MissingField(
                field.to_string(),
            )));
        }
    }
    Ok(())
}

/// A submitted weight of zero is an invalid value, not a missing field.
fn validate_weights(weights: &[i32; 5]) -> Result<()> {
    if weights.iter().any(|w| *w < MIN_SUBJECT_WEIGHT) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "subject weights must be at least {}",
            MIN_SUBJECT_WEIGHT
        ))));
    }
    Ok(())
}
