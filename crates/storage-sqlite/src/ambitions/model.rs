//! Database models for ambitions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;

/// Database model for ambitions
#[derive(
    Queryable,
    Identifiable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::ambitions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AmbitionDB {
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

/// Database model for inserting an ambition. `created_at` is filled by the
/// table default.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::ambitions)]
#[serde(rename_all = "camelCase")]
pub struct NewAmbitionDB {
    pub id: Option<String>,
    pub user_id: String,
    pub city: String,
    pub course: String,
    pub college: String,
    pub math_weight: i32,
    pub languages_weight: i32,
    pub natural_science_weight: i32,
    pub human_science_weight: i32,
    pub essay_weight: i32,
}

// Conversion to domain models
impl From<AmbitionDB> for simulado_core::ambitions::Ambition {
    fn from(db: AmbitionDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            city: db.city,
            course: db.course,
            college: db.college,
            math_weight: db.math_weight,
            languages_weight: db.languages_weight,
            natural_science_weight: db.natural_science_weight,
            human_science_weight: db.human_science_weight,
            essay_weight: db.essay_weight,
            created_at: db.created_at,
        }
    }
}

impl From<simulado_core::ambitions::Ambition> for AmbitionDB {
    fn from(domain: simulado_core::ambitions::Ambition) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            city: domain.city,
            course: domain.course,
            college: domain.college,
            math_weight: domain.math_weight,
            languages_weight: domain.languages_weight,
            natural_science_weight: domain.natural_science_weight,
            human_science_weight: domain.human_science_weight,
            essay_weight: domain.essay_weight,
            created_at: domain.created_at,
        }
    }
}

/// Validated creation payloads always carry the target fields; the fallback
/// only fires on unvalidated input.
impl From<simulado_core::ambitions::NewAmbition> for NewAmbitionDB {
    fn from(domain: simulado_core::ambitions::NewAmbition) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            city: domain.city.unwrap_or_default(),
            course: domain.course.unwrap_or_default(),
            college: domain.college.unwrap_or_default(),
            math_weight: domain.math_weight,
            languages_weight: domain.languages_weight,
            natural_science_weight: domain.natural_science_weight,
            human_science_weight: domain.human_science_weight,
            essay_weight: domain.essay_weight,
        }
    }
}
