//! Database models for simulations.
//!
//! `score_kind` is stored as its integer code (0 = simulation, 1 = official).

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ambitions::AmbitionDB;
use crate::users::UserDB;
use simulado_core::simulations::ScoreKind;

/// Database model for simulations
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
#[diesel(belongs_to(AmbitionDB, foreign_key = ambition_id))]
#[diesel(table_name = crate::schema::simulations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SimulationDB {
    pub id: String,
    pub user_id: String,
    pub ambition_id: String,
    pub name: String,
    pub math: f64,
    pub languages: f64,
    pub natural_science: f64,
    pub human_science: f64,
    pub essay: f64,
    pub score_kind: i32,
    pub final_score: f64,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting a simulation. `created_at` is filled by the
/// table default.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::simulations)]
#[serde(rename_all = "camelCase")]
pub struct NewSimulationDB {
    pub id: Option<String>,
    pub user_id: String,
    pub ambition_id: String,
    pub name: String,
    pub math: f64,
    pub languages: f64,
    pub natural_science: f64,
    pub human_science: f64,
    pub essay: f64,
    pub score_kind: i32,
    pub final_score: f64,
}

// Conversion to domain models
impl From<SimulationDB> for simulado_core::simulations::Simulation {
    fn from(db: SimulationDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            ambition_id: db.ambition_id,
            name: db.name,
            math: db.math,
            languages: db.languages,
            natural_science: db.natural_science,
            human_science: db.human_science,
            essay: db.essay,
            score_kind: ScoreKind::from_code(db.score_kind),
            final_score: db.final_score,
            created_at: db.created_at,
        }
    }
}

impl From<simulado_core::simulations::Simulation> for SimulationDB {
    fn from(domain: simulado_core::simulations::Simulation) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            ambition_id: domain.ambition_id,
            name: domain.name,
            math: domain.math,
            languages: domain.languages,
            natural_science: domain.natural_science,
            human_science: domain.human_science,
            essay: domain.essay,
            score_kind: domain.score_kind.code(),
            final_score: domain.final_score,
            created_at: domain.created_at,
        }
    }
}

impl From<simulado_core::simulations::NewSimulation> for NewSimulationDB {
    fn from(domain: simulado_core::simulations::NewSimulation) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            ambition_id: domain.ambition_id,
            name: domain.name,
            math: domain.math,
            languages: domain.languages,
            natural_science: domain.natural_science,
            human_science: domain.human_science,
            essay: domain.essay,
            score_kind: domain.score_kind.code(),
            final_score: domain.final_score,
        }
    }
}
