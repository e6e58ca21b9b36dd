//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for users
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting a user. `created_at` is filled by the table
/// default.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDB {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
}

// Conversion to domain models
impl From<UserDB> for simulado_core::users::User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            password_hash: db.password_hash,
            is_active: db.is_active,
            is_staff: db.is_staff,
            created_at: db.created_at,
        }
    }
}

impl From<simulado_core::users::NewUser> for NewUserDB {
    fn from(domain: simulado_core::users::NewUser) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            email: domain.email,
            password_hash: domain.password_hash,
            is_active: domain.is_active,
            is_staff: domain.is_staff,
        }
    }
}
