use simulado_core::ambitions::{Ambition, AmbitionRepositoryTrait, NewAmbition};
use simulado_core::Result;

use super::model::{AmbitionDB, NewAmbitionDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::ambitions;
use crate::schema::ambitions::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct AmbitionRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl AmbitionRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        AmbitionRepository { pool, writer }
    }
}

#[async_trait]
impl AmbitionRepositoryTrait for AmbitionRepository {
    fn list_by_user(&self, owner_id: &str) -> Result<Vec<Ambition>> {
        let mut conn = get_connection(&self.pool)?;
        let ambitions_db = ambitions
            .filter(user_id.eq(owner_id))
            .load::<AmbitionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(ambitions_db.into_iter().map(Ambition::from).collect())
    }

    fn find_by_id(&self, ambition_id: &str) -> Result<Option<Ambition>> {
        let mut conn = get_connection(&self.pool)?;
        let ambition_db = ambitions
            .find(ambition_id)
            .first::<AmbitionDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(ambition_db.map(Ambition::from))
    }

    async fn create(&self, new_ambition: NewAmbition) -> Result<Ambition> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Ambition> {
                let mut new_ambition_db: NewAmbitionDB = new_ambition.into();
                new_ambition_db.id = Some(Uuid::new_v4().to_string());

                let result_db = diesel::insert_into(ambitions::table)
                    .values(&new_ambition_db)
                    .returning(AmbitionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Ambition::from(result_db))
            })
            .await
    }

    async fn update(&self, ambition_update: Ambition) -> Result<Ambition> {
        let ambition_id_owned = ambition_update.id.clone();
        let ambition_db = AmbitionDB::from(ambition_update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Ambition> {
                diesel::update(ambitions.find(ambition_id_owned.clone()))
                    .set(&ambition_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = ambitions
                    .filter(id.eq(ambition_id_owned))
                    .first::<AmbitionDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Ambition::from(result_db))
            })
            .await
    }

    async fn delete(&self, ambition_id_to_delete: &str) -> Result<usize> {
        let ambition_id_owned = ambition_id_to_delete.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(ambitions.find(ambition_id_owned))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
