use simulado_core::simulations::{NewSimulation, Simulation, SimulationRepositoryTrait};
use simulado_core::Result;

use super::model::{NewSimulationDB, SimulationDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::simulations;
use crate::schema::simulations::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct SimulationRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl SimulationRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        SimulationRepository { pool, writer }
    }
}

#[async_trait]
impl SimulationRepositoryTrait for SimulationRepository {
    fn list_by_user(&self, owner_id: &str) -> Result<Vec<Simulation>> {
        let mut conn = get_connection(&self.pool)?;
        let simulations_db = simulations
            .filter(user_id.eq(owner_id))
            .load::<SimulationDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(simulations_db.into_iter().map(Simulation::from).collect())
    }

    fn find_by_id(&self, simulation_id: &str) -> Result<Option<Simulation>> {
        let mut conn = get_connection(&self.pool)?;
        let simulation_db = simulations
            .find(simulation_id)
            .first::<SimulationDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(simulation_db.map(Simulation::from))
    }

    async fn create(&self, new_simulation: NewSimulation) -> Result<Simulation> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Simulation> {
                let mut new_simulation_db: NewSimulationDB = new_simulation.into();
                new_simulation_db.id = Some(Uuid::new_v4().to_string());

                let result_db = diesel::insert_into(simulations::table)
                    .values(&new_simulation_db)
                    .returning(SimulationDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Simulation::from(result_db))
            })
            .await
    }

    async fn update(&self, simulation_update: Simulation) -> Result<Simulation> {
        let simulation_id_owned = simulation_update.id.clone();
        let simulation_db = SimulationDB::from(simulation_update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Simulation> {
                diesel::update(simulations.find(simulation_id_owned.clone()))
                    .set(&simulation_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = simulations
                    .filter(id.eq(simulation_id_owned))
                    .first::<SimulationDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Simulation::from(result_db))
            })
            .await
    }

    async fn delete(&self, simulation_id_to_delete: &str) -> Result<usize> {
        let simulation_id_owned = simulation_id_to_delete.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(simulations.find(simulation_id_owned))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
