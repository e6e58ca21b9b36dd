#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::ambitions::{Ambition, AmbitionRepositoryTrait, AmbitionUpdate, NewAmbition};
    use crate::errors::{DatabaseError, Result, ValidationError};
    use crate::simulations::{
        NewSimulation, ScoreKind, Simulation, SimulationService, SimulationServiceTrait,
        SimulationSubmission, SimulationUpdate, SimulationRepositoryTrait,
    };
    use crate::users::User;
    use crate::Error;

    // --- Mock AmbitionRepository ---
    #[derive(Clone, Default)]
    struct MockAmbitionRepository {
        ambitions: Arc<Mutex<Vec<Ambition>>>,
    }

    impl MockAmbitionRepository {
        fn add(&self, ambition: Ambition) {
            self.ambitions.lock().unwrap().push(ambition);
        }

        fn set_weights(&self, ambition_id: &str, weights: [i32; 5]) {
            let mut ambitions = self.ambitions.lock().unwrap();
            let ambition = ambitions
                .iter_mut()
                .find(|a| a.id == ambition_id)
                .expect("ambition present");
            ambition.math_weight = weights[0];
            ambition.languages_weight = weights[1];
            ambition.natural_science_weight = weights[2];
            ambition.human_science_weight = weights[3];
            ambition.essay_weight = weights[4];
        }
    }

    #[async_trait]
    impl AmbitionRepositoryTrait for MockAmbitionRepository {
        fn list_by_user(&self, user_id: &str) -> Result<Vec<Ambition>> {
            Ok(self
                .ambitions
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.user_id == user_id)
                .cloned()
                .collect())
        }

        fn find_by_id(&self, ambition_id: &str) -> Result<Option<Ambition>> {
            Ok(self
                .ambitions
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == ambition_id)
                .cloned())
        }

        async fn create(&self, _new_ambition: NewAmbition) -> Result<Ambition> {
            unimplemented!()
        }

        async fn update(&self, _ambition: Ambition) -> Result<Ambition> {
            unimplemented!()
        }

        async fn delete(&self, ambition_id: &str) -> Result<usize> {
            let mut ambitions = self.ambitions.lock().unwrap();
            let before = ambitions.len();
            ambitions.retain(|a| a.id != ambition_id);
            Ok(before - ambitions.len())
        }
    }

    // --- Mock SimulationRepository ---
    #[derive(Clone, Default)]
    struct MockSimulationRepository {
        simulations: Arc<Mutex<Vec<Simulation>>>,
    }

    #[async_trait]
    impl SimulationRepositoryTrait for MockSimulationRepository {
        fn list_by_user(&self, user_id: &str) -> Result<Vec<Simulation>> {
            Ok(self
                .simulations
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.user_id == user_id)
                .cloned()
                .collect())
        }

        fn find_by_id(&self, simulation_id: &str) -> Result<Option<Simulation>> {
            Ok(self
                .simulations
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == simulation_id)
                .cloned())
        }

        async fn create(&self, new_simulation: NewSimulation) -> Result<Simulation> {
            let mut simulations = self.simulations.lock().unwrap();
            let simulation = Simulation {
                id: format!("sim-{}", simulations.len() + 1),
                user_id: new_simulation.user_id,
                ambition_id: new_simulation.ambition_id,
                name: new_simulation.name,
                math: new_simulation.math,
                languages: new_simulation.languages,
                natural_science: new_simulation.natural_science,
                human_science: new_simulation.human_science,
                essay: new_simulation.essay,
                score_kind: new_simulation.score_kind,
                final_score: new_simulation.final_score,
                created_at: Default::default(),
            };
            simulations.push(simulation.clone());
            Ok(simulation)
        }

        async fn update(&self, simulation: Simulation) -> Result<Simulation> {
            let mut simulations = self.simulations.lock().unwrap();
            let slot = simulations
                .iter_mut()
                .find(|s| s.id == simulation.id)
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound("Record not found".to_string()))
                })?;
            *slot = simulation.clone();
            Ok(simulation)
        }

        async fn delete(&self, simulation_id: &str) -> Result<usize> {
            let mut simulations = self.simulations.lock().unwrap();
            let before = simulations.len();
            simulations.retain(|s| s.id != simulation_id);
            Ok(before - simulations.len())
        }
    }

    fn make_user(id: &str, is_staff: bool) -> User {
        User {
            id: id.to_string(),
            name: "Ana".to_string(),
            email: format!("{}@example.com", id),
            password_hash: String::new(),
            is_active: true,
            is_staff,
            created_at: Default::default(),
        }
    }

    fn make_ambition(id: &str, user_id: &str, weights: [i32; 5]) -> Ambition {
        Ambition {
            id: id.to_string(),
            user_id: user_id.to_string(),
            city: "Recife".to_string(),
            course: "Medicina".to_string(),
            college: "UFPE".to_string(),
            math_weight: weights[0],
            languages_weight: weights[1],
            natural_science_weight: weights[2],
            human_science_weight: weights[3],
            essay_weight: weights[4],
            created_at: Default::default(),
        }
    }

    fn make_submission(name: &str) -> SimulationSubmission {
        SimulationSubmission {
            name: Some(name.to_string()),
            math: Some(800.0),
            languages: Some(600.0),
            natural_science: Some(600.0),
            human_science: Some(600.0),
            essay: Some(600.0),
            score_kind: Some(ScoreKind::Simulation),
        }
    }

    fn make_service() -> (
        SimulationService,
        MockSimulationRepository,
        MockAmbitionRepository,
    ) {
        let simulation_repo = MockSimulationRepository::default();
        let ambition_repo = MockAmbitionRepository::default();
        let service = SimulationService::new(
            Arc::new(simulation_repo.clone()),
            Arc::new(ambition_repo.clone()),
        );
        (service, simulation_repo, ambition_repo)
    }

    #[tokio::test]
    async fn submit_without_ambitions_is_rejected_and_creates_nothing() {
        let (service, simulation_repo, _) = make_service();

        let result = service
            .submit_simulations("u-1", make_submission("Simulado 1"))
            .await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(msg))) if msg.contains("no ambition")
        ));
        assert!(simulation_repo.simulations.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_creates_one_simulation_per_ambition() {
        let (service, _, ambition_repo) = make_service();
        ambition_repo.add(make_ambition("a-1", "u-1", [2, 1, 1, 1, 1]));
        ambition_repo.add(make_ambition("a-2", "u-1", [1, 1, 1, 1, 1]));
        // Another user's ambition must not be scored.
        ambition_repo.add(make_ambition("a-3", "u-2", [1, 1, 1, 1, 1]));

        let created = service
            .submit_simulations("u-1", make_submission("Simulado 1"))
            .await
            .unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(created[0].ambition_id, "a-1");
        assert_eq!(created[1].ambition_id, "a-2");
        // (1600+600+600+600+600)/6
        assert!((created[0].final_score - 4000.0 / 6.0).abs() < 1e-9);
        // Arithmetic mean for unit weights.
        assert!((created[1].final_score - 640.0).abs() < 1e-9);
        for simulation in &created {
            assert_eq!(simulation.name, "Simulado 1 - Medicina - UFPE Recife");
            assert_eq!(simulation.user_id, "u-1");
        }
    }

    #[tokio::test]
    async fn submit_with_missing_score_creates_nothing() {
        let (service, simulation_repo, ambition_repo) = make_service();
        ambition_repo.add(make_ambition("a-1", "u-1", [1, 1, 1, 1, 1]));

        let mut submission = make_submission("Simulado 1");
        submission.essay = None;
        let result = service.submit_simulations("u-1", submission).await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
        assert!(simulation_repo.simulations.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn submitted_zero_scores_are_accepted() {
        let (service, _, ambition_repo) = make_service();
        ambition_repo.add(make_ambition("a-1", "u-1", [1, 1, 1, 1, 1]));

        let mut submission = make_submission("Zerado");
        submission.math = Some(0.0);
        let created = service.submit_simulations("u-1", submission).await.unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].math, 0.0);
        assert!((created[0].final_score - 2400.0 / 5.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn update_recomputes_with_current_weights() {
        let (service, _, ambition_repo) = make_service();
        ambition_repo.add(make_ambition("a-1", "u-1", [1, 1, 1, 1, 1]));
        let user = make_user("u-1", false);

        let created = service
            .submit_simulations("u-1", make_submission("Simulado 1"))
            .await
            .unwrap();

        // The ambition's weights change after creation; the update must pick
        // up the new ones.
        ambition_repo.set_weights("a-1", [2, 1, 1, 1, 1]);

        let update = SimulationUpdate {
            id: Some(created[0].id.clone()),
            fields: make_submission("Simulado 1 revisto"),
        };
        let updated = service.update_simulation(&user, update).await.unwrap();

        assert!((updated.final_score - 4000.0 / 6.0).abs() < 1e-9);
        // Verbatim on update, no ambition descriptors appended.
        assert_eq!(updated.name, "Simulado 1 revisto");
    }

    #[tokio::test]
    async fn update_unknown_simulation_is_not_found() {
        let (service, _, _) = make_service();
        let user = make_user("u-1", false);

        let update = SimulationUpdate {
            id: Some("missing".to_string()),
            fields: make_submission("x"),
        };
        let result = service.update_simulation(&user, update).await;

        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn foreign_simulation_reads_as_not_found() {
        let (service, _, ambition_repo) = make_service();
        ambition_repo.add(make_ambition("a-1", "u-1", [1, 1, 1, 1, 1]));
        let created = service
            .submit_simulations("u-1", make_submission("Simulado 1"))
            .await
            .unwrap();

        let intruder = make_user("u-2", false);
        let result = service.delete_simulation(&intruder, &created[0].id).await;

        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn staff_may_delete_any_simulation() {
        let (service, simulation_repo, ambition_repo) = make_service();
        ambition_repo.add(make_ambition("a-1", "u-1", [1, 1, 1, 1, 1]));
        let created = service
            .submit_simulations("u-1", make_submission("Simulado 1"))
            .await
            .unwrap();

        let staff = make_user("admin", true);
        service
            .delete_simulation(&staff, &created[0].id)
            .await
            .unwrap();

        assert!(simulation_repo.simulations.lock().unwrap().is_empty());
    }
}
