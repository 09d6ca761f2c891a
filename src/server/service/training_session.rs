use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        hall::HallRepository, team::TeamRepository, training_session::TrainingSessionRepository,
    },
    error::AppError,
    hypermedia::page::{Page, PageRequest},
    model::training_session::{
        CreateTrainingSessionParams, TrainingSession, UpdateTrainingSessionParams,
    },
};

pub struct TrainingSessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingSessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a training session of an existing team in an existing hall
    ///
    /// # Returns
    /// - `Ok(TrainingSession)`: Created session with its hall
    /// - `Err(AppError::NotFound)`: Team or hall does not exist
    pub async fn create(
        &self,
        params: CreateTrainingSessionParams,
    ) -> Result<TrainingSession, AppError> {
        if !TeamRepository::new(self.db).exists_by_id(params.team_id).await? {
            return Err(AppError::NotFound(format!(
                "Team not found with id: {}",
                params.team_id
            )));
        }
        self.ensure_hall(params.hall_id).await?;

        let session = TrainingSessionRepository::new(self.db)
            .create(params)
            .await?;
        tracing::info!(
            "Created training session {:?} for team {}",
            session.id,
            session.team_id
        );

        Ok(session)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TrainingSession, AppError> {
        TrainingSessionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(
        &self,
        request: &PageRequest,
    ) -> Result<Page<TrainingSession>, AppError> {
        let (sessions, total) = TrainingSessionRepository::new(self.db)
            .get_paginated(request)
            .await?;

        let page = Page::new(sessions, request.page, request.size, total)?;

        Ok(page.with_sort(request.sort.clone()))
    }

    pub async fn get_all(&self) -> Result<Vec<TrainingSession>, AppError> {
        Ok(TrainingSessionRepository::new(self.db).get_all().await?)
    }

    /// Moves a session to another hall or time slot, skipping the write when nothing
    /// changed
    pub async fn update(
        &self,
        id: i32,
        params: UpdateTrainingSessionParams,
    ) -> Result<TrainingSession, AppError> {
        let repo = TrainingSessionRepository::new(self.db);
        let session = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if session.matches(&params) {
            tracing::debug!("Training session {} unchanged, skipping update", id);
            return Ok(session);
        }

        self.ensure_hall(params.hall_id).await?;

        let updated = repo.update(id, params).await?;
        tracing::info!("Updated training session {}", id);

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let rows = TrainingSessionRepository::new(self.db).delete(id).await?;
        if rows == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Deleted training session {}", id);

        Ok(())
    }

    async fn ensure_hall(&self, hall_id: i32) -> Result<(), AppError> {
        match HallRepository::new(self.db).find_by_id(hall_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "Hall not found with id: {}",
                hall_id
            ))),
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("TrainingSession not found with id: {}", id))
}
