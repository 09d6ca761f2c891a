use sea_orm::DatabaseConnection;

use crate::server::{
    data::coach::CoachRepository,
    error::AppError,
    hypermedia::page::{Page, PageRequest},
    model::coach::{Coach, CoachParams},
};

pub struct CoachService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoachService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CoachParams) -> Result<Coach, AppError> {
        let coach = CoachRepository::new(self.db).create(params).await?;
        tracing::info!("Created coach {:?}", coach.id);

        Ok(coach)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Coach, AppError> {
        CoachRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(&self, request: &PageRequest) -> Result<Page<Coach>, AppError> {
        let (coaches, total) = CoachRepository::new(self.db).get_paginated(request).await?;

        let page = Page::new(coaches, request.page, request.size, total)?;

        Ok(page.with_sort(request.sort.clone()))
    }

    pub async fn get_all(&self) -> Result<Vec<Coach>, AppError> {
        Ok(CoachRepository::new(self.db).get_all().await?)
    }

    /// Updates a coach, skipping the write when nothing changed
    ///
    /// # Returns
    /// - `Ok(Coach)`: Updated or unchanged coach
    /// - `Err(AppError::NotFound)`: No coach with this ID
    pub async fn update(&self, id: i32, params: CoachParams) -> Result<Coach, AppError> {
        let repo = CoachRepository::new(self.db);
        let coach = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if coach.matches(&params) {
            tracing::debug!("Coach {} unchanged, skipping update", id);
            return Ok(coach);
        }

        let updated = repo.update(id, params).await?;
        tracing::info!("Updated coach {}", id);

        Ok(updated)
    }

    /// Deletes a coach and every team role they hold
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let rows = CoachRepository::new(self.db).delete(id).await?;
        if rows == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Deleted coach {}", id);

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Coach not found with id: {}", id))
}
