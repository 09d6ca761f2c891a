use sea_orm::DatabaseConnection;

use crate::server::{
    data::hall::HallRepository,
    error::AppError,
    hypermedia::page::{Page, PageRequest},
    model::hall::{Hall, HallParams},
    service::conflict_on_unique,
};

pub struct HallService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HallService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a hall unless one with the same name and address exists
    ///
    /// # Returns
    /// - `Ok(Hall)`: Created hall
    /// - `Err(AppError::Conflict)`: Identical hall already exists
    pub async fn create(&self, params: HallParams) -> Result<Hall, AppError> {
        let repo = HallRepository::new(self.db);

        let conflict = already_exists(&params);
        if repo.exists(&params.name, &params.address).await? {
            return Err(AppError::Conflict(conflict));
        }

        let hall = repo
            .create(params)
            .await
            .map_err(|e| conflict_on_unique(e, conflict))?;
        tracing::info!("Created hall {:?} ({})", hall.id, hall.name);

        Ok(hall)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Hall, AppError> {
        HallRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(&self, request: &PageRequest) -> Result<Page<Hall>, AppError> {
        let (halls, total) = HallRepository::new(self.db).get_paginated(request).await?;

        let page = Page::new(halls, request.page, request.size, total)?;

        Ok(page.with_sort(request.sort.clone()))
    }

    pub async fn get_all(&self) -> Result<Vec<Hall>, AppError> {
        Ok(HallRepository::new(self.db).get_all().await?)
    }

    /// Updates a hall's name and address
    ///
    /// An update repeating the stored values returns the stored hall without writing.
    ///
    /// # Returns
    /// - `Ok(Hall)`: Updated or unchanged hall
    /// - `Err(AppError::NotFound)`: No hall with this ID
    /// - `Err(AppError::Conflict)`: Another hall already has these values
    pub async fn update(&self, id: i32, params: HallParams) -> Result<Hall, AppError> {
        let repo = HallRepository::new(self.db);
        let hall = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if hall.matches(&params) {
            tracing::debug!("Hall {} unchanged, skipping update", id);
            return Ok(hall);
        }

        let conflict = already_exists(&params);
        if repo.exists(&params.name, &params.address).await? {
            return Err(AppError::Conflict(conflict));
        }

        let updated = repo
            .update(id, params)
            .await
            .map_err(|e| conflict_on_unique(e, conflict))?;
        tracing::info!("Updated hall {}", id);

        Ok(updated)
    }

    /// Deletes a hall together with the training sessions held in it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let rows = HallRepository::new(self.db).delete(id).await?;
        if rows == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Deleted hall {}", id);

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Hall not found with id: {}", id))
}

fn already_exists(params: &HallParams) -> String {
    format!(
        "Hall already exists with name {} at {}, {} {}, {}",
        params.name,
        params.address.street,
        params.address.postal_code,
        params.address.city,
        params.address.country
    )
}
