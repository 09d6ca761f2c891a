use sea_orm::DatabaseConnection;

use crate::server::{
    data::role_coach::RoleCoachRepository,
    error::AppError,
    hypermedia::page::{Page, PageRequest},
    model::role_coach::RoleCoach,
};

/// Read and delete access to coach roles; roles are created through
/// [`TeamService::add_role_coach`](crate::server::service::team::TeamService::add_role_coach).
pub struct RoleCoachService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleCoachService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<RoleCoach, AppError> {
        RoleCoachRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(&self, request: &PageRequest) -> Result<Page<RoleCoach>, AppError> {
        let (roles, total) = RoleCoachRepository::new(self.db)
            .get_paginated(request)
            .await?;

        let page = Page::new(roles, request.page, request.size, total)?;

        Ok(page.with_sort(request.sort.clone()))
    }

    pub async fn get_all(&self) -> Result<Vec<RoleCoach>, AppError> {
        Ok(RoleCoachRepository::new(self.db).get_all().await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let rows = RoleCoachRepository::new(self.db).delete(id).await?;
        if rows == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Deleted role coach {}", id);

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("RoleCoach not found with id: {}", id))
}
