use sea_orm::DatabaseConnection;

use crate::server::{
    data::{coach::CoachRepository, role_coach::RoleCoachRepository, team::TeamRepository},
    error::AppError,
    hypermedia::page::{paginate, Page, PageRequest},
    model::{
        role_coach::{RoleCoach, RoleCoachParams},
        team::{Team, TeamParams},
        training_session::{CreateTrainingSessionParams, TrainingSession},
    },
    service::{conflict_on_unique, training_session::TrainingSessionService},
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team unless the gender, category and number combination is taken
    ///
    /// # Returns
    /// - `Ok(Team)`: Created team
    /// - `Err(AppError::Conflict)`: Identical team already exists
    pub async fn create(&self, params: TeamParams) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        let conflict = already_exists(&params);
        if repo.exists(&params).await? {
            return Err(AppError::Conflict(conflict));
        }

        let team = repo
            .create(params)
            .await
            .map_err(|e| conflict_on_unique(e, conflict))?;
        tracing::info!(
            "Created team {:?} ({}/{}/{})",
            team.id,
            team.gender.as_str(),
            team.category.as_str(),
            team.team_number
        );

        Ok(team)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(&self, request: &PageRequest) -> Result<Page<Team>, AppError> {
        let (teams, total) = TeamRepository::new(self.db).get_paginated(request).await?;

        let page = Page::new(teams, request.page, request.size, total)?;

        Ok(page.with_sort(request.sort.clone()))
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_all().await?)
    }

    /// Updates a team, skipping the write when nothing changed
    ///
    /// # Returns
    /// - `Ok(Team)`: Updated or unchanged team
    /// - `Err(AppError::NotFound)`: No team with this ID
    /// - `Err(AppError::Conflict)`: Another team already has these values
    pub async fn update(&self, id: i32, params: TeamParams) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);
        let team = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if team.matches(&params) {
            tracing::debug!("Team {} unchanged, skipping update", id);
            return Ok(team);
        }

        let conflict = already_exists(&params);
        if repo.exists(&params).await? {
            return Err(AppError::Conflict(conflict));
        }

        let updated = repo
            .update(id, params)
            .await
            .map_err(|e| conflict_on_unique(e, conflict))?;
        tracing::info!("Updated team {}", id);

        Ok(updated)
    }

    /// Deletes a team with its training sessions and coach roles
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let rows = TeamRepository::new(self.db).delete(id).await?;
        if rows == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Deleted team {}", id);

        Ok(())
    }

    /// Schedules a new training session for the team
    ///
    /// # Returns
    /// - `Ok(TrainingSession)`: Created session with its hall
    /// - `Err(AppError::NotFound)`: Team or hall does not exist
    pub async fn add_training_session(
        &self,
        params: CreateTrainingSessionParams,
    ) -> Result<TrainingSession, AppError> {
        TrainingSessionService::new(self.db).create(params).await
    }

    /// Gives an existing coach a role in the team
    ///
    /// # Returns
    /// - `Ok(RoleCoach)`: Created role with its coach
    /// - `Err(AppError::NotFound)`: Team or coach does not exist
    pub async fn add_role_coach(&self, params: RoleCoachParams) -> Result<RoleCoach, AppError> {
        if !TeamRepository::new(self.db).exists_by_id(params.team_id).await? {
            return Err(not_found(params.team_id));
        }
        if CoachRepository::new(self.db)
            .find_by_id(params.coach_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Coach not found with id: {}",
                params.coach_id
            )));
        }

        let role = RoleCoachRepository::new(self.db).create(params).await?;
        tracing::info!(
            "Added coach {:?} to team {} as {}",
            role.coach.id,
            role.team_id,
            role.role.as_str()
        );

        Ok(role)
    }

    /// Pages the team's training sessions in memory
    pub async fn get_training_sessions(
        &self,
        team_id: i32,
        request: &PageRequest,
    ) -> Result<Page<TrainingSession>, AppError> {
        let team = self.get_by_id(team_id).await?;

        Ok(paginate(team.training_sessions, request)?)
    }

    /// Pages the team's coach roles in memory
    pub async fn get_role_coaches(
        &self,
        team_id: i32,
        request: &PageRequest,
    ) -> Result<Page<RoleCoach>, AppError> {
        let team = self.get_by_id(team_id).await?;

        Ok(paginate(team.role_coaches, request)?)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Team not found with id: {}", id))
}

fn already_exists(params: &TeamParams) -> String {
    format!(
        "Team already exists with gender {}, category {} and team number {}",
        params.gender.as_str(),
        params.category.as_str(),
        params.team_number
    )
}
