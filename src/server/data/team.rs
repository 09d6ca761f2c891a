use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::{
        role_coach::RoleCoachRepository, sort::parse_sort,
        training_session::TrainingSessionRepository,
    },
    hypermedia::page::PageRequest,
    model::{
        role_coach::RoleCoach,
        team::{Team, TeamParams},
        training_session::TrainingSession,
    },
};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new team without sessions or coaches
    pub async fn create(&self, params: TeamParams) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            gender: ActiveValue::Set(params.gender.as_str().to_string()),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            team_number: ActiveValue::Set(params.team_number),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Team::from_entity(entity, Vec::new(), Vec::new())
    }

    /// Finds a team by ID with its training sessions and role coaches
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let Some(entity) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut teams = self.with_children(vec![entity]).await?;

        Ok(teams.pop())
    }

    /// Checks if a team exists without loading its relations
    pub async fn exists_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one page of teams with their relations
    ///
    /// # Returns
    /// - `Ok((teams, total))`: Teams of the page and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(&self, request: &PageRequest) -> Result<(Vec<Team>, u64), DbErr> {
        let mut query = entity::prelude::Team::find();
        if let Some((field, order)) = parse_sort(request.sort.as_deref()) {
            if let Some(column) = sort_column(field) {
                query = query.order_by(column, order);
            }
        }

        let paginator = query
            .order_by_asc(entity::team::Column::Id)
            .paginate(self.db, request.size);

        let total = paginator.num_items().await?;
        let teams = paginator.fetch_page(request.page).await?;

        Ok((self.with_children(teams).await?, total))
    }

    /// Gets every team with its relations, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let teams = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        self.with_children(teams).await
    }

    /// Updates a team's gender, category and number
    pub async fn update(&self, id: i32, params: TeamParams) -> Result<Team, DbErr> {
        let team = entity::prelude::Team::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Team with id {} not found", id)))?;

        let mut active_model: entity::team::ActiveModel = team.into();
        active_model.gender = ActiveValue::Set(params.gender.as_str().to_string());
        active_model.category = ActiveValue::Set(params.category.as_str().to_string());
        active_model.team_number = ActiveValue::Set(params.team_number);

        let updated = active_model.update(self.db).await?;
        let mut teams = self.with_children(vec![updated]).await?;

        teams
            .pop()
            .ok_or(DbErr::RecordNotFound(format!("Team with id {} not found", id)))
    }

    /// Deletes a team and, through the foreign key cascade, its sessions and roles
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Checks if a team with the same gender, category and number exists
    pub async fn exists(&self, params: &TeamParams) -> Result<bool, DbErr> {
        let count = entity::prelude::Team::find()
            .filter(entity::team::Column::Gender.eq(params.gender.as_str()))
            .filter(entity::team::Column::Category.eq(params.category.as_str()))
            .filter(entity::team::Column::TeamNumber.eq(params.team_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Attaches sessions and roles to teams with one query per relation
    async fn with_children(&self, teams: Vec<entity::team::Model>) -> Result<Vec<Team>, DbErr> {
        let team_ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

        let mut sessions: HashMap<i32, Vec<TrainingSession>> = HashMap::new();
        for session in TrainingSessionRepository::new(self.db)
            .get_by_team_ids(team_ids.clone())
            .await?
        {
            sessions.entry(session.team_id).or_default().push(session);
        }

        let mut roles: HashMap<i32, Vec<RoleCoach>> = HashMap::new();
        for role in RoleCoachRepository::new(self.db)
            .get_by_team_ids(team_ids)
            .await?
        {
            roles.entry(role.team_id).or_default().push(role);
        }

        teams
            .into_iter()
            .map(|team| {
                let team_sessions = sessions.remove(&team.id).unwrap_or_default();
                let team_roles = roles.remove(&team.id).unwrap_or_default();
                Team::from_entity(team, team_sessions, team_roles)
            })
            .collect()
    }
}

fn sort_column(field: &str) -> Option<entity::team::Column> {
    use entity::team::Column;

    match field {
        "id" => Some(Column::Id),
        "gender" => Some(Column::Gender),
        "category" => Some(Column::Category),
        "teamNumber" => Some(Column::TeamNumber),
        _ => None,
    }
}
