use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::{coach::CoachRepository, sort::parse_sort},
    hypermedia::page::PageRequest,
    model::role_coach::{RoleCoach, RoleCoachParams},
};

pub struct RoleCoachRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleCoachRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Binds an existing coach to an existing team with a role
    pub async fn create(&self, params: RoleCoachParams) -> Result<RoleCoach, DbErr> {
        let entity = entity::role_coach::ActiveModel {
            role: ActiveValue::Set(params.role.as_str().to_string()),
            coach_id: ActiveValue::Set(params.coach_id),
            team_id: ActiveValue::Set(params.team_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut created = self.with_coaches(vec![entity]).await?;
        created
            .pop()
            .ok_or(DbErr::RecordNotFound("Role coach not found".to_string()))
    }

    /// Finds a role coach by ID together with its coach
    pub async fn find_by_id(&self, id: i32) -> Result<Option<RoleCoach>, DbErr> {
        let result = entity::prelude::RoleCoach::find_by_id(id)
            .find_also_related(entity::prelude::Coach)
            .one(self.db)
            .await?;

        match result {
            Some((role, Some(coach))) => Ok(Some(RoleCoach::from_entity(role, coach)?)),
            Some((role, None)) => Err(missing_coach(&role)),
            None => Ok(None),
        }
    }

    /// Gets one page of role coaches
    pub async fn get_paginated(
        &self,
        request: &PageRequest,
    ) -> Result<(Vec<RoleCoach>, u64), DbErr> {
        let mut query = entity::prelude::RoleCoach::find();
        if let Some((field, order)) = parse_sort(request.sort.as_deref()) {
            if let Some(column) = sort_column(field) {
                query = query.order_by(column, order);
            }
        }

        let paginator = query
            .order_by_asc(entity::role_coach::Column::Id)
            .paginate(self.db, request.size);

        let total = paginator.num_items().await?;
        let roles = paginator.fetch_page(request.page).await?;

        Ok((self.with_coaches(roles).await?, total))
    }

    /// Gets every role coach ordered by ID
    pub async fn get_all(&self) -> Result<Vec<RoleCoach>, DbErr> {
        let roles = entity::prelude::RoleCoach::find()
            .order_by_asc(entity::role_coach::Column::Id)
            .all(self.db)
            .await?;

        self.with_coaches(roles).await
    }

    /// Gets the role coaches of several teams in one query, ordered by ID
    pub async fn get_by_team_ids(&self, team_ids: Vec<i32>) -> Result<Vec<RoleCoach>, DbErr> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        let roles = entity::prelude::RoleCoach::find()
            .filter(entity::role_coach::Column::TeamId.is_in(team_ids))
            .order_by_asc(entity::role_coach::Column::Id)
            .all(self.db)
            .await?;

        self.with_coaches(roles).await
    }

    /// Deletes a role coach, leaving the coach and team untouched
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RoleCoach::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Attaches coaches to roles, loading all referenced coaches in one query
    async fn with_coaches(
        &self,
        roles: Vec<entity::role_coach::Model>,
    ) -> Result<Vec<RoleCoach>, DbErr> {
        let mut coach_ids: Vec<i32> = roles.iter().map(|r| r.coach_id).collect();
        coach_ids.sort_unstable();
        coach_ids.dedup();

        let coaches: HashMap<i32, entity::coach::Model> = CoachRepository::new(self.db)
            .get_by_ids(coach_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        roles
            .into_iter()
            .map(|role| {
                let coach = coaches
                    .get(&role.coach_id)
                    .cloned()
                    .ok_or_else(|| missing_coach(&role))?;
                RoleCoach::from_entity(role, coach)
            })
            .collect()
    }
}

fn missing_coach(role: &entity::role_coach::Model) -> DbErr {
    DbErr::RecordNotFound(format!(
        "Coach with id {} of role coach {} not found",
        role.coach_id, role.id
    ))
}

fn sort_column(field: &str) -> Option<entity::role_coach::Column> {
    use entity::role_coach::Column;

    match field {
        "id" => Some(Column::Id),
        "role" => Some(Column::Role),
        _ => None,
    }
}
