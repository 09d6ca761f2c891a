//! Role coach factory for binding an existing coach to an existing team.

use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct RoleCoachFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::role_coach::Model,
}

impl<'a> RoleCoachFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, coach_id: i32, team_id: i32) -> Self {
        let entity = fixture::role_coach::entity_builder()
            .coach_id(coach_id)
            .team_id(team_id)
            .build();

        Self { db, entity }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.entity.role = role.into();
        self
    }

    pub async fn build(self) -> Result<entity::role_coach::Model, DbErr> {
        entity::role_coach::ActiveModel {
            id: ActiveValue::NotSet,
            role: ActiveValue::Set(self.entity.role),
            coach_id: ActiveValue::Set(self.entity.coach_id),
            team_id: ActiveValue::Set(self.entity.team_id),
        }
        .insert(self.db)
        .await
    }
}

/// Binds `coach_id` to `team_id` with the `MAIN` role.
pub async fn create_role_coach(
    db: &DatabaseConnection,
    coach_id: i32,
    team_id: i32,
) -> Result<entity::role_coach::Model, DbErr> {
    RoleCoachFactory::new(db, coach_id, team_id).build().await
}
