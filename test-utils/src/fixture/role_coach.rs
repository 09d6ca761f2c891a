//! Role coach fixtures for creating in-memory test data.

use entity::role_coach;

pub const DEFAULT_ROLE: &str = "MAIN";

/// Creates a role coach entity model linking coach `1` to team `1` as `MAIN`.
pub fn entity() -> role_coach::Model {
    role_coach::Model {
        id: 1,
        role: DEFAULT_ROLE.to_string(),
        coach_id: 1,
        team_id: 1,
    }
}

pub fn entity_builder() -> RoleCoachEntityBuilder {
    RoleCoachEntityBuilder { entity: entity() }
}

pub struct RoleCoachEntityBuilder {
    entity: role_coach::Model,
}

impl RoleCoachEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.entity.role = role.into();
        self
    }

    pub fn coach_id(mut self, coach_id: i32) -> Self {
        self.entity.coach_id = coach_id;
        self
    }

    pub fn team_id(mut self, team_id: i32) -> Self {
        self.entity.team_id = team_id;
        self
    }

    pub fn build(self) -> role_coach::Model {
        self.entity
    }
}
