//! Team fixtures for creating in-memory test data.

use entity::team;

pub const DEFAULT_GENDER: &str = "F";
pub const DEFAULT_CATEGORY: &str = "U15";
pub const DEFAULT_TEAM_NUMBER: i32 = 1;

/// Creates a team entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - gender: `"F"`
/// - category: `"U15"`
/// - team_number: `1`
pub fn entity() -> team::Model {
    team::Model {
        id: 1,
        gender: DEFAULT_GENDER.to_string(),
        category: DEFAULT_CATEGORY.to_string(),
        team_number: DEFAULT_TEAM_NUMBER,
    }
}

pub fn entity_builder() -> TeamEntityBuilder {
    TeamEntityBuilder { entity: entity() }
}

pub struct TeamEntityBuilder {
    entity: team::Model,
}

impl TeamEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.entity.gender = gender.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.entity.category = category.into();
        self
    }

    pub fn team_number(mut self, team_number: i32) -> Self {
        self.entity.team_number = team_number;
        self
    }

    pub fn build(self) -> team::Model {
        self.entity
    }
}
