//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db)
///     .gender("M")
///     .category("SENIOR")
///     .team_number(2)
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::team::Model,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with fixture defaults and a unique team number, so
    /// several default teams satisfy the (gender, category, number) unique index.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::team::entity_builder()
            .team_number(id as i32)
            .build();

        Self { db, entity }
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

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            gender: ActiveValue::Set(self.entity.gender),
            category: ActiveValue::Set(self.entity.category),
            team_number: ActiveValue::Set(self.entity.team_number),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}
