//! Training session factory for creating test training session entities.

use crate::fixture;
use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test training sessions of an existing team and hall.
pub struct TrainingSessionFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::training_session::Model,
}

impl<'a> TrainingSessionFactory<'a> {
    /// Creates a new TrainingSessionFactory with fixture defaults.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `team_id` - Team the session belongs to
    /// - `hall_id` - Hall the session takes place in
    pub fn new(db: &'a DatabaseConnection, team_id: i32, hall_id: i32) -> Self {
        let entity = fixture::training_session::entity_builder()
            .team_id(team_id)
            .hall_id(hall_id)
            .build();

        Self { db, entity }
    }

    pub fn day_of_week(mut self, day_of_week: impl Into<String>) -> Self {
        self.entity.day_of_week = day_of_week.into();
        self
    }

    pub fn start_time(mut self, start_time: NaiveTime) -> Self {
        self.entity.start_time = start_time;
        self
    }

    pub fn end_time(mut self, end_time: NaiveTime) -> Self {
        self.entity.end_time = end_time;
        self
    }

    /// Builds and inserts the training session entity into the database.
    pub async fn build(self) -> Result<entity::training_session::Model, DbErr> {
        entity::training_session::ActiveModel {
            id: ActiveValue::NotSet,
            day_of_week: ActiveValue::Set(self.entity.day_of_week),
            start_time: ActiveValue::Set(self.entity.start_time),
            end_time: ActiveValue::Set(self.entity.end_time),
            hall_id: ActiveValue::Set(self.entity.hall_id),
            team_id: ActiveValue::Set(self.entity.team_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Monday 18:00-19:30 training session.
pub async fn create_training_session(
    db: &DatabaseConnection,
    team_id: i32,
    hall_id: i32,
) -> Result<entity::training_session::Model, DbErr> {
    TrainingSessionFactory::new(db, team_id, hall_id)
        .build()
        .await
}
