//! Training session fixtures for creating in-memory test data.

use chrono::NaiveTime;
use entity::training_session;

pub const DEFAULT_DAY_OF_WEEK: &str = "MONDAY";

/// Default start time, 18:00.
pub fn default_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default()
}

/// Default end time, 19:30.
pub fn default_end_time() -> NaiveTime {
    NaiveTime::from_hms_opt(19, 30, 0).unwrap_or_default()
}

/// Creates a training session entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - day_of_week: `"MONDAY"`
/// - start_time: `18:00`
/// - end_time: `19:30`
/// - hall_id: `1`
/// - team_id: `1`
pub fn entity() -> training_session::Model {
    training_session::Model {
        id: 1,
        day_of_week: DEFAULT_DAY_OF_WEEK.to_string(),
        start_time: default_start_time(),
        end_time: default_end_time(),
        hall_id: 1,
        team_id: 1,
    }
}

pub fn entity_builder() -> TrainingSessionEntityBuilder {
    TrainingSessionEntityBuilder { entity: entity() }
}

pub struct TrainingSessionEntityBuilder {
    entity: training_session::Model,
}

impl TrainingSessionEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
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

    pub fn hall_id(mut self, hall_id: i32) -> Self {
        self.entity.hall_id = hall_id;
        self
    }

    pub fn team_id(mut self, team_id: i32) -> Self {
        self.entity.team_id = team_id;
        self
    }

    pub fn build(self) -> training_session::Model {
        self.entity
    }
}
