use chrono::NaiveTime;

use crate::server::{
    data::training_session::TrainingSessionRepository,
    hypermedia::page::PageRequest,
    model::training_session::{
        CreateTrainingSessionParams, DayOfWeek, TimeSlot, UpdateTrainingSessionParams,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_team_ids;
mod update;

fn slot(day_of_week: DayOfWeek, start: (u32, u32), end: (u32, u32)) -> TimeSlot {
    TimeSlot {
        day_of_week,
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
    }
}
