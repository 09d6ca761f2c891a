use crate::server::{
    error::AppError,
    hypermedia::page::PageRequest,
    model::{
        coach::CoachParams,
        hall::{Address, HallParams},
        role_coach::{Role, RoleCoachParams},
        team::{Category, Gender, TeamParams},
        training_session::{
            CreateTrainingSessionParams, DayOfWeek, TimeSlot, UpdateTrainingSessionParams,
        },
    },
};
use chrono::NaiveTime;
use test_utils::{builder::TestBuilder, factory};


fn hall_params(name: &str) -> HallParams {
    HallParams {
        name: name.to_string(),
        address: Address {
            street: "5 Stadium Road".to_string(),
            city: "Lyon".to_string(),
            postal_code: "69001".to_string(),
            country: "France".to_string(),
        },
    }
}

fn team_params(team_number: i32) -> TeamParams {
    TeamParams {
        gender: Gender::Mixed,
        category: Category::U13,
        team_number,
    }
}

fn slot(day_of_week: DayOfWeek, start_hour: u32) -> TimeSlot {
    TimeSlot {
        day_of_week,
        start_time: NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(start_hour + 1, 30, 0).unwrap(),
    }
}
