//! Training session domain model and parameters.

use chrono::NaiveTime;
use sea_orm::DbErr;

use crate::{
    model::{
        team::AddTrainingSessionDto,
        training_session::{
            CreateTrainingSessionDto, TimeSlotDto, TrainingSessionDto, UpdateTrainingSessionDto,
        },
    },
    server::{
        error::AppError,
        model::{hall::Hall, validation::Validator},
    },
};

/// Declared constraints of training session request fields.
pub mod fields {
    use crate::server::hypermedia::affordance::FieldDescriptor;

    use super::DayOfWeek;

    /// Time slot fields under one JSON prefix.
    pub struct TimeSlotFields {
        pub day_of_week: FieldDescriptor,
        pub start_time: FieldDescriptor,
        pub end_time: FieldDescriptor,
    }

    pub const TEAM_ID: FieldDescriptor = FieldDescriptor::number("teamId").required().min(1);
    pub const HALL_ID: FieldDescriptor = FieldDescriptor::number("hallId").required().min(1);

    pub const TIME_SLOT: TimeSlotFields = TimeSlotFields {
        day_of_week: FieldDescriptor::select("timeSlot.dayOfWeek", DayOfWeek::OPTIONS).required(),
        start_time: FieldDescriptor::time("timeSlot.startTime").required(),
        end_time: FieldDescriptor::time("timeSlot.endTime").required(),
    };

    /// Time slot nested in the team sub-operation body.
    pub const NESTED_TIME_SLOT: TimeSlotFields = TimeSlotFields {
        day_of_week: FieldDescriptor::select(
            "trainingSessionDTORequest.timeSlot.dayOfWeek",
            DayOfWeek::OPTIONS,
        )
        .required(),
        start_time: FieldDescriptor::time("trainingSessionDTORequest.timeSlot.startTime")
            .required(),
        end_time: FieldDescriptor::time("trainingSessionDTORequest.timeSlot.endTime").required(),
    };

    pub const CREATE: &[FieldDescriptor] = &[
        TEAM_ID,
        HALL_ID,
        TIME_SLOT.day_of_week,
        TIME_SLOT.start_time,
        TIME_SLOT.end_time,
    ];

    pub const UPDATE: &[FieldDescriptor] = &[
        HALL_ID,
        TIME_SLOT.day_of_week,
        TIME_SLOT.start_time,
        TIME_SLOT.end_time,
    ];

    pub const ADD_TO_TEAM: &[FieldDescriptor] = &[
        HALL_ID,
        NESTED_TIME_SLOT.day_of_week,
        NESTED_TIME_SLOT.start_time,
        NESTED_TIME_SLOT.end_time,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const OPTIONS: &'static [&'static str] = &[
        "MONDAY",
        "TUESDAY",
        "WEDNESDAY",
        "THURSDAY",
        "FRIDAY",
        "SATURDAY",
        "SUNDAY",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MONDAY" => Some(Self::Monday),
            "TUESDAY" => Some(Self::Tuesday),
            "WEDNESDAY" => Some(Self::Wednesday),
            "THURSDAY" => Some(Self::Thursday),
            "FRIDAY" => Some(Self::Friday),
            "SATURDAY" => Some(Self::Saturday),
            "SUNDAY" => Some(Self::Sunday),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeSlot {
    /// Validates a time slot body, recording violations in `validator`.
    ///
    /// Returns `None` when the day is unknown; the violation is already recorded.
    pub fn from_dto(
        dto: &TimeSlotDto,
        fields: &fields::TimeSlotFields,
        validator: &mut Validator,
    ) -> Result<Option<Self>, AppError> {
        validator.text(&fields.day_of_week, &dto.day_of_week)?;
        if dto.start_time >= dto.end_time {
            validator.reject(format!(
                "{} must be before {}",
                fields.start_time.name, fields.end_time.name
            ));
        }

        Ok(DayOfWeek::parse(&dto.day_of_week).map(|day_of_week| Self {
            day_of_week,
            start_time: dto.start_time,
            end_time: dto.end_time,
        }))
    }

    pub fn to_dto(&self) -> TimeSlotDto {
        TimeSlotDto {
            day_of_week: self.day_of_week.as_str().to_string(),
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSession {
    /// `None` until persisted.
    pub id: Option<i32>,
    pub time_slot: TimeSlot,
    pub team_id: i32,
    pub hall: Hall,
}

impl TrainingSession {
    /// # Returns
    /// - `Ok(TrainingSession)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored day of week is not a known value
    pub fn from_entity(
        entity: entity::training_session::Model,
        hall: entity::hall::Model,
    ) -> Result<Self, DbErr> {
        let day_of_week = DayOfWeek::parse(&entity.day_of_week).ok_or_else(|| {
            DbErr::Custom(format!("Unknown day of week: {}", entity.day_of_week))
        })?;

        Ok(Self {
            id: Some(entity.id),
            time_slot: TimeSlot {
                day_of_week,
                start_time: entity.start_time,
                end_time: entity.end_time,
            },
            team_id: entity.team_id,
            hall: Hall::from_entity(hall),
        })
    }

    pub fn to_dto(&self) -> TrainingSessionDto {
        TrainingSessionDto {
            id: self.id,
            time_slot: self.time_slot.to_dto(),
        }
    }

    pub fn matches(&self, params: &UpdateTrainingSessionParams) -> bool {
        self.hall.id == Some(params.hall_id) && self.time_slot == params.time_slot
    }
}

/// Validated input of training session creation, standalone or through a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateTrainingSessionParams {
    pub team_id: i32,
    pub hall_id: i32,
    pub time_slot: TimeSlot,
}

impl CreateTrainingSessionParams {
    pub fn from_dto(dto: CreateTrainingSessionDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        validator
            .number(&fields::TEAM_ID, i64::from(dto.team_id))
            .number(&fields::HALL_ID, i64::from(dto.hall_id));
        let time_slot = TimeSlot::from_dto(&dto.time_slot, &fields::TIME_SLOT, &mut validator)?;
        validator.finish()?;

        Ok(Self {
            team_id: dto.team_id,
            hall_id: dto.hall_id,
            time_slot: time_slot.ok_or_else(invalid_time_slot)?,
        })
    }

    pub fn from_team_dto(team_id: i32, dto: AddTrainingSessionDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        validator.number(&fields::HALL_ID, i64::from(dto.hall_id));
        let time_slot = TimeSlot::from_dto(
            &dto.training_session.time_slot,
            &fields::NESTED_TIME_SLOT,
            &mut validator,
        )?;
        validator.finish()?;

        Ok(Self {
            team_id,
            hall_id: dto.hall_id,
            time_slot: time_slot.ok_or_else(invalid_time_slot)?,
        })
    }
}

/// Validated input of training session update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateTrainingSessionParams {
    pub hall_id: i32,
    pub time_slot: TimeSlot,
}

impl UpdateTrainingSessionParams {
    pub fn from_dto(dto: UpdateTrainingSessionDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        validator.number(&fields::HALL_ID, i64::from(dto.hall_id));
        let time_slot = TimeSlot::from_dto(&dto.time_slot, &fields::TIME_SLOT, &mut validator)?;
        validator.finish()?;

        Ok(Self {
            hall_id: dto.hall_id,
            time_slot: time_slot.ok_or_else(invalid_time_slot)?,
        })
    }
}

fn invalid_time_slot() -> AppError {
    AppError::BadRequest("Invalid time slot".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::training_session::TrainingSessionRequestDto;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn slot(day: &str, start: NaiveTime, end: NaiveTime) -> TimeSlotDto {
        TimeSlotDto {
            day_of_week: day.to_string(),
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn accepts_valid_creation() -> Result<(), AppError> {
        let params = CreateTrainingSessionParams::from_dto(CreateTrainingSessionDto {
            team_id: 1,
            hall_id: 2,
            time_slot: slot("TUESDAY", time(18, 0), time(19, 30)),
        })?;

        assert_eq!(params.time_slot.day_of_week, DayOfWeek::Tuesday);
        assert_eq!(params.time_slot.end_time, time(19, 30));

        Ok(())
    }

    /// Expected: Err(BadRequest) naming the nested start time field
    #[test]
    fn rejects_start_after_end_in_team_body() {
        let result = CreateTrainingSessionParams::from_team_dto(
            1,
            AddTrainingSessionDto {
                hall_id: 2,
                training_session: TrainingSessionRequestDto {
                    time_slot: slot("MONDAY", time(20, 0), time(18, 0)),
                },
            },
        );

        let Err(AppError::BadRequest(message)) = result else {
            panic!("expected BadRequest");
        };
        assert!(message.contains("trainingSessionDTORequest.timeSlot.startTime must be before"));
    }

    /// Expected: Err(BadRequest) since an empty slot has no duration
    #[test]
    fn rejects_equal_start_and_end() {
        let result = UpdateTrainingSessionParams::from_dto(UpdateTrainingSessionDto {
            hall_id: 1,
            time_slot: slot("MONDAY", time(18, 0), time(18, 0)),
        });

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_unknown_day() {
        let result = UpdateTrainingSessionParams::from_dto(UpdateTrainingSessionDto {
            hall_id: 1,
            time_slot: slot("FUNDAY", time(18, 0), time(19, 0)),
        });

        let Err(AppError::BadRequest(message)) = result else {
            panic!("expected BadRequest");
        };
        assert!(message.contains("timeSlot.dayOfWeek must be one of"));
    }
}
