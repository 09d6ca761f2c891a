use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotDto {
    /// `MONDAY` through `SUNDAY`
    pub day_of_week: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionDto {
    pub id: Option<i32>,
    pub time_slot: TimeSlotDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionRequestDto {
    pub time_slot: TimeSlotDto,
}

/// Body of `POST /api/training-sessions`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrainingSessionDto {
    pub team_id: i32,
    pub hall_id: i32,
    pub time_slot: TimeSlotDto,
}

/// Body of `PUT /api/training-sessions/{id}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainingSessionDto {
    pub hall_id: i32,
    pub time_slot: TimeSlotDto,
}
