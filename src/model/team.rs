use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::training_session::TrainingSessionRequestDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: Option<i32>,
    /// One of `F`, `M`, `N`
    pub gender: String,
    /// One of `U11`, `U13`, `U15`, `U18`, `SENIOR`, `EDH`
    pub category: String,
    pub team_number: i32,
}

/// Body of team create and update requests.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequestDto {
    pub gender: String,
    pub category: String,
    pub team_number: i32,
}

/// Body of `POST /api/teams/{id}/training-sessions`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTrainingSessionDto {
    pub hall_id: i32,
    #[serde(rename = "trainingSessionDTORequest")]
    pub training_session: TrainingSessionRequestDto,
}

/// Body of `POST /api/teams/{id}/coach`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddRoleCoachDto {
    pub coach_id: i32,
    /// One of `MAIN`, `ASSISTANT`, `SUPPORT_STAFF`
    pub role: String,
}
