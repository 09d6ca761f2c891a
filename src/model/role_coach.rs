use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleCoachDto {
    pub id: Option<i32>,
    /// One of `MAIN`, `ASSISTANT`, `SUPPORT_STAFF`
    pub role: String,
}
