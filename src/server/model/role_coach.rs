//! Coach role within a team.

use sea_orm::DbErr;

use crate::{
    model::{role_coach::RoleCoachDto, team::AddRoleCoachDto},
    server::{
        error::AppError,
        model::{coach::Coach, validation::Validator},
    },
};

/// Declared constraints of the add-coach-to-team request fields.
pub mod fields {
    use crate::server::hypermedia::affordance::FieldDescriptor;

    use super::Role;

    pub const COACH_ID: FieldDescriptor = FieldDescriptor::number("coachId").required().min(1);
    pub const ROLE: FieldDescriptor = FieldDescriptor::select("role", Role::OPTIONS).required();

    pub const ADD_TO_TEAM: &[FieldDescriptor] = &[COACH_ID, ROLE];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Main,
    Assistant,
    SupportStaff,
}

impl Role {
    pub const OPTIONS: &'static [&'static str] = &["MAIN", "ASSISTANT", "SUPPORT_STAFF"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "MAIN",
            Self::Assistant => "ASSISTANT",
            Self::SupportStaff => "SUPPORT_STAFF",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MAIN" => Some(Self::Main),
            "ASSISTANT" => Some(Self::Assistant),
            "SUPPORT_STAFF" => Some(Self::SupportStaff),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleCoach {
    /// `None` until persisted.
    pub id: Option<i32>,
    pub role: Role,
    pub team_id: i32,
    pub coach: Coach,
}

impl RoleCoach {
    /// # Returns
    /// - `Ok(RoleCoach)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known value
    pub fn from_entity(
        entity: entity::role_coach::Model,
        coach: entity::coach::Model,
    ) -> Result<Self, DbErr> {
        let role = Role::parse(&entity.role)
            .ok_or_else(|| DbErr::Custom(format!("Unknown coach role: {}", entity.role)))?;

        Ok(Self {
            id: Some(entity.id),
            role,
            team_id: entity.team_id,
            coach: Coach::from_entity(coach),
        })
    }

    pub fn to_dto(&self) -> RoleCoachDto {
        RoleCoachDto {
            id: self.id,
            role: self.role.as_str().to_string(),
        }
    }
}

/// Validated input of adding a coach to a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCoachParams {
    pub team_id: i32,
    pub coach_id: i32,
    pub role: Role,
}

impl RoleCoachParams {
    pub fn from_dto(team_id: i32, dto: AddRoleCoachDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        validator
            .number(&fields::COACH_ID, i64::from(dto.coach_id))
            .text(&fields::ROLE, &dto.role)?;
        validator.finish()?;

        let role = Role::parse(&dto.role)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown role: {}", dto.role)))?;

        Ok(Self {
            team_id,
            coach_id: dto.coach_id,
            role,
        })
    }
}
