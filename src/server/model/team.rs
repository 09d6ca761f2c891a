//! Team domain model and parameters.
//!
//! A team aggregates its training sessions and coach roles; both lists are loaded with
//! the team so representations can embed them without further queries.

use sea_orm::DbErr;

use crate::{
    model::team::{TeamDto, TeamRequestDto},
    server::{
        error::AppError,
        model::{role_coach::RoleCoach, training_session::TrainingSession, validation::Validator},
    },
};

/// Declared constraints of team request fields.
pub mod fields {
    use crate::server::hypermedia::affordance::FieldDescriptor;

    use super::{Category, Gender};

    pub const GENDER: FieldDescriptor =
        FieldDescriptor::select("gender", Gender::OPTIONS).required();
    pub const CATEGORY: FieldDescriptor =
        FieldDescriptor::select("category", Category::OPTIONS).required();
    pub const TEAM_NUMBER: FieldDescriptor =
        FieldDescriptor::range("teamNumber").required().min(1);

    pub const ALL: &[FieldDescriptor] = &[GENDER, CATEGORY, TEAM_NUMBER];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Mixed,
}

impl Gender {
    pub const OPTIONS: &'static [&'static str] = &["F", "M", "N"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "F",
            Self::Male => "M",
            Self::Mixed => "N",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "F" => Some(Self::Female),
            "M" => Some(Self::Male),
            "N" => Some(Self::Mixed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    U11,
    U13,
    U15,
    U18,
    Senior,
    Edh,
}

impl Category {
    pub const OPTIONS: &'static [&'static str] = &["U11", "U13", "U15", "U18", "SENIOR", "EDH"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::U11 => "U11",
            Self::U13 => "U13",
            Self::U15 => "U15",
            Self::U18 => "U18",
            Self::Senior => "SENIOR",
            Self::Edh => "EDH",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "U11" => Some(Self::U11),
            "U13" => Some(Self::U13),
            "U15" => Some(Self::U15),
            "U18" => Some(Self::U18),
            "SENIOR" => Some(Self::Senior),
            "EDH" => Some(Self::Edh),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    /// `None` until persisted.
    pub id: Option<i32>,
    pub gender: Gender,
    pub category: Category,
    pub team_number: i32,
    pub training_sessions: Vec<TrainingSession>,
    pub role_coaches: Vec<RoleCoach>,
}

impl Team {
    /// Converts the entity and its already-converted relations to a domain model.
    ///
    /// # Returns
    /// - `Ok(Team)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored gender or category is not a known value
    pub fn from_entity(
        entity: entity::team::Model,
        training_sessions: Vec<TrainingSession>,
        role_coaches: Vec<RoleCoach>,
    ) -> Result<Self, DbErr> {
        let gender = Gender::parse(&entity.gender)
            .ok_or_else(|| DbErr::Custom(format!("Unknown team gender: {}", entity.gender)))?;
        let category = Category::parse(&entity.category).ok_or_else(|| {
            DbErr::Custom(format!("Unknown team category: {}", entity.category))
        })?;

        Ok(Self {
            id: Some(entity.id),
            gender,
            category,
            team_number: entity.team_number,
            training_sessions,
            role_coaches,
        })
    }

    pub fn to_dto(&self) -> TeamDto {
        TeamDto {
            id: self.id,
            gender: self.gender.as_str().to_string(),
            category: self.category.as_str().to_string(),
            team_number: self.team_number,
        }
    }

    pub fn matches(&self, params: &TeamParams) -> bool {
        self.gender == params.gender
            && self.category == params.category
            && self.team_number == params.team_number
    }
}

/// Validated input of team create and update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamParams {
    pub gender: Gender,
    pub category: Category,
    pub team_number: i32,
}

impl TeamParams {
    /// # Returns
    /// - `Ok(TeamParams)` - Request satisfies the declared field constraints
    /// - `Err(AppError::BadRequest)` - One or more constraints violated
    pub fn from_dto(dto: TeamRequestDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        validator
            .text(&fields::GENDER, &dto.gender)?
            .text(&fields::CATEGORY, &dto.category)?
            .number(&fields::TEAM_NUMBER, i64::from(dto.team_number));
        validator.finish()?;

        match (Gender::parse(&dto.gender), Category::parse(&dto.category)) {
            (Some(gender), Some(category)) => Ok(Self {
                gender,
                category,
                team_number: dto.team_number,
            }),
            _ => Err(AppError::BadRequest("Invalid gender or category".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_published_option() {
        for option in Gender::OPTIONS {
            assert_eq!(Gender::parse(option).map(Gender::as_str), Some(*option));
        }
        for option in Category::OPTIONS {
            assert_eq!(Category::parse(option).map(Category::as_str), Some(*option));
        }
    }

    #[test]
    fn accepts_valid_request() -> Result<(), AppError> {
        let params = TeamParams::from_dto(TeamRequestDto {
            gender: "F".to_string(),
            category: "U15".to_string(),
            team_number: 2,
        })?;

        assert_eq!(params.gender, Gender::Female);
        assert_eq!(params.category, Category::U15);
        assert_eq!(params.team_number, 2);

        Ok(())
    }

    /// Expected: Err(BadRequest) for unknown category and non-positive number
    #[test]
    fn rejects_invalid_request() {
        let result = TeamParams::from_dto(TeamRequestDto {
            gender: "M".to_string(),
            category: "U9".to_string(),
            team_number: 0,
        });

        let Err(AppError::BadRequest(message)) = result else {
            panic!("expected BadRequest");
        };
        assert!(message.contains("category must be one of"));
        assert!(message.contains("teamNumber must be greater than or equal to 1"));
    }

    /// Expected: Err(DbErr::Custom) for a corrupted gender column
    #[test]
    fn rejects_unknown_stored_gender() {
        let entity = entity::team::Model {
            id: 1,
            gender: "X".to_string(),
            category: "U11".to_string(),
            team_number: 1,
        };

        assert!(matches!(
            Team::from_entity(entity, Vec::new(), Vec::new()),
            Err(DbErr::Custom(_))
        ));
    }
}
