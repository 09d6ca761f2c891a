//! Coach domain model and parameters.

use crate::{
    model::coach::{CoachDto, CoachRequestDto},
    server::{error::AppError, model::validation::Validator},
};

/// Declared constraints of coach request fields.
pub mod fields {
    use crate::server::hypermedia::affordance::FieldDescriptor;

    pub const NAME: FieldDescriptor = FieldDescriptor::text("name").non_blank();
    pub const SURNAME: FieldDescriptor = FieldDescriptor::text("surname").non_blank();
    pub const EMAIL: FieldDescriptor = FieldDescriptor::email("email");
    pub const PHONE: FieldDescriptor = FieldDescriptor::text("phone").pattern(r"^$|\+?[0-9]{10,15}");

    pub const ALL: &[FieldDescriptor] = &[NAME, SURNAME, EMAIL, PHONE];
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coach {
    /// `None` until persisted.
    pub id: Option<i32>,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
}

impl Coach {
    pub fn from_entity(entity: entity::coach::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            surname: entity.surname,
            email: entity.email,
            phone: entity.phone,
        }
    }

    pub fn to_dto(&self) -> CoachDto {
        CoachDto {
            id: self.id,
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Whether the stored values already equal the requested ones.
    pub fn matches(&self, params: &CoachParams) -> bool {
        self.name == params.name
            && self.surname == params.surname
            && self.email == params.email
            && self.phone == params.phone
    }
}

/// Validated input of coach create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachParams {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
}

impl CoachParams {
    /// # Returns
    /// - `Ok(CoachParams)` - Request satisfies the declared field constraints
    /// - `Err(AppError::BadRequest)` - One or more constraints violated
    pub fn from_dto(dto: CoachRequestDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        validator
            .text(&fields::NAME, &dto.name)?
            .text(&fields::SURNAME, &dto.surname)?
            .text(&fields::EMAIL, &dto.email)?
            .text(&fields::PHONE, &dto.phone)?;
        validator.finish()?;

        Ok(Self {
            name: dto.name.trim().to_string(),
            surname: dto.surname.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: dto.phone,
        })
    }
}
