//! Hall domain model and parameters.

use crate::{
    model::hall::{AddressDto, HallDto, HallRequestDto},
    server::{error::AppError, model::validation::Validator},
};

/// Declared constraints of hall request fields.
pub mod fields {
    use crate::server::hypermedia::affordance::FieldDescriptor;

    pub const NAME: FieldDescriptor = FieldDescriptor::text("name").non_blank().max_length(50);
    pub const STREET: FieldDescriptor =
        FieldDescriptor::text("address.street").non_blank().max_length(100);
    pub const CITY: FieldDescriptor =
        FieldDescriptor::text("address.city").non_blank().max_length(50);
    pub const POSTAL_CODE: FieldDescriptor =
        FieldDescriptor::text("address.postalCode").required().pattern(r"\d{5}");
    pub const COUNTRY: FieldDescriptor =
        FieldDescriptor::text("address.country").non_blank().max_length(50);

    pub const ALL: &[FieldDescriptor] = &[NAME, STREET, CITY, POSTAL_CODE, COUNTRY];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    pub fn to_dto(&self) -> AddressDto {
        AddressDto {
            street: self.street.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hall {
    /// `None` until persisted.
    pub id: Option<i32>,
    pub name: String,
    pub address: Address,
}

impl Hall {
    pub fn from_entity(entity: entity::hall::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            address: Address {
                street: entity.street,
                city: entity.city,
                postal_code: entity.postal_code,
                country: entity.country,
            },
        }
    }

    pub fn to_dto(&self) -> HallDto {
        HallDto {
            id: self.id,
            name: self.name.clone(),
            address: self.address.to_dto(),
        }
    }

    pub fn matches(&self, params: &HallParams) -> bool {
        self.name == params.name && self.address == params.address
    }
}

/// Validated input of hall create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct HallParams {
    pub name: String,
    pub address: Address,
}

impl HallParams {
    /// # Returns
    /// - `Ok(HallParams)` - Request satisfies the declared field constraints
    /// - `Err(AppError::BadRequest)` - One or more constraints violated
    pub fn from_dto(dto: HallRequestDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        validator
            .text(&fields::NAME, &dto.name)?
            .text(&fields::STREET, &dto.address.street)?
            .text(&fields::CITY, &dto.address.city)?
            .text(&fields::POSTAL_CODE, &dto.address.postal_code)?
            .text(&fields::COUNTRY, &dto.address.country)?;
        validator.finish()?;

        Ok(Self {
            name: dto.name.trim().to_string(),
            address: Address {
                street: dto.address.street.trim().to_string(),
                city: dto.address.city.trim().to_string(),
                postal_code: dto.address.postal_code,
                country: dto.address.country.trim().to_string(),
            },
        })
    }
}
