//! Hall fixtures for creating in-memory test data.

use entity::hall;

pub const DEFAULT_NAME: &str = "Main Hall";
pub const DEFAULT_STREET: &str = "1 Court Street";
pub const DEFAULT_CITY: &str = "Springfield";
pub const DEFAULT_POSTAL_CODE: &str = "12345";
pub const DEFAULT_COUNTRY: &str = "France";

/// Creates a hall entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Main Hall"`
/// - street: `"1 Court Street"`
/// - city: `"Springfield"`
/// - postal_code: `"12345"`
/// - country: `"France"`
///
/// # Example
///
/// ```rust,ignore
/// let hall = fixture::hall::entity();
/// assert_eq!(hall.postal_code, "12345");
/// ```
pub fn entity() -> hall::Model {
    hall::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        street: DEFAULT_STREET.to_string(),
        city: DEFAULT_CITY.to_string(),
        postal_code: DEFAULT_POSTAL_CODE.to_string(),
        country: DEFAULT_COUNTRY.to_string(),
    }
}

/// Creates a hall entity builder starting from the defaults of [`entity`].
pub fn entity_builder() -> HallEntityBuilder {
    HallEntityBuilder { entity: entity() }
}

/// Builder for customizing hall entity models.
pub struct HallEntityBuilder {
    entity: hall::Model,
}

impl HallEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.entity.street = street.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.entity.city = city.into();
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.entity.postal_code = postal_code.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.entity.country = country.into();
        self
    }

    pub fn build(self) -> hall::Model {
        self.entity
    }
}
