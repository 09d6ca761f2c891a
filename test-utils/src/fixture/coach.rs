//! Coach fixtures for creating in-memory test data.

use entity::coach;

pub const DEFAULT_NAME: &str = "Alex";
pub const DEFAULT_SURNAME: &str = "Martin";
pub const DEFAULT_EMAIL: &str = "alex.martin@example.com";
pub const DEFAULT_PHONE: &str = "+33612345678";

/// Creates a coach entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Alex"`
/// - surname: `"Martin"`
/// - email: `"alex.martin@example.com"`
/// - phone: `"+33612345678"`
pub fn entity() -> coach::Model {
    coach::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        surname: DEFAULT_SURNAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        phone: DEFAULT_PHONE.to_string(),
    }
}

pub fn entity_builder() -> CoachEntityBuilder {
    CoachEntityBuilder { entity: entity() }
}

pub struct CoachEntityBuilder {
    entity: coach::Model,
}

impl CoachEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.entity.surname = surname.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.entity.phone = phone.into();
        self
    }

    pub fn build(self) -> coach::Model {
        self.entity
    }
}
