pub use super::coach::Entity as Coach;
pub use super::hall::Entity as Hall;
pub use super::role_coach::Entity as RoleCoach;
pub use super::team::Entity as Team;
pub use super::training_session::Entity as TrainingSession;
