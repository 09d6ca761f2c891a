pub mod prelude;

pub mod coach;
pub mod hall;
pub mod role_coach;
pub mod team;
pub mod training_session;
