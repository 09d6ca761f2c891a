mod coach;
mod hall;
mod role_coach;
mod team;
mod training_session;
