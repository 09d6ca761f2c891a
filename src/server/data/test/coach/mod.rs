use crate::server::{
    data::coach::CoachRepository, hypermedia::page::PageRequest, model::coach::CoachParams,
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod get_by_ids;

fn params(name: &str) -> CoachParams {
    CoachParams {
        name: name.to_string(),
        surname: "Durand".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: String::new(),
    }
}
