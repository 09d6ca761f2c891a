use crate::server::{
    data::team::TeamRepository,
    hypermedia::page::PageRequest,
    model::team::{Category, Gender, TeamParams},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_paginated;

fn params(team_number: i32) -> TeamParams {
    TeamParams {
        gender: Gender::Male,
        category: Category::Senior,
        team_number,
    }
}
