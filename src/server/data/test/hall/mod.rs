use crate::server::{
    data::hall::HallRepository,
    hypermedia::page::PageRequest,
    model::hall::{Address, HallParams},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists;
mod get_paginated;
mod update;

fn params(name: &str) -> HallParams {
    HallParams {
        name: name.to_string(),
        address: Address {
            street: "3 Rue du Stade".to_string(),
            city: "Hoenheim".to_string(),
            postal_code: "67800".to_string(),
            country: "France".to_string(),
        },
    }
}
