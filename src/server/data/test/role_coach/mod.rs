use crate::server::{
    data::role_coach::RoleCoachRepository,
    hypermedia::page::PageRequest,
    model::role_coach::{Role, RoleCoachParams},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod crud;
