use serde_json::Value;
use test_utils::fixture;

use crate::server::{
    assembler::{Assembler, AssemblyContext},
    error::assembly::AssemblyError,
    hypermedia::{
        capability::CapabilitySet,
        link::{LinkBuilder, SELF_REL},
        page::{Page, PageRequest},
        representation::{EntityModel, Members},
        resource::ResourceType,
    },
    model::{
        coach::Coach, hall::Hall, role_coach::RoleCoach, team::Team,
        training_session::TrainingSession,
    },
};

mod role_coach;
mod team;

const BASE_URL: &str = "http://localhost:8080";

fn link_builder() -> LinkBuilder {
    LinkBuilder::new(BASE_URL)
}

fn hall(id: i32, name: &str) -> Hall {
    Hall::from_entity(fixture::hall::entity_builder().id(id).name(name).build())
}

fn coach(id: i32) -> Coach {
    Coach::from_entity(
        fixture::coach::entity_builder()
            .id(id)
            .email(format!("coach{}@example.com", id))
            .build(),
    )
}

fn training_session(id: i32, team_id: i32, hall_id: i32) -> TrainingSession {
    TrainingSession::from_entity(
        fixture::training_session::entity_builder()
            .id(id)
            .team_id(team_id)
            .hall_id(hall_id)
            .build(),
        fixture::hall::entity_builder().id(hall_id).build(),
    )
    .unwrap()
}

fn role_coach(id: i32, team_id: i32, coach_id: i32) -> RoleCoach {
    RoleCoach::from_entity(
        fixture::role_coach::entity_builder()
            .id(id)
            .team_id(team_id)
            .coach_id(coach_id)
            .build(),
        fixture::coach::entity_builder().id(coach_id).build(),
    )
    .unwrap()
}

fn team(id: i32, sessions: Vec<TrainingSession>, role_coaches: Vec<RoleCoach>) -> Team {
    Team::from_entity(
        fixture::team::entity_builder().id(id).build(),
        sessions,
        role_coaches,
    )
    .unwrap()
}

/// Affordance names reachable from a representation's links, in link order.
fn affordance_names<T>(model: &EntityModel<T>) -> Vec<&'static str> {
    model.affordances().map(|affordance| affordance.name).collect()
}

fn self_affordance_names<T>(model: &EntityModel<T>) -> Vec<&'static str> {
    model
        .links
        .get(SELF_REL)
        .map(|link| link.affordances.iter().map(|a| a.name).collect())
        .unwrap_or_default()
}

fn page_of<T>(items: Vec<T>, number: u64, size: u64) -> Page<T> {
    crate::server::hypermedia::page::paginate(items, &PageRequest::new(number, size)).unwrap()
}

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}
