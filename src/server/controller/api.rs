use axum::{extract::State, response::IntoResponse};

use crate::server::{
    controller::HalForms,
    hypermedia::{
        link::{LinkBuilder, Links, SELF_REL},
        representation::RepresentationModel,
        resource::ResourceType,
    },
    state::AppState,
};

/// Tag for grouping the API index in OpenAPI documentation
pub static API_TAG: &str = "api";

pub const API_PATH: &str = "/api";

/// Resource types reachable from the index, in link order.
const INDEXED: [ResourceType; 4] = [
    ResourceType::Team,
    ResourceType::Coach,
    ResourceType::Hall,
    ResourceType::TrainingSession,
];

/// Get the API entry point.
///
/// Lists a paged and a full collection link for every top-level resource type.
#[utoipa::path(
    get,
    path = "/api",
    tag = API_TAG,
    responses(
        (status = 200, description = "API index links", content_type = "application/prs.hal-forms+json")
    ),
)]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    HalForms(index_model(&state.links))
}

pub fn index_model(links: &LinkBuilder) -> RepresentationModel {
    let mut index = Links::new();
    for resource in INDEXED {
        index.push(links.collection_link(resource));
        index.push(links.all_items_link(resource));
    }
    index.push(links.link_to(SELF_REL, API_PATH));

    RepresentationModel { links: index }
}
