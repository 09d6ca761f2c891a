use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{api, coach, hall, role_coach, team, training_session},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "training-service",
        description = "Hypermedia API for halls, coaches, teams and their training sessions"
    ),
    modifiers(&BearerAuth)
)]
struct ApiDoc;

/// Registers the `bearer` scheme referenced by mutating endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

pub fn router() -> Router<AppState> {
    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(api::index))
        .routes(routes!(coach::create_coach, coach::get_coaches))
        .routes(routes!(coach::get_all_coaches))
        .routes(routes!(coach::get_coach, coach::update_coach, coach::delete_coach))
        .routes(routes!(hall::create_hall, hall::get_halls))
        .routes(routes!(hall::get_all_halls))
        .routes(routes!(hall::get_hall, hall::update_hall, hall::delete_hall))
        .routes(routes!(team::create_team, team::get_teams))
        .routes(routes!(team::get_all_teams))
        .routes(routes!(team::get_team, team::update_team, team::delete_team))
        .routes(routes!(
            team::add_training_session,
            team::get_team_training_sessions
        ))
        .routes(routes!(team::add_role_coach))
        .routes(routes!(team::get_team_role_coaches))
        .routes(routes!(
            training_session::create_training_session,
            training_session::get_training_sessions
        ))
        .routes(routes!(training_session::get_all_training_sessions))
        .routes(routes!(
            training_session::get_training_session,
            training_session::update_training_session,
            training_session::delete_training_session
        ))
        .routes(routes!(role_coach::get_role_coaches))
        .routes(routes!(role_coach::get_all_role_coaches))
        .routes(routes!(
            role_coach::get_role_coach,
            role_coach::delete_role_coach
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
