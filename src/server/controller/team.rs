use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        role_coach::RoleCoachDto,
        team::{AddRoleCoachDto, AddTrainingSessionDto, TeamDto, TeamRequestDto},
        training_session::TrainingSessionDto,
    },
    server::{
        assembler::{
            role_coach::RoleCoachAssembler, team::TeamAssembler,
            training_session::TrainingSessionAssembler, Assembler, AssemblyContext,
        },
        controller::{HalForms, PageParams},
        error::AppError,
        middleware::auth::{AuthGuard, Caller, Permission},
        model::{
            role_coach::RoleCoachParams, team::TeamParams,
            training_session::CreateTrainingSessionParams,
        },
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Create a new team.
///
/// The team starts without training sessions or coaches; both are added through the
/// team's sub-resources.
///
/// # Access Control
/// - `Admin` - Only admins can create teams
///
/// # Returns
/// - `201 Created` - Team representation with its affordances
/// - `400 Bad Request` - Invalid team data
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Token is not the admin token
/// - `409 Conflict` - Same gender, category and team number already exist
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = TeamRequestDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully created team", body = TeamDto, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Team already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    caller: Caller,
    Json(payload): Json<TeamRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    let params = TeamParams::from_dto(payload)?;
    let team = TeamService::new(&state.db).create(params).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = TeamAssembler::new(ctx).to_model(&team)?;

    Ok((StatusCode::CREATED, HalForms(model)))
}

/// Get one page of teams with their sessions and coaches embedded.
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Successfully retrieved teams", body = Vec<TeamDto>, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid page request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let request = params.into_request()?;
    let page = TeamService::new(&state.db).get_paginated(&request).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = TeamAssembler::new(ctx).to_paged_model(&page)?;

    Ok(HalForms(model))
}

#[utoipa::path(
    get,
    path = "/api/teams/all",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved teams", body = Vec<TeamDto>, content_type = "application/prs.hal-forms+json"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_teams(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).get_all().await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = TeamAssembler::new(ctx).to_collection_model(&teams)?;

    Ok(HalForms(model))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved team", body = TeamDto, content_type = "application/prs.hal-forms+json"),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get_by_id(id).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = TeamAssembler::new(ctx).to_model(&team)?;

    Ok(HalForms(model))
}

/// Replace a team's gender, category and number.
///
/// Sessions and coach roles are kept.
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    request_body = TeamRequestDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully updated team", body = TeamDto, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
    Json(payload): Json<TeamRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    let params = TeamParams::from_dto(payload)?;
    let team = TeamService::new(&state.db).update(id, params).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = TeamAssembler::new(ctx).to_model(&team)?;

    Ok(HalForms(model))
}

/// Delete a team with its training sessions and coach roles.
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Successfully deleted team"),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    TeamService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Schedule a training session for the team.
///
/// # Access Control
/// - `Admin` - Only admins can schedule sessions
///
/// # Returns
/// - `201 Created` - The created session with its hall embedded
/// - `400 Bad Request` - Invalid time slot
/// - `404 Not Found` - Team or hall does not exist
#[utoipa::path(
    post,
    path = "/api/teams/{id}/training-sessions",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    request_body = AddTrainingSessionDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully added training session", body = TrainingSessionDto, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid training session data", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Team or hall not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_training_session(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
    Json(payload): Json<AddTrainingSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    let params = CreateTrainingSessionParams::from_team_dto(id, payload)?;
    let session = TeamService::new(&state.db)
        .add_training_session(params)
        .await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = TrainingSessionAssembler::new(ctx).to_model(&session)?;

    Ok((StatusCode::CREATED, HalForms(model)))
}

/// Get one page of the team's training sessions.
#[utoipa::path(
    get,
    path = "/api/teams/{id}/training-sessions",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID"),
        PageParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved training sessions", body = Vec<TrainingSessionDto>, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid page request", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_training_sessions(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let request = params.into_request()?;
    let page = TeamService::new(&state.db)
        .get_training_sessions(id, &request)
        .await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = TrainingSessionAssembler::for_team(ctx, id).to_paged_model(&page)?;

    Ok(HalForms(model))
}

/// Give an existing coach a role in the team.
///
/// # Access Control
/// - `Admin` - Only admins can assign coaches
///
/// # Returns
/// - `201 Created` - The created role with its coach embedded
/// - `400 Bad Request` - Unknown role
/// - `404 Not Found` - Team or coach does not exist
#[utoipa::path(
    post,
    path = "/api/teams/{id}/coach",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    request_body = AddRoleCoachDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully added role coach", body = RoleCoachDto, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid role coach data", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Team or coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_role_coach(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
    Json(payload): Json<AddRoleCoachDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    let params = RoleCoachParams::from_dto(id, payload)?;
    let role = TeamService::new(&state.db).add_role_coach(params).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = RoleCoachAssembler::new(ctx).to_model(&role)?;

    Ok((StatusCode::CREATED, HalForms(model)))
}

/// Get one page of the team's coach roles.
#[utoipa::path(
    get,
    path = "/api/teams/{id}/role-coaches",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID"),
        PageParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved role coaches", body = Vec<RoleCoachDto>, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid page request", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_role_coaches(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let request = params.into_request()?;
    let page = TeamService::new(&state.db)
        .get_role_coaches(id, &request)
        .await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = RoleCoachAssembler::for_team(ctx, id).to_paged_model(&page)?;

    Ok(HalForms(model))
}
