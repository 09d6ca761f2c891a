use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        training_session::{
            CreateTrainingSessionDto, TrainingSessionDto, UpdateTrainingSessionDto,
        },
    },
    server::{
        assembler::{training_session::TrainingSessionAssembler, Assembler, AssemblyContext},
        controller::{HalForms, PageParams},
        error::AppError,
        middleware::auth::{AuthGuard, Caller, Permission},
        model::training_session::{CreateTrainingSessionParams, UpdateTrainingSessionParams},
        service::training_session::TrainingSessionService,
        state::AppState,
    },
};

/// Tag for grouping training session endpoints in OpenAPI documentation
pub static TRAINING_SESSION_TAG: &str = "training_session";

/// Schedule a training session.
///
/// Both the team and the hall must already exist.
///
/// # Access Control
/// - `Admin` - Only admins can schedule sessions
///
/// # Returns
/// - `201 Created` - Session representation with its hall embedded
/// - `400 Bad Request` - Invalid time slot
/// - `404 Not Found` - Team or hall does not exist
#[utoipa::path(
    post,
    path = "/api/training-sessions",
    tag = TRAINING_SESSION_TAG,
    request_body = CreateTrainingSessionDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully created training session", body = TrainingSessionDto, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid training session data", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Team or hall not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_training_session(
    State(state): State<AppState>,
    caller: Caller,
    Json(payload): Json<CreateTrainingSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    let params = CreateTrainingSessionParams::from_dto(payload)?;
    let session = TrainingSessionService::new(&state.db).create(params).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = TrainingSessionAssembler::new(ctx).to_model(&session)?;

    Ok((StatusCode::CREATED, HalForms(model)))
}

#[utoipa::path(
    get,
    path = "/api/training-sessions",
    tag = TRAINING_SESSION_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Successfully retrieved training sessions", body = Vec<TrainingSessionDto>, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid page request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_training_sessions(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let request = params.into_request()?;
    let page = TrainingSessionService::new(&state.db)
        .get_paginated(&request)
        .await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = TrainingSessionAssembler::new(ctx).to_paged_model(&page)?;

    Ok(HalForms(model))
}

#[utoipa::path(
    get,
    path = "/api/training-sessions/all",
    tag = TRAINING_SESSION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved training sessions", body = Vec<TrainingSessionDto>, content_type = "application/prs.hal-forms+json"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_training_sessions(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let sessions = TrainingSessionService::new(&state.db).get_all().await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = TrainingSessionAssembler::new(ctx).to_collection_model(&sessions)?;

    Ok(HalForms(model))
}

#[utoipa::path(
    get,
    path = "/api/training-sessions/{id}",
    tag = TRAINING_SESSION_TAG,
    params(
        ("id" = i32, Path, description = "Training session ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved training session", body = TrainingSessionDto, content_type = "application/prs.hal-forms+json"),
        (status = 404, description = "Training session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_training_session(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let session = TrainingSessionService::new(&state.db).get_by_id(id).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = TrainingSessionAssembler::new(ctx).to_model(&session)?;

    Ok(HalForms(model))
}

/// Move a training session to another hall or time slot.
///
/// The owning team never changes.
#[utoipa::path(
    put,
    path = "/api/training-sessions/{id}",
    tag = TRAINING_SESSION_TAG,
    params(
        ("id" = i32, Path, description = "Training session ID")
    ),
    request_body = UpdateTrainingSessionDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully updated training session", body = TrainingSessionDto, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid training session data", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Training session or hall not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_training_session(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTrainingSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    let params = UpdateTrainingSessionParams::from_dto(payload)?;
    let session = TrainingSessionService::new(&state.db)
        .update(id, params)
        .await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = TrainingSessionAssembler::new(ctx).to_model(&session)?;

    Ok(HalForms(model))
}

#[utoipa::path(
    delete,
    path = "/api/training-sessions/{id}",
    tag = TRAINING_SESSION_TAG,
    params(
        ("id" = i32, Path, description = "Training session ID")
    ),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Successfully deleted training session"),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Training session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_training_session(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    TrainingSessionService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
