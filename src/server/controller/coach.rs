use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        coach::{CoachDto, CoachRequestDto},
    },
    server::{
        assembler::{coach::CoachAssembler, Assembler, AssemblyContext},
        controller::{HalForms, PageParams},
        error::AppError,
        middleware::auth::{AuthGuard, Caller, Permission},
        model::coach::CoachParams,
        service::coach::CoachService,
        state::AppState,
    },
};

/// Tag for grouping coach endpoints in OpenAPI documentation
pub static COACH_TAG: &str = "coach";

/// Create a new coach.
#[utoipa::path(
    post,
    path = "/api/coaches",
    tag = COACH_TAG,
    request_body = CoachRequestDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully created coach", body = CoachDto, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid coach data", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_coach(
    State(state): State<AppState>,
    caller: Caller,
    Json(payload): Json<CoachRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    let params = CoachParams::from_dto(payload)?;
    let coach = CoachService::new(&state.db).create(params).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = CoachAssembler::new(ctx).to_model(&coach)?;

    Ok((StatusCode::CREATED, HalForms(model)))
}

/// Get one page of coaches.
#[utoipa::path(
    get,
    path = "/api/coaches",
    tag = COACH_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Successfully retrieved coaches", body = Vec<CoachDto>, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid page request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coaches(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let request = params.into_request()?;
    let page = CoachService::new(&state.db).get_paginated(&request).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = CoachAssembler::new(ctx).to_paged_model(&page)?;

    Ok(HalForms(model))
}

#[utoipa::path(
    get,
    path = "/api/coaches/all",
    tag = COACH_TAG,
    responses(
        (status = 200, description = "Successfully retrieved coaches", body = Vec<CoachDto>, content_type = "application/prs.hal-forms+json"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_coaches(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let coaches = CoachService::new(&state.db).get_all().await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = CoachAssembler::new(ctx).to_collection_model(&coaches)?;

    Ok(HalForms(model))
}

#[utoipa::path(
    get,
    path = "/api/coaches/{id}",
    tag = COACH_TAG,
    params(
        ("id" = i32, Path, description = "Coach ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved coach", body = CoachDto, content_type = "application/prs.hal-forms+json"),
        (status = 404, description = "Coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coach(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let coach = CoachService::new(&state.db).get_by_id(id).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = CoachAssembler::new(ctx).to_model(&coach)?;

    Ok(HalForms(model))
}

/// Replace a coach's contact details.
#[utoipa::path(
    put,
    path = "/api/coaches/{id}",
    tag = COACH_TAG,
    params(
        ("id" = i32, Path, description = "Coach ID")
    ),
    request_body = CoachRequestDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully updated coach", body = CoachDto, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid coach data", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_coach(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
    Json(payload): Json<CoachRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    let params = CoachParams::from_dto(payload)?;
    let coach = CoachService::new(&state.db).update(id, params).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = CoachAssembler::new(ctx).to_model(&coach)?;

    Ok(HalForms(model))
}

/// Delete a coach along with every role they hold.
#[utoipa::path(
    delete,
    path = "/api/coaches/{id}",
    tag = COACH_TAG,
    params(
        ("id" = i32, Path, description = "Coach ID")
    ),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Successfully deleted coach"),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_coach(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    CoachService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
