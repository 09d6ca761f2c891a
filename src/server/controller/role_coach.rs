use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{api::ErrorDto, role_coach::RoleCoachDto},
    server::{
        assembler::{role_coach::RoleCoachAssembler, Assembler, AssemblyContext},
        controller::{HalForms, PageParams},
        error::AppError,
        middleware::auth::{AuthGuard, Caller, Permission},
        service::role_coach::RoleCoachService,
        state::AppState,
    },
};

/// Tag for grouping role coach endpoints in OpenAPI documentation
pub static ROLE_COACH_TAG: &str = "role_coach";

#[utoipa::path(
    get,
    path = "/api/role-coaches",
    tag = ROLE_COACH_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Successfully retrieved role coaches", body = Vec<RoleCoachDto>, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid page request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_role_coaches(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let request = params.into_request()?;
    let page = RoleCoachService::new(&state.db)
        .get_paginated(&request)
        .await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = RoleCoachAssembler::new(ctx).to_paged_model(&page)?;

    Ok(HalForms(model))
}

#[utoipa::path(
    get,
    path = "/api/role-coaches/all",
    tag = ROLE_COACH_TAG,
    responses(
        (status = 200, description = "Successfully retrieved role coaches", body = Vec<RoleCoachDto>, content_type = "application/prs.hal-forms+json"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_role_coaches(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let roles = RoleCoachService::new(&state.db).get_all().await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = RoleCoachAssembler::new(ctx).to_collection_model(&roles)?;

    Ok(HalForms(model))
}

/// Get a coach role with its coach embedded.
#[utoipa::path(
    get,
    path = "/api/role-coaches/{id}",
    tag = ROLE_COACH_TAG,
    params(
        ("id" = i32, Path, description = "Role coach ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved role coach", body = RoleCoachDto, content_type = "application/prs.hal-forms+json"),
        (status = 404, description = "Role coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_role_coach(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let role = RoleCoachService::new(&state.db).get_by_id(id).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = RoleCoachAssembler::new(ctx).to_model(&role)?;

    Ok(HalForms(model))
}

/// Remove a coach from a team.
///
/// # Access Control
/// - `Admin` - Only admins can remove coach roles
#[utoipa::path(
    delete,
    path = "/api/role-coaches/{id}",
    tag = ROLE_COACH_TAG,
    params(
        ("id" = i32, Path, description = "Role coach ID")
    ),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Successfully deleted role coach"),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Role coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_role_coach(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    RoleCoachService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
