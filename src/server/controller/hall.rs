use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        hall::{HallDto, HallRequestDto},
    },
    server::{
        assembler::{hall::HallAssembler, Assembler, AssemblyContext},
        controller::{HalForms, PageParams},
        error::AppError,
        middleware::auth::{AuthGuard, Caller, Permission},
        model::hall::HallParams,
        service::hall::HallService,
        state::AppState,
    },
};

/// Tag for grouping hall endpoints in OpenAPI documentation
pub static HALL_TAG: &str = "hall";

/// Create a new hall.
///
/// # Access Control
/// - `Admin` - Only admins can create halls
///
/// # Returns
/// - `201 Created` - Hall representation with its affordances
/// - `400 Bad Request` - Invalid hall data
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Token is not the admin token
/// - `409 Conflict` - A hall with the same name and address exists
#[utoipa::path(
    post,
    path = "/api/halls",
    tag = HALL_TAG,
    request_body = HallRequestDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully created hall", body = HallDto, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid hall data", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Hall already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hall(
    State(state): State<AppState>,
    caller: Caller,
    Json(payload): Json<HallRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    let params = HallParams::from_dto(payload)?;
    let hall = HallService::new(&state.db).create(params).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = HallAssembler::new(ctx).to_model(&hall)?;

    Ok((StatusCode::CREATED, HalForms(model)))
}

/// Get one page of halls.
///
/// # Returns
/// - `200 OK` - Paged representation with navigation links
/// - `400 Bad Request` - Page size is zero
#[utoipa::path(
    get,
    path = "/api/halls",
    tag = HALL_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Successfully retrieved halls", body = Vec<HallDto>, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid page request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_halls(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let request = params.into_request()?;
    let page = HallService::new(&state.db).get_paginated(&request).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = HallAssembler::new(ctx).to_paged_model(&page)?;

    Ok(HalForms(model))
}

/// Get every hall without paging.
#[utoipa::path(
    get,
    path = "/api/halls/all",
    tag = HALL_TAG,
    responses(
        (status = 200, description = "Successfully retrieved halls", body = Vec<HallDto>, content_type = "application/prs.hal-forms+json"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_halls(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let halls = HallService::new(&state.db).get_all().await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = HallAssembler::new(ctx).to_collection_model(&halls)?;

    Ok(HalForms(model))
}

/// Get a hall by ID.
///
/// # Returns
/// - `200 OK` - Hall representation
/// - `404 Not Found` - Hall does not exist
#[utoipa::path(
    get,
    path = "/api/halls/{id}",
    tag = HALL_TAG,
    params(
        ("id" = i32, Path, description = "Hall ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved hall", body = HallDto, content_type = "application/prs.hal-forms+json"),
        (status = 404, description = "Hall not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hall(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let hall = HallService::new(&state.db).get_by_id(id).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = HallAssembler::new(ctx).to_model(&hall)?;

    Ok(HalForms(model))
}

/// Replace a hall's name and address.
///
/// # Access Control
/// - `Admin` - Only admins can update halls
///
/// # Returns
/// - `200 OK` - Updated hall representation
/// - `400 Bad Request` - Invalid hall data
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Token is not the admin token
/// - `404 Not Found` - Hall does not exist
/// - `409 Conflict` - Another hall has the same name and address
#[utoipa::path(
    put,
    path = "/api/halls/{id}",
    tag = HALL_TAG,
    params(
        ("id" = i32, Path, description = "Hall ID")
    ),
    request_body = HallRequestDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully updated hall", body = HallDto, content_type = "application/prs.hal-forms+json"),
        (status = 400, description = "Invalid hall data", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Hall not found", body = ErrorDto),
        (status = 409, description = "Hall already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hall(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
    Json(payload): Json<HallRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    let params = HallParams::from_dto(payload)?;
    let hall = HallService::new(&state.db).update(id, params).await?;

    let ctx = AssemblyContext::new(&state.links, &caller);
    let model = HallAssembler::new(ctx).to_model(&hall)?;

    Ok(HalForms(model))
}

/// Delete a hall and every training session held in it.
///
/// # Access Control
/// - `Admin` - Only admins can delete halls
///
/// # Returns
/// - `204 No Content` - Hall deleted
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Token is not the admin token
/// - `404 Not Found` - Hall does not exist
#[utoipa::path(
    delete,
    path = "/api/halls/{id}",
    tag = HALL_TAG,
    params(
        ("id" = i32, Path, description = "Hall ID")
    ),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Successfully deleted hall"),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Hall not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hall(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&caller).require(&[Permission::Admin])?;

    HallService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
