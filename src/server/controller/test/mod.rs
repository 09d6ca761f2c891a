use axum::{
    body::to_bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        hall::{AddressDto, HallRequestDto},
        team::{AddRoleCoachDto, AddTrainingSessionDto},
        training_session::{TimeSlotDto, TrainingSessionRequestDto},
    },
    server::{
        controller::PageParams,
        hypermedia::representation::HAL_FORMS_MEDIA_TYPE,
        middleware::auth::Caller,
        state::AppState,
    },
};

mod api;
mod hall;

const BASE_URL: &str = "http://localhost:8080";
const TOKEN: &str = "admin-token";

fn state(db: &DatabaseConnection) -> AppState {
    AppState::new(db.clone(), BASE_URL, TOKEN.to_string())
}

fn admin() -> Caller {
    Caller::resolve(Some("Bearer admin-token"), TOKEN)
}

fn stranger() -> Caller {
    Caller::resolve(Some("Bearer not-the-admin"), TOKEN)
}

fn page(page: u64, size: u64) -> Query<PageParams> {
    Query(PageParams {
        page,
        size,
        sort: None,
    })
}

fn hall_request(name: &str) -> HallRequestDto {
    HallRequestDto {
        name: name.to_string(),
        address: AddressDto {
            street: "3 Arena Avenue".to_string(),
            city: "Strasbourg".to_string(),
            postal_code: "67000".to_string(),
            country: "France".to_string(),
        },
    }
}

/// Reads a HAL-FORMS response, checking its media type.
async fn hal_json(response: Response) -> Value {
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        HAL_FORMS_MEDIA_TYPE
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn template_names(json: &Value) -> Vec<String> {
    json.get("_templates")
        .and_then(Value::as_object)
        .map(|templates| templates.keys().cloned().collect())
        .unwrap_or_default()
}
