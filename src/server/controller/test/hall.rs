use super::*;
use crate::server::controller::hall::{
    create_hall, delete_hall, get_all_halls, get_hall, get_halls,
};

/// Tests listing two halls anonymously.
///
/// Expected: 200 with both halls embedded and no templates anywhere
#[tokio::test]
async fn anonymous_list_has_no_templates() {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_hall(db).await.unwrap();
    factory::create_hall(db).await.unwrap();

    let response = get_all_halls(State(state(db)), Caller::anonymous())
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let json = hal_json(response).await;
    let halls = json["_embedded"]["halls"].as_array().unwrap();

    assert_eq!(halls.len(), 2);
    assert!(template_names(&json).is_empty());
    for hall in halls {
        assert!(template_names(hall).is_empty());
        assert!(hall["_links"]["self"]["href"]
            .as_str()
            .unwrap()
            .starts_with("http://localhost:8080/api/halls/"));
    }
    assert_eq!(
        json["_links"]["self"]["href"],
        "http://localhost:8080/api/halls/all"
    );
}

/// Tests listing two halls as admin.
///
/// Expected: createHall on the wrapper, update and delete on every item
#[tokio::test]
async fn admin_list_has_templates() {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_hall(db).await.unwrap();
    factory::create_hall(db).await.unwrap();

    let response = get_all_halls(State(state(db)), admin())
        .await
        .into_response();
    let json = hal_json(response).await;

    assert_eq!(template_names(&json), vec!["createHall"]);
    for hall in json["_embedded"]["halls"].as_array().unwrap() {
        let names = template_names(hall);
        assert!(names.contains(&"deleteHall".to_string()));
        assert!(names.contains(&"updateHall".to_string()));
    }
}

/// Tests listing halls when none exist.
///
/// Expected: 200 with an empty `halls` array and page metadata of zero
#[tokio::test]
async fn empty_page_renders_marker() {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = get_halls(State(state(db)), Caller::anonymous(), page(0, 20))
        .await
        .into_response();
    let json = hal_json(response).await;

    assert_eq!(json["_embedded"]["halls"], Value::Array(Vec::new()));
    assert_eq!(json["page"]["totalElements"], 0);
    assert_eq!(json["page"]["totalPages"], 0);
}

/// Tests a page request with size zero.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn zero_page_size_is_bad_request() {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = get_halls(State(state(db)), Caller::anonymous(), page(0, 0))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests creating a hall without a token and with a non-admin token.
///
/// Expected: 401 then 403, nothing stored
#[tokio::test]
async fn create_requires_admin() {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let anonymous = create_hall(
        State(state(db)),
        Caller::anonymous(),
        Json(hall_request("Gym A")),
    )
    .await
    .into_response();
    let denied = create_hall(State(state(db)), stranger(), Json(hall_request("Gym A")))
        .await
        .into_response();

    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    let response = get_all_halls(State(state(db)), Caller::anonymous())
        .await
        .into_response();
    let json = hal_json(response).await;
    assert_eq!(json["_embedded"]["halls"], Value::Array(Vec::new()));
}

/// Tests creating a hall as admin, then again with the same values.
///
/// Expected: 201 with the hall content, then 409
#[tokio::test]
async fn create_as_admin() {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = create_hall(State(state(db)), admin(), Json(hall_request("Gym A")))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = hal_json(response).await;
    assert_eq!(json["name"], "Gym A");
    assert_eq!(json["address"]["postalCode"], "67000");
    assert!(json["id"].is_i64());

    let duplicate = create_hall(State(state(db)), admin(), Json(hall_request("Gym A")))
        .await
        .into_response();
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
}

/// Tests creating a hall with an invalid postal code.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn create_validates_body() {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut request = hall_request("Gym A");
    request.address.postal_code = "ABC".to_string();

    let response = create_hall(State(state(db)), admin(), Json(request))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests deleting a hall, then reading it.
///
/// Expected: 204 then 404
#[tokio::test]
async fn delete_then_get_is_not_found() {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hall = factory::create_hall(db).await.unwrap();

    let deleted = delete_hall(State(state(db)), admin(), Path(hall.id))
        .await
        .into_response();
    let missing = get_hall(State(state(db)), Caller::anonymous(), Path(hall.id))
        .await
        .into_response();

    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

/// Tests a page number whose offset cannot be represented.
///
/// Expected: 400 Bad Request rather than a failed request
#[tokio::test]
async fn out_of_range_page_is_bad_request() {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = get_halls(State(state(db)), Caller::anonymous(), page(u64::MAX, 20))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests following the navigation of a sorted page.
///
/// Expected: halls in descending name order and page links repeating the sort
#[tokio::test]
async fn sorted_page_links_keep_sort() {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Alpha", "Bravo", "Charlie"] {
        factory::hall::HallFactory::new(db)
            .name(name)
            .build()
            .await
            .unwrap();
    }

    let query = Query(PageParams {
        page: 0,
        size: 2,
        sort: Some("name,desc".to_string()),
    });
    let response = get_halls(State(state(db)), Caller::anonymous(), query)
        .await
        .into_response();
    let json = hal_json(response).await;

    assert_eq!(json["_embedded"]["halls"][0]["name"], "Charlie");
    assert_eq!(json["_embedded"]["halls"][1]["name"], "Bravo");
    assert_eq!(
        json["_links"]["next"]["href"],
        "http://localhost:8080/api/halls?page=1&size=2&sort=name%2Cdesc"
    );
    assert_eq!(
        json["_links"]["self"]["href"],
        "http://localhost:8080/api/halls?page=0&size=2&sort=name%2Cdesc"
    );
}
