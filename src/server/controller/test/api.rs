use super::*;
use crate::server::controller::api::{index, index_model};

/// Tests the API index.
///
/// Expected: Paged and full collection links for every top-level type, then `self`
#[tokio::test]
async fn index_lists_collections() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let model = index_model(&state(db).links);
    assert_eq!(
        model.links.rels(),
        vec![
            "teams",
            "allTeams",
            "coaches",
            "allCoaches",
            "halls",
            "allHalls",
            "trainingSessions",
            "allTrainingSessions",
            "self",
        ]
    );

    let json = hal_json(index(State(state(db))).await.into_response()).await;
    let links = json["_links"].as_object().unwrap();

    assert_eq!(links["halls"]["href"], "http://localhost:8080/api/halls");
    assert_eq!(links["allHalls"]["href"], "http://localhost:8080/api/halls/all");
    assert_eq!(links["self"]["href"], "http://localhost:8080/api");
    assert!(json.get("_templates").is_none());
}
