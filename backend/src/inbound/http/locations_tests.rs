//! Tests for the locations handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use mockall::predicate::eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use crate::domain::fixtures::{ann_details, blue_mug_details, kitchen, kitchen_details};
use crate::domain::Error;
use crate::domain::ports::{
    LocationRepository, MockLocationsCommand, MockLocationsQuery, MugRepository, UserRepository,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{send, state_app, store_app, timestamp};
use crate::test_support::{InMemoryStore, in_memory_http_state};

const UNKNOWN_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new())
}

#[rstest]
#[actix_web::test]
async fn create_then_list(store: Arc<InMemoryStore>) {
    let app = store_app(&store).await;

    let created = send(
        &app,
        TestRequest::post()
            .uri("/location")
            .set_json(json!({ "name": "Kitchen" })),
    )
    .await;
    let listed = send(&app, TestRequest::get().uri("/locations")).await;

    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["description"], Value::Null);
    assert_eq!(listed.body, json!([created.body]));
}

#[rstest]
#[actix_web::test]
async fn missing_name_is_rejected(store: Arc<InMemoryStore>) {
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::post()
            .uri("/location")
            .set_json(json!({ "description": "nameless" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["field"], json!("name"));
}

#[rstest]
#[actix_web::test]
async fn update_replaces_description(store: Arc<InMemoryStore>) {
    let kitchen = LocationRepository::insert(&*store, &kitchen_details())
        .await
        .expect("seed location");
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::put().uri("/location").set_json(json!({
            "id": kitchen.id().to_string(),
            "name": "Kitchen",
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["description"], Value::Null);
}

#[rstest]
#[case(TestRequest::get().uri(&format!("/location/{UNKNOWN_ID}")))]
#[case(TestRequest::get().uri(&format!("/location/{UNKNOWN_ID}/with-mugs")))]
#[case(TestRequest::put().uri("/location").set_json(json!({ "id": UNKNOWN_ID, "name": "x" })))]
#[actix_web::test]
async fn unknown_location_is_not_found(store: Arc<InMemoryStore>, #[case] request: TestRequest) {
    let app = store_app(&store).await;

    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn with_mugs_lists_stored_mugs(store: Arc<InMemoryStore>) {
    let user = UserRepository::insert(&*store, &ann_details())
        .await
        .expect("seed user");
    let kitchen = LocationRepository::insert(&*store, &kitchen_details())
        .await
        .expect("seed location");
    MugRepository::insert(&*store, &blue_mug_details(&user, &kitchen))
        .await
        .expect("seed mug");
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::get().uri(&format!("/location/{}/with-mugs", kitchen.id())),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], json!("Kitchen"));
    assert_eq!(response.body["mugs"][0]["user"]["lastName"], json!("Lee"));
}

#[rstest]
#[actix_web::test]
async fn delete_cascades_to_stored_mugs(store: Arc<InMemoryStore>) {
    let user = UserRepository::insert(&*store, &ann_details())
        .await
        .expect("seed user");
    let kitchen = LocationRepository::insert(&*store, &kitchen_details())
        .await
        .expect("seed location");
    MugRepository::insert(&*store, &blue_mug_details(&user, &kitchen))
        .await
        .expect("seed mug");
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::delete().uri(&format!("/location/{}", kitchen.id())),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(store.mug_count(), 0);
}

#[rstest]
#[actix_web::test]
async fn malformed_id_is_rejected(store: Arc<InMemoryStore>) {
    let app = store_app(&store).await;

    let response = send(&app, TestRequest::delete().uri("/location/kitchen")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["code"], json!("invalid_uuid"));
}

#[rstest]
#[actix_web::test]
async fn update_ignores_client_timestamps_and_mugs(store: Arc<InMemoryStore>) {
    let kitchen = LocationRepository::insert(&*store, &kitchen_details())
        .await
        .expect("seed location");
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::put().uri("/location").set_json(json!({
            "id": kitchen.id().to_string(),
            "name": "Kitchen",
            "description": "Bottom shelf",
            "createdAt": "2000-01-01T00:00:00Z",
            "modifiedAt": "2000-01-01T00:00:00Z",
            "mugs": [{ "displayName": "Smuggled Mug" }],
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["description"], json!("Bottom shelf"));
    assert_eq!(
        timestamp(&response.body, "createdAt"),
        kitchen.audit().created_at()
    );
    assert!(timestamp(&response.body, "modifiedAt") >= kitchen.audit().modified_at());
    assert_eq!(store.mug_count(), 0);
}

#[rstest]
#[actix_web::test]
async fn unavailable_query_maps_to_service_unavailable(store: Arc<InMemoryStore>) {
    let id = kitchen().id();
    let mut query = MockLocationsQuery::new();
    query
        .expect_get_location_with_mugs()
        .with(eq(id))
        .times(1)
        .return_once(|_| Err(Error::service_unavailable("database offline")));
    let app = state_app(HttpState {
        locations: Arc::new(query),
        ..in_memory_http_state(&store)
    })
    .await;

    let response = send(
        &app,
        TestRequest::get().uri(&format!("/location/{id}/with-mugs")),
    )
    .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["code"], json!("service_unavailable"));
    assert_eq!(response.body["message"], json!("database offline"));
}

#[rstest]
#[actix_web::test]
async fn create_forwards_details_to_command(store: Arc<InMemoryStore>) {
    let stored = kitchen();
    let id = stored.id();
    let mut command = MockLocationsCommand::new();
    command
        .expect_create_location()
        .withf(|payload| {
            payload.details.name == "Kitchen"
                && payload.details.description.as_deref() == Some("Top shelf")
        })
        .times(1)
        .return_once(move |_| Ok(stored));
    let app = state_app(HttpState {
        locations_command: Arc::new(command),
        ..in_memory_http_state(&store)
    })
    .await;

    let response = send(
        &app,
        TestRequest::post().uri("/location").set_json(json!({
            "name": "Kitchen",
            "description": "Top shelf",
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], json!(id.to_string()));
}
