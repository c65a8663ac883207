//! Tests for the users handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use chrono::{TimeZone, Utc};
use mockall::predicate::eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use crate::domain::fixtures::{ann, ann_details, blue_mug_details, kitchen_details};
use crate::domain::ports::{
    LocationRepository, MockUsersCommand, MockUsersQuery, MugRepository, UserRepository,
};
use crate::domain::{Error, TRACE_ID_HEADER, User};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{send, state_app, store_app, timestamp};
use crate::test_support::{InMemoryStore, in_memory_http_state};

const UNKNOWN_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new())
}

async fn seed_ann(store: &InMemoryStore) -> User {
    UserRepository::insert(store, &ann_details())
        .await
        .expect("seed user")
}

async fn seed_ann_with_mug(store: &InMemoryStore) -> User {
    let user = seed_ann(store).await;
    let location = LocationRepository::insert(store, &kitchen_details())
        .await
        .expect("seed location");
    MugRepository::insert(store, &blue_mug_details(&user, &location))
        .await
        .expect("seed mug");
    user
}

#[rstest]
#[actix_web::test]
async fn create_discards_supplied_id_and_returns_stored_user(store: Arc<InMemoryStore>) {
    let app = store_app(&store).await;

    let created = send(
        &app,
        TestRequest::post().uri("/user").set_json(json!({
            "id": UNKNOWN_ID,
            "firstName": "Ann",
            "lastName": "Lee",
            "email": "ann@x.io",
        })),
    )
    .await;

    assert_eq!(created.status, StatusCode::OK);
    assert_ne!(created.body["id"], json!(UNKNOWN_ID));
    assert_eq!(created.body["firstName"], json!("Ann"));
    assert!(created.body["createdAt"].is_string());
    assert!(created.body["modifiedAt"].is_string());

    let id = created.body["id"].as_str().expect("id").to_owned();
    let fetched = send(&app, TestRequest::get().uri(&format!("/user/{id}"))).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
}

#[rstest]
#[actix_web::test]
async fn unknown_user_is_not_found_with_trace_id(store: Arc<InMemoryStore>) {
    let app = store_app(&store).await;

    let response = send(&app, TestRequest::get().uri(&format!("/user/{UNKNOWN_ID}"))).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], json!("not_found"));
    let header = response.header(TRACE_ID_HEADER).expect("trace id header");
    assert_eq!(response.body["traceId"], json!(header));
}

#[rstest]
#[case("/user/not-a-uuid", "id")]
#[case("/users/not-a-uuid/mugs", "userId")]
#[case("/user/not-a-uuid/with-mugs", "id")]
#[actix_web::test]
async fn malformed_path_ids_are_rejected(
    store: Arc<InMemoryStore>,
    #[case] uri: &str,
    #[case] field: &str,
) {
    let app = store_app(&store).await;

    let response = send(&app, TestRequest::get().uri(uri)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["details"],
        json!({ "field": field, "value": "not-a-uuid", "code": "invalid_uuid" })
    );
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_an_invalid_request(store: Arc<InMemoryStore>) {
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::post()
            .uri("/user")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"firstName\": "),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], json!("invalid_request"));
}

#[rstest]
#[actix_web::test]
async fn missing_last_name_is_rejected(store: Arc<InMemoryStore>) {
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::post()
            .uri("/user")
            .set_json(json!({ "firstName": "Ann" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["field"], json!("lastName"));
}

#[rstest]
#[actix_web::test]
async fn duplicate_email_conflicts(store: Arc<InMemoryStore>) {
    seed_ann(&store).await;
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::post().uri("/user").set_json(json!({
            "firstName": "Other",
            "lastName": "Person",
            "email": "ann@x.io",
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["details"]["field"], json!("email"));
}

#[rstest]
#[actix_web::test]
async fn update_overwrites_every_mutable_field(store: Arc<InMemoryStore>) {
    let ann = seed_ann(&store).await;
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::put().uri("/user").set_json(json!({
            "id": ann.id().to_string(),
            "firstName": "Annie",
            "lastName": "Lee",
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["firstName"], json!("Annie"));
    assert_eq!(response.body["email"], Value::Null);
    assert_eq!(
        response.body["createdAt"],
        json!(ann.audit().created_at().to_rfc3339())
    );
}

#[rstest]
#[actix_web::test]
async fn create_ignores_client_timestamps_and_mugs(store: Arc<InMemoryStore>) {
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::post().uri("/user").set_json(json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "createdAt": "2000-01-01T00:00:00Z",
            "modifiedAt": "2000-01-01T00:00:00Z",
            "mugs": [{ "displayName": "Smuggled Mug" }],
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let epoch = Utc
        .with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
        .single()
        .expect("valid instant");
    assert!(timestamp(&response.body, "createdAt") > epoch);
    assert!(timestamp(&response.body, "modifiedAt") > epoch);
    assert_eq!(store.mug_count(), 0);
}

#[rstest]
#[actix_web::test]
async fn update_keeps_created_at_and_advances_modified_at(store: Arc<InMemoryStore>) {
    let ann = seed_ann(&store).await;
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::put().uri("/user").set_json(json!({
            "id": ann.id().to_string(),
            "firstName": "Ann",
            "lastName": "Lee",
            "email": "ann@x.io",
            "createdAt": "2000-01-01T00:00:00Z",
            "modifiedAt": "2000-01-01T00:00:00Z",
        })),
    )
    .await;
    let fetched = send(
        &app,
        TestRequest::get().uri(&format!("/user/{}", ann.id())),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        timestamp(&response.body, "createdAt"),
        ann.audit().created_at()
    );
    assert!(timestamp(&response.body, "modifiedAt") >= ann.audit().modified_at());
    assert_eq!(fetched.body, response.body);
}

#[rstest]
#[case(json!({ "firstName": "Ann", "lastName": "Lee" }))]
#[case(json!({ "id": UNKNOWN_ID, "firstName": "Ann", "lastName": "Lee" }))]
#[actix_web::test]
async fn update_without_matching_row_is_not_found(
    store: Arc<InMemoryStore>,
    #[case] body: Value,
) {
    let app = store_app(&store).await;

    let response = send(&app, TestRequest::put().uri("/user").set_json(body)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn delete_is_idempotent_and_cascades(store: Arc<InMemoryStore>) {
    let ann = seed_ann_with_mug(&store).await;
    let app = store_app(&store).await;
    let uri = format!("/user/{}", ann.id());

    let first = send(&app, TestRequest::delete().uri(&uri)).await;
    let second = send(&app, TestRequest::delete().uri(&uri)).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, Value::Null);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(store.mug_count(), 0);
}

#[rstest]
#[case("/users/{}/mugs")]
#[case("/user/{}/mugs")]
#[actix_web::test]
async fn lists_mugs_owned_by_user(store: Arc<InMemoryStore>, #[case] pattern: &str) {
    let ann = seed_ann_with_mug(&store).await;
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::get().uri(&pattern.replace("{}", &ann.id().to_string())),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body[0]["displayName"], json!("Blue Mug"));
    assert_eq!(response.body[0]["location"]["name"], json!("Kitchen"));
    assert_eq!(response.body[0]["user"]["firstName"], json!("Ann"));
}

#[rstest]
#[actix_web::test]
async fn unknown_owner_has_no_mugs(store: Arc<InMemoryStore>) {
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::get().uri(&format!("/users/{UNKNOWN_ID}/mugs")),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn with_mugs_embeds_owned_mugs(store: Arc<InMemoryStore>) {
    let ann = seed_ann_with_mug(&store).await;
    let app = store_app(&store).await;

    let response = send(
        &app,
        TestRequest::get().uri(&format!("/user/{}/with-mugs", ann.id())),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], json!(ann.id().to_string()));
    assert_eq!(response.body["mugs"].as_array().map(Vec::len), Some(1));
}

#[rstest]
#[actix_web::test]
async fn empty_store_lists_no_users(store: Arc<InMemoryStore>) {
    let app = store_app(&store).await;

    let response = send(&app, TestRequest::get().uri("/users")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn unavailable_store_maps_to_service_unavailable(store: Arc<InMemoryStore>) {
    store.set_unavailable(true);
    let app = store_app(&store).await;

    let response = send(&app, TestRequest::get().uri("/users")).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["code"], json!("service_unavailable"));
}

#[rstest]
#[actix_web::test]
async fn get_user_forwards_path_id_to_query(store: Arc<InMemoryStore>) {
    let user = ann();
    let id = user.id();
    let mut query = MockUsersQuery::new();
    query
        .expect_get_user()
        .with(eq(id))
        .times(1)
        .return_once(move |_| Ok(user));
    let app = state_app(HttpState {
        users: Arc::new(query),
        ..in_memory_http_state(&store)
    })
    .await;

    let response = send(&app, TestRequest::get().uri(&format!("/user/{id}"))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], json!(id.to_string()));
    assert_eq!(response.body["email"], json!("ann@x.io"));
}

#[rstest]
#[actix_web::test]
async fn update_forwards_body_id_and_details_to_command(store: Arc<InMemoryStore>) {
    let stored = ann();
    let id = stored.id();
    let mut command = MockUsersCommand::new();
    command
        .expect_update_user()
        .withf(move |payload| {
            payload.id == Some(id)
                && payload.details.first_name == "Ann"
                && payload.details.email.as_deref() == Some("ann@x.io")
        })
        .times(1)
        .return_once(move |_| Ok(stored));
    let app = state_app(HttpState {
        users_command: Arc::new(command),
        ..in_memory_http_state(&store)
    })
    .await;

    let response = send(
        &app,
        TestRequest::put().uri("/user").set_json(json!({
            "id": id.to_string(),
            "firstName": "Ann",
            "lastName": "Lee",
            "email": "ann@x.io",
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], json!(id.to_string()));
}

#[rstest]
#[actix_web::test]
async fn delete_forwards_path_id_to_command(store: Arc<InMemoryStore>) {
    let id = ann().id();
    let mut command = MockUsersCommand::new();
    command
        .expect_delete_user()
        .with(eq(id))
        .times(1)
        .return_once(|_| Ok(()));
    let app = state_app(HttpState {
        users_command: Arc::new(command),
        ..in_memory_http_state(&store)
    })
    .await;

    let response = send(&app, TestRequest::delete().uri(&format!("/user/{id}"))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, Value::Null);
}

#[rstest]
#[actix_web::test]
async fn internal_failures_are_redacted(store: Arc<InMemoryStore>) {
    let mut query = MockUsersQuery::new();
    query
        .expect_list_users()
        .times(1)
        .return_once(|| Err(Error::internal("relation \"users\" does not exist")));
    let app = state_app(HttpState {
        users: Arc::new(query),
        ..in_memory_http_state(&store)
    })
    .await;

    let response = send(&app, TestRequest::get().uri("/users")).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["code"], json!("internal_error"));
    assert_eq!(response.body["message"], json!("Internal server error"));
    assert!(response.header(TRACE_ID_HEADER).is_some());
}
