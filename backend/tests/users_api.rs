//! End-to-end behaviour of the users API over the in-memory store.
//!
//! These tests drive the public router through `actix_web::test` so request
//! parsing, the trace middleware, error mapping, and the directory service
//! are exercised together.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::{Value, json};
use user_directory::Trace;
use user_directory::domain::{TRACE_ID_HEADER, UserDirectoryService};
use user_directory::inbound::http::state::HttpState;
use user_directory::inbound::http::users::configure;
use user_directory::outbound::memory::InMemoryUserRepository;

fn fresh_state() -> web::Data<HttpState> {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = Arc::new(UserDirectoryService::new(repository));
    web::Data::new(HttpState::from_service(service))
}

async fn call<S>(app: &S, request: test::TestRequest) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    assert!(
        response.headers().contains_key(TRACE_ID_HEADER),
        "every response carries a trace id"
    );
    let body = test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("response body is JSON")
    };
    (status, value)
}

#[rstest]
#[actix_web::test]
async fn full_user_lifecycle() {
    let app = test::init_service(
        App::new()
            .app_data(fresh_state())
            .wrap(Trace)
            .configure(configure),
    )
    .await;

    let (status, alice) = call(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Alice", "email": "a@x.com", "age": 30 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = alice["id"].as_str().expect("generated id").to_owned();

    let (status, listed) = call(&app, test::TestRequest::get().uri("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([alice]));

    let (status, rejected) = call(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Bob", "email": "a@x.com", "age": 25 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected["message"], "Email already registered.");

    let (status, updated) = call(
        &app,
        test::TestRequest::put()
            .uri(&format!("/users/{id}"))
            .set_json(json!({ "name": "Alice2", "email": "a2@x.com", "age": 31 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({ "id": id, "name": "Alice2", "email": "a2@x.com", "age": 31 })
    );

    let (status, fetched) = call(&app, test::TestRequest::get().uri(&format!("/users/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, updated);

    let (status, bob) = call(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Bob", "email": "a@x.com", "age": 25 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(
        &app,
        test::TestRequest::delete().uri(&format!("/users/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, missing) = call(&app, test::TestRequest::get().uri(&format!("/users/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["message"], format!("User with ID {id} not found."));

    let (_, listed) = call(&app, test::TestRequest::get().uri("/users")).await;
    assert_eq!(listed, json!([bob]));
}

#[rstest]
#[actix_web::test]
async fn freed_email_can_be_registered_again() {
    let app = test::init_service(
        App::new()
            .app_data(fresh_state())
            .wrap(Trace)
            .configure(configure),
    )
    .await;
    let body = json!({ "name": "Alice", "email": "a@x.com", "age": 30 });

    let (_, alice) = call(&app, test::TestRequest::post().uri("/users").set_json(&body)).await;
    let id = alice["id"].as_str().expect("generated id").to_owned();
    call(&app, test::TestRequest::delete().uri(&format!("/users/{id}"))).await;

    let (status, again) = call(&app, test::TestRequest::post().uri("/users").set_json(&body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(again["id"], alice["id"]);
}

#[rstest]
#[actix_web::test]
async fn keeping_own_email_on_update_is_allowed() {
    let app = test::init_service(
        App::new()
            .app_data(fresh_state())
            .wrap(Trace)
            .configure(configure),
    )
    .await;

    let (_, alice) = call(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Alice", "email": "a@x.com", "age": 30 })),
    )
    .await;
    let id = alice["id"].as_str().expect("generated id").to_owned();

    let (status, renamed) = call(
        &app,
        test::TestRequest::put()
            .uri(&format!("/users/{id}"))
            .set_json(json!({ "name": "Alicia", "email": "a@x.com", "age": 30 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "Alicia");
}
