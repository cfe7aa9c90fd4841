//! End-to-end lifecycle scenarios against the full HTTP surface with real
//! in-memory adapters: register, login, create, list, like, delete, reset.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use bloglist_backend::inbound::http::blogs::{create_blog, delete_blog, like_blog, list_blogs};
use bloglist_backend::inbound::http::testing::reset;
use bloglist_backend::inbound::http::users::{login, register};
use bloglist_backend::test_support::{memory_states, session_middleware};
use bloglist_backend::Trace;

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let (http_state, testing_state) = memory_states();
    let api = web::scope("/api/v1")
        .wrap(session_middleware())
        .service(register)
        .service(login)
        .service(list_blogs)
        .service(create_blog)
        .service(like_blog)
        .service(delete_blog);
    App::new()
        .app_data(web::Data::new(http_state))
        .app_data(web::Data::new(testing_state))
        .wrap(Trace)
        .service(api)
        .service(web::scope("/api").service(reset))
}

async fn signup_and_login<S, B>(app: &S, name: &str, username: &str, password: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "name": name, "username": username, "password": password }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": username, "password": password }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

async fn list<S, B>(app: &S) -> Vec<Value>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(
        app,
        test::TestRequest::get().uri("/api/v1/blogs").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let value: Value = serde_json::from_slice(&test::read_body(response).await).expect("listing");
    value.as_array().expect("array").clone()
}

async fn create<S, B>(app: &S, cookie: &Cookie<'static>, title: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/blogs")
            .cookie(cookie.clone())
            .set_json(json!({ "title": title, "author": "A", "url": "http://u" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    serde_json::from_slice(&test::read_body(response).await).expect("blog payload")
}

async fn like<S, B>(app: &S, id: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/blogs/{id}/likes"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_slice(&test::read_body(response).await).expect("blog payload")
}

#[actix_web::test]
async fn full_blog_lifecycle() {
    let app = test::init_service(test_app()).await;

    let owner = signup_and_login(&app, "Test User", "testuser", "testpassword").await;

    let blog = create(&app, &owner, "T").await;
    let id = blog["id"].as_str().expect("id string").to_owned();

    let listing = list(&app).await;
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0]["title"], "T");
    assert_eq!(listing[0]["likes"], 0);
    assert_eq!(listing[0]["owner"]["username"], "testuser");

    let updated = like(&app, &id).await;
    assert_eq!(updated["likes"], 1);

    // A different identity must not be able to delete the blog.
    let stranger = signup_and_login(&app, "Other User", "otheruser", "otherpassword").await;
    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/blogs/{id}"))
            .cookie(stranger)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let listing = list(&app).await;
    assert_eq!(listing.len(), 1, "blog must remain listed");
    assert_eq!(listing[0]["likes"], 1, "blog must be unchanged");

    // The owner can.
    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/blogs/{id}"))
            .cookie(owner)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(list(&app).await.is_empty());

    // Gone means gone: a late like observes not_found.
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/blogs/{id}/likes"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn listing_orders_by_likes_descending_regardless_of_creation_order() {
    let app = test::init_service(test_app()).await;
    let cookie = signup_and_login(&app, "Test User", "testuser", "testpassword").await;

    for (title, likes) in [("first", 5_u64), ("second", 10), ("third", 2)] {
        let blog = create(&app, &cookie, title).await;
        let id = blog["id"].as_str().expect("id string");
        for _ in 0..likes {
            like(&app, id).await;
        }
    }

    let listing = list(&app).await;
    let likes: Vec<u64> = listing
        .iter()
        .map(|row| row["likes"].as_u64().expect("likes"))
        .collect();
    assert_eq!(likes, vec![10, 5, 2]);
    let titles: Vec<&str> = listing
        .iter()
        .map(|row| row["title"].as_str().expect("title"))
        .collect();
    assert_eq!(titles, vec!["second", "first", "third"]);
}

#[actix_web::test]
async fn reset_wipes_users_and_blogs() {
    let app = test::init_service(test_app()).await;
    let cookie = signup_and_login(&app, "Test User", "testuser", "testpassword").await;
    create(&app, &cookie, "T").await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/testing/reset")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(list(&app).await.is_empty());

    // The wiped user can no longer authenticate.
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "testuser", "password": "testpassword" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value: Value =
        serde_json::from_slice(&test::read_body(response).await).expect("error payload");
    assert_eq!(value["code"], "invalid_credentials");
}

#[actix_web::test]
async fn every_response_carries_a_trace_id() {
    let app = test::init_service(test_app()).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/blogs").to_request(),
    )
    .await;
    assert!(response.headers().contains_key("trace-id"));
}
