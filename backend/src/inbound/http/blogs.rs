//! Blog API handlers: create, list, like, delete.
//!
//! ```text
//! GET    /api/v1/blogs
//! POST   /api/v1/blogs {"title":"T","author":"A","url":"U"}
//! POST   /api/v1/blogs/{id}/likes
//! DELETE /api/v1/blogs/{id}
//! ```
//!
//! Create and delete require a session; listing and liking deliberately do
//! not.

use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::ports::BlogView;
use crate::domain::{Blog, BlogDraft, BlogValidationError, Error};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_blog_id, require_field, FieldName};
use crate::inbound::http::ApiResult;

const TITLE_FIELD: FieldName = FieldName::new("title");
const URL_FIELD: FieldName = FieldName::new("url");
const ID_FIELD: FieldName = FieldName::new("id");

/// Creation request body for `POST /api/v1/blogs`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    /// Blog title. Required.
    pub title: Option<String>,
    /// Stated author of the linked post. Optional.
    pub author: Option<String>,
    /// Link to the post. Required.
    pub url: Option<String>,
}

fn parse_create_request(payload: CreateBlogRequest) -> ApiResult<BlogDraft> {
    let title = require_field(payload.title, TITLE_FIELD)?;
    let url = require_field(payload.url, URL_FIELD)?;
    BlogDraft::try_from_parts(&title, payload.author.as_deref(), &url)
        .map_err(map_blog_validation_error)
}

fn map_blog_validation_error(err: BlogValidationError) -> Error {
    let (field, code) = match err {
        BlogValidationError::EmptyTitle => ("title", "empty_title"),
        BlogValidationError::EmptyUrl => ("url", "empty_url"),
        BlogValidationError::InvalidId => ("id", "invalid_id"),
    };
    Error::validation(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

/// List all blogs ordered by likes, most liked first.
#[utoipa::path(
    get,
    path = "/api/v1/blogs",
    responses(
        (status = 200, description = "Blogs ordered by likes descending", body = [BlogView]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["blogs"],
    operation_id = "listBlogs",
    security([])
)]
#[get("/blogs")]
pub async fn list_blogs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BlogView>>> {
    let blogs = state.blog_query.list().await?;
    Ok(web::Json(blogs))
}

/// Create a blog owned by the logged-in user.
#[utoipa::path(
    post,
    path = "/api/v1/blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Blog created", body = Blog),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["blogs"],
    operation_id = "createBlog"
)]
#[post("/blogs")]
pub async fn create_blog(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateBlogRequest>,
) -> ApiResult<HttpResponse> {
    let identity = session.require_identity()?;
    let draft = parse_create_request(payload.into_inner())?;
    let blog = state.blog_command.create(&identity, draft).await?;
    Ok(HttpResponse::Created().json(blog))
}

/// Add one like to a blog.
///
/// No session required: liking is deliberately open to any client.
#[utoipa::path(
    post,
    path = "/api/v1/blogs/{id}/likes",
    params(("id" = String, Path, description = "Blog identifier")),
    responses(
        (status = 200, description = "Updated blog", body = Blog),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Blog not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["blogs"],
    operation_id = "likeBlog",
    security([])
)]
#[post("/blogs/{id}/likes")]
pub async fn like_blog(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Blog>> {
    let id = parse_blog_id(&path.into_inner(), ID_FIELD)?;
    let blog = state.blog_command.like(&id).await?;
    Ok(web::Json(blog))
}

/// Delete a blog owned by the logged-in user.
#[utoipa::path(
    delete,
    path = "/api/v1/blogs/{id}",
    params(("id" = String, Path, description = "Blog identifier")),
    responses(
        (status = 204, description = "Blog removed"),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 403, description = "Not the owner", body = Error),
        (status = 404, description = "Blog not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["blogs"],
    operation_id = "deleteBlog"
)]
#[delete("/blogs/{id}")]
pub async fn delete_blog(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let identity = session.require_identity()?;
    let id = parse_blog_id(&path.into_inner(), ID_FIELD)?;
    state.blog_command.delete(&identity, &id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::users::{login, register};
    use crate::test_support::{memory_http_state, session_middleware};
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, App};
    use rstest::rstest;
    use serde_json::Value;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(memory_http_state()))
            .wrap(session_middleware())
            .service(
                web::scope("/api/v1")
                    .service(register)
                    .service(login)
                    .service(list_blogs)
                    .service(create_blog)
                    .service(like_blog)
                    .service(delete_blog),
            )
    }

    /// Register and log in a user, returning the session cookie.
    async fn login_as<S, B>(app: &S, username: &str) -> Cookie<'static>
    where
        S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse<B>,
            Error = actix_web::Error,
        >,
        B: actix_web::body::MessageBody,
    {
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "name": "Test User",
                "username": username,
                "password": "testpassword",
            }))
            .to_request();
        let response = actix_test::call_service(app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": username, "password": "testpassword" }))
            .to_request();
        let response = actix_test::call_service(app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie")
            .into_owned()
    }

    async fn create_blog_as<S, B>(app: &S, cookie: &Cookie<'static>, title: &str) -> Value
    where
        S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse<B>,
            Error = actix_web::Error,
        >,
        B: actix_web::body::MessageBody,
    {
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/blogs")
            .cookie(cookie.clone())
            .set_json(json!({ "title": title, "author": "A", "url": "http://u" }))
            .to_request();
        let response = actix_test::call_service(app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        serde_json::from_slice(&actix_test::read_body(response).await).expect("blog payload")
    }

    #[actix_web::test]
    async fn create_requires_a_session() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/blogs")
            .set_json(json!({ "title": "T", "author": "A", "url": "http://u" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
        assert_eq!(value["code"], "unauthenticated");
    }

    #[rstest]
    #[case(json!({ "author": "A", "url": "http://u" }), "title")]
    #[case(json!({ "title": "T", "author": "A" }), "url")]
    #[actix_web::test]
    async fn create_rejects_missing_required_fields(#[case] body: Value, #[case] field: &str) {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_as(&app, "testuser").await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/blogs")
            .cookie(cookie)
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
        assert_eq!(value["code"], "validation_error");
        assert_eq!(value["details"]["field"], field);
    }

    #[actix_web::test]
    async fn created_blog_appears_in_listing_with_owner() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_as(&app, "testuser").await;
        let blog = create_blog_as(&app, &cookie, "T").await;
        assert_eq!(blog["likes"], 0);

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/blogs")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let listing: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("listing");
        let rows = listing.as_array().expect("array");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], blog["id"]);
        assert_eq!(rows[0]["owner"]["username"], "testuser");
    }

    #[actix_web::test]
    async fn like_needs_no_session_and_increments() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_as(&app, "testuser").await;
        let blog = create_blog_as(&app, &cookie, "T").await;
        let id = blog["id"].as_str().expect("id string");

        for expected in 1..=2_u64 {
            let response = actix_test::call_service(
                &app,
                actix_test::TestRequest::post()
                    .uri(&format!("/api/v1/blogs/{id}/likes"))
                    .to_request(),
            )
            .await;
            assert_eq!(response.status(), StatusCode::OK);
            let value: Value =
                serde_json::from_slice(&actix_test::read_body(response).await).expect("blog");
            assert_eq!(value["likes"], expected);
        }
    }

    #[actix_web::test]
    async fn like_of_unknown_blog_is_not_found() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/blogs/7c9e6679-7425-40de-944b-e07fc1f90ae7/likes")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
        assert_eq!(value["code"], "not_found");
    }

    #[actix_web::test]
    async fn like_with_malformed_id_is_a_validation_error() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/blogs/not-a-uuid/likes")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn owner_can_delete_and_listing_empties() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_as(&app, "testuser").await;
        let blog = create_blog_as(&app, &cookie, "T").await;
        let id = blog["id"].as_str().expect("id string");

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/v1/blogs/{id}"))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/blogs")
                .to_request(),
        )
        .await;
        let listing: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("listing");
        assert_eq!(listing.as_array().expect("array").len(), 0);
    }

    #[actix_web::test]
    async fn non_owner_delete_is_forbidden_and_blog_stays_listed() {
        let app = actix_test::init_service(test_app()).await;
        let owner_cookie = login_as(&app, "testuser").await;
        let other_cookie = login_as(&app, "otheruser").await;
        let blog = create_blog_as(&app, &owner_cookie, "T").await;
        let id = blog["id"].as_str().expect("id string");

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/v1/blogs/{id}"))
                .cookie(other_cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
        assert_eq!(value["code"], "forbidden");

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/blogs")
                .to_request(),
        )
        .await;
        let listing: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("listing");
        assert_eq!(listing.as_array().expect("array").len(), 1);
    }

    #[actix_web::test]
    async fn delete_requires_a_session() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/v1/blogs/7c9e6679-7425-40de-944b-e07fc1f90ae7")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn delete_of_unknown_blog_is_not_found() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_as(&app, "testuser").await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/v1/blogs/7c9e6679-7425-40de-944b-e07fc1f90ae7")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
