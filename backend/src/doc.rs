//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: the user and blog endpoints, the health probes, the
//! shared error schema, and the session cookie security scheme. The
//! generated document backs Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::ports::{BlogView, OwnerSummary};
use crate::domain::{Blog, Error, ErrorCode, User};
use crate::inbound::http::blogs::CreateBlogRequest;
use crate::inbound::http::users::{LoginRequest, RegisterRequest};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Bloglist backend API",
        description = "HTTP interface for registering users, publishing blogs, \
            liking them, and listing them by popularity."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::blogs::list_blogs,
        crate::inbound::http::blogs::create_blog,
        crate::inbound::http::blogs::like_blog,
        crate::inbound::http::blogs::delete_blog,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Blog,
        BlogView,
        OwnerSummary,
        Error,
        ErrorCode,
        RegisterRequest,
        LoginRequest,
        CreateBlogRequest,
    )),
    tags(
        (name = "users", description = "Registration and login"),
        (name = "blogs", description = "Publishing, liking, and listing blogs"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
