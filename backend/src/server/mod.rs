//! Server construction and middleware wiring.

mod config;

pub use config::{key_fingerprint, ServerConfig};

use std::sync::Arc;

use actix_session::{
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
    SessionMiddleware,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

use bloglist_backend::domain::{AuthService, BlogCommandService, BlogQueryService};
use bloglist_backend::inbound::http::blogs::{create_blog, delete_blog, like_blog, list_blogs};
use bloglist_backend::inbound::http::health::{live, ready, HealthState};
use bloglist_backend::inbound::http::state::HttpState;
use bloglist_backend::inbound::http::users::{login, register};
use bloglist_backend::outbound::persistence::{InMemoryBlogRepository, InMemoryUserRepository};
use bloglist_backend::Trace;

#[cfg(feature = "test-support")]
use bloglist_backend::domain::MaintenanceService;
#[cfg(feature = "test-support")]
use bloglist_backend::inbound::http::testing::{reset, TestingState};

#[cfg(debug_assertions)]
use bloglist_backend::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    #[cfg(feature = "test-support")]
    testing_state: web::Data<TestingState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

/// Wire the domain services over fresh in-memory stores.
fn build_dependencies(
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
) -> AppDependencies {
    let users = Arc::new(InMemoryUserRepository::new());
    let blogs = Arc::new(InMemoryBlogRepository::new());
    let auth = Arc::new(AuthService::new(users.clone()));
    let http_state = web::Data::new(HttpState::new(
        auth.clone(),
        auth,
        Arc::new(BlogCommandService::new(blogs.clone())),
        Arc::new(BlogQueryService::new(blogs.clone(), users.clone())),
    ));

    #[cfg(feature = "test-support")]
    let testing_state = web::Data::new(TestingState {
        reset: Arc::new(MaintenanceService::new(users, blogs)),
    });

    AppDependencies {
        health_state,
        http_state,
        #[cfg(feature = "test-support")]
        testing_state,
        key: config.key.clone(),
        cookie_secure: config.cookie_secure,
        same_site: config.same_site,
    }
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        #[cfg(feature = "test-support")]
        testing_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(register)
        .service(login)
        .service(list_blogs)
        .service(create_blog)
        .service(like_blog)
        .service(delete_blog);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(feature = "test-support")]
    let app = app
        .app_data(testing_state)
        .service(web::scope("/api").service(reset));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let deps = build_dependencies(health_state.clone(), &config);

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(config.bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
