//! Helpers shared by unit and integration tests.
//!
//! Builds the HTTP dependency bundle over fresh in-memory stores and a
//! session middleware suitable for plain-HTTP test clients.

use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;

use crate::domain::{AuthService, BlogCommandService, BlogQueryService};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{InMemoryBlogRepository, InMemoryUserRepository};

#[cfg(feature = "test-support")]
use crate::domain::MaintenanceService;
#[cfg(feature = "test-support")]
use crate::inbound::http::testing::TestingState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

fn http_state_over(
    users: Arc<InMemoryUserRepository>,
    blogs: Arc<InMemoryBlogRepository>,
) -> HttpState {
    let auth = Arc::new(AuthService::new(users.clone()));
    HttpState::new(
        auth.clone(),
        auth,
        Arc::new(BlogCommandService::new(blogs.clone())),
        Arc::new(BlogQueryService::new(blogs, users)),
    )
}

/// Build an [`HttpState`] over fresh in-memory stores.
pub fn memory_http_state() -> HttpState {
    http_state_over(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryBlogRepository::new()),
    )
}

/// Build the HTTP and testing dependency bundles over shared in-memory
/// stores, so a reset through the testing state is observable through the
/// HTTP state.
#[cfg(feature = "test-support")]
pub fn memory_states() -> (HttpState, TestingState) {
    let users = Arc::new(InMemoryUserRepository::new());
    let blogs = Arc::new(InMemoryBlogRepository::new());
    let state = http_state_over(users.clone(), blogs.clone());
    let testing = TestingState {
        reset: Arc::new(MaintenanceService::new(users, blogs)),
    };
    (state, testing)
}
