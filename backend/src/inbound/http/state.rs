//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BlogCommand, BlogQuery, LoginService, RegistrationService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Login use-case.
    pub login: Arc<dyn LoginService>,
    /// Registration use-case.
    pub registration: Arc<dyn RegistrationService>,
    /// Blog mutations: create, like, delete.
    pub blog_command: Arc<dyn BlogCommand>,
    /// Blog listing projection.
    pub blog_query: Arc<dyn BlogQuery>,
}

impl HttpState {
    /// Bundle the port implementations handlers depend on.
    pub fn new(
        login: Arc<dyn LoginService>,
        registration: Arc<dyn RegistrationService>,
        blog_command: Arc<dyn BlogCommand>,
        blog_query: Arc<dyn BlogQuery>,
    ) -> Self {
        Self {
            login,
            registration,
            blog_command,
            blog_query,
        }
    }
}
