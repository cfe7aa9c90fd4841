//! Development-only testing endpoint.
//!
//! Compiled only under the `test-support` feature so end-to-end suites can
//! reset the backend between scenarios. Explicitly outside the production
//! contract; production builds never mount this route.

use std::sync::Arc;

use actix_web::{post, web, HttpResponse};

use crate::domain::ports::ResetCommand;
use crate::inbound::http::ApiResult;

/// Dependency bundle for the testing routes.
#[derive(Clone)]
pub struct TestingState {
    /// Full-reset use-case wiping both stores.
    pub reset: Arc<dyn ResetCommand>,
}

/// Wipe every user and blog.
#[utoipa::path(
    post,
    path = "/api/testing/reset",
    responses(
        (status = 204, description = "All users and blogs removed"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["testing"],
    operation_id = "reset",
    security([])
)]
#[post("/testing/reset")]
pub async fn reset(state: web::Data<TestingState>) -> ApiResult<HttpResponse> {
    state.reset.reset_all().await?;
    Ok(HttpResponse::NoContent().finish())
}
