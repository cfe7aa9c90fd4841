//! User API handlers: registration and login.
//!
//! ```text
//! POST /api/v1/users {"name":"Test User","username":"testuser","password":"testpassword"}
//! POST /api/v1/login {"username":"testuser","password":"testpassword"}
//! ```

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{
    Error, Identity, LoginCredentials, LoginValidationError, NewUser,
    PasswordValidationError, RegistrationValidationError, User, UserValidationError,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{require_field, FieldName};
use crate::inbound::http::ApiResult;

const NAME_FIELD: FieldName = FieldName::new("name");
const USERNAME_FIELD: FieldName = FieldName::new("username");
const PASSWORD_FIELD: FieldName = FieldName::new("password");

/// Registration request body for `POST /api/v1/users`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name for the new user.
    pub name: Option<String>,
    /// Requested unique login name.
    pub username: Option<String>,
    /// Plaintext password; only a salted digest is stored.
    pub password: Option<String>,
}

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

fn parse_register_request(payload: RegisterRequest) -> ApiResult<NewUser> {
    let name = require_field(payload.name, NAME_FIELD)?;
    let username = require_field(payload.username, USERNAME_FIELD)?;
    let password = require_field(payload.password, PASSWORD_FIELD)?;
    NewUser::try_from_parts(&name, &username, &password).map_err(map_registration_validation_error)
}

fn map_registration_validation_error(err: RegistrationValidationError) -> Error {
    let (field, code) = match &err {
        RegistrationValidationError::User(UserValidationError::EmptyName) => {
            ("name", "empty_name")
        }
        RegistrationValidationError::User(UserValidationError::EmptyUsername) => {
            ("username", "empty_username")
        }
        RegistrationValidationError::User(UserValidationError::UsernameTooShort { .. }) => {
            ("username", "username_too_short")
        }
        RegistrationValidationError::User(UserValidationError::InvalidId) => ("id", "invalid_id"),
        RegistrationValidationError::Password(PasswordValidationError::EmptyPassword) => {
            ("password", "empty_password")
        }
        RegistrationValidationError::Password(PasswordValidationError::PasswordTooShort {
            ..
        }) => ("password", "password_too_short"),
    };
    Error::validation(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::validation("username must not be empty")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::validation("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "register",
    security([])
)]
#[post("/users")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = parse_register_request(payload.into_inner())?;
    let user = state.registration.register(new_user).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Authenticate a user and establish a session.
///
/// Uses the centralised `Error` type so clients get a consistent error
/// schema across all endpoints.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = User,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<User>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let user = state.login.authenticate(&credentials).await?;
    session.persist_identity(&Identity::new(user.id()))?;
    Ok(web::Json(user))
}
