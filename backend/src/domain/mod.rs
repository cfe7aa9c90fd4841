//! Domain primitives, ports, and services.
//!
//! Purpose: define strongly typed domain entities and the use-case surface of
//! the backend, independent of transport and persistence. Inbound adapters
//! call the driving ports in [`ports`]; outbound adapters implement the
//! driven ports. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.

pub mod auth;
pub mod auth_service;
pub mod blog;
pub mod blog_service;
pub mod credential;
pub mod error;
pub mod maintenance;
pub mod ownership;
pub mod ports;
pub mod user;

pub use self::auth::{
    Identity, LoginCredentials, LoginValidationError, NewUser, RegistrationValidationError,
};
pub use self::auth_service::AuthService;
pub use self::blog::{Blog, BlogDraft, BlogId, BlogValidationError};
pub use self::blog_service::{BlogCommandService, BlogQueryService};
pub use self::credential::{Password, PasswordHash, PasswordValidationError, PASSWORD_MIN};
pub use self::error::{Error, ErrorCode};
pub use self::maintenance::MaintenanceService;
pub use self::ownership::assert_owner;
pub use self::user::{DisplayName, User, UserId, UserValidationError, Username, USERNAME_MIN};

/// Convenient result alias for use-case and handler code.
///
/// # Examples
/// ```
/// use bloglist_backend::domain::{ApiResult, Error};
///
/// fn guard() -> ApiResult<()> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
