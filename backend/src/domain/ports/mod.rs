//! Domain ports and supporting types for the hexagonal boundary.

mod blog_command;
mod blog_query;
mod blog_repository;
mod login_service;
mod registration_service;
mod reset;
mod user_repository;

#[cfg(test)]
pub use blog_command::MockBlogCommand;
pub use blog_command::BlogCommand;
#[cfg(test)]
pub use blog_query::MockBlogQuery;
pub use blog_query::{BlogQuery, BlogView, OwnerSummary};
#[cfg(test)]
pub use blog_repository::MockBlogRepository;
pub use blog_repository::{BlogRepository, BlogStoreError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::RegistrationService;
#[cfg(test)]
pub use reset::MockResetCommand;
pub use reset::ResetCommand;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserStoreError};
