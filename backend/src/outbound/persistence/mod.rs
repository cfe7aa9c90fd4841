//! Persistence adapters implementing the driven ports.
//!
//! The backing engine is out of scope for this service, so the adapters are
//! process-local in-memory stores. They are the reference implementations of
//! the port contracts, including the like-increment atomicity guarantee.

mod memory_blogs;
mod memory_users;

pub use memory_blogs::InMemoryBlogRepository;
pub use memory_users::InMemoryUserRepository;
