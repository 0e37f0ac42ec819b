//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Reads exclude soft-deleted
//! rows unless the method name says otherwise.

pub mod rating_repo;
pub mod todo_repo;

pub use rating_repo::RatingRepo;
pub use todo_repo::TodoRepo;
