//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct embedding [`BaseColumns`](crate::base::BaseColumns)
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - Where the entity is editable, an update DTO (all `Option` fields) for patches

pub mod rating;
pub mod todo;
