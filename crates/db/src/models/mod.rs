//! Row models and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` DTOs for the write operations

pub mod list;
pub mod list_item;
