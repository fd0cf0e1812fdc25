//! Repositories: one unit struct per table, static async methods, all
//! queries parameterized. Ownership checks live above this layer -- a
//! repository answers "what is in the table", never "who may see it".

mod list_item_repo;
mod list_repo;

pub use list_item_repo::ListItemRepo;
pub use list_repo::ListRepo;
