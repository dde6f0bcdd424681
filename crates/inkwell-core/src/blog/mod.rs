//! Blog domain module.
//!
//! # Module Structure
//!
//! - `model`: `BlogRecord`, `BlogFields` and the fixed `Category` set
//! - `filter`: `FilterCriteria` and listing `Scope`

mod filter;
mod model;

pub use filter::{FilterCriteria, Scope};
pub use model::{BlogFields, BlogRecord, Category, category_field};
