pub mod resolver;

pub use resolver::{bare_type_name, RelationshipResolver};
