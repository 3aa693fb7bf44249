pub mod cat;
pub mod fields;
pub mod schema;
