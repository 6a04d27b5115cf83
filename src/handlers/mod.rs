pub mod data;
pub mod query;
