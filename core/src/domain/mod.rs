pub mod advisory;
pub mod common;
pub mod journal;
pub mod schema;
