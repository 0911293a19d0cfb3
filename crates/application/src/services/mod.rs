//! Application services - Use case implementations

mod goose_db;

pub use goose_db::GooseDb;
