//! Use cases (application services)

pub mod process_query;
