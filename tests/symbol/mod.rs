//! Symbol layer tests
//!
//! - Full and short name accessors
//! - Lookup by name over nested forests
//! - Kind/scope classification predicates
//! - Loading forests from JSON

pub mod tests_loading;
