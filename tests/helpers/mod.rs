//! Shared helpers for integration tests.

pub mod symbol_fixtures;
