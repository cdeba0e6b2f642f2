//! # docsym
//!
//! Predicates and name accessors over documentation symbol records, as
//! emitted by JavaScript doc extractors and consumed by doc templates.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! symbol    → Symbol records, names, lookup, predicates, loading
//!   ↓
//! core      → Path resolution, text helpers
//!   ↓
//! error     → DocsymError
//! ```
//!
//! ## Example
//!
//! ```
//! use docsym::symbol::{get_name, get_symbol_by_name, is_instance_method, parse_symbols};
//!
//! let docs = parse_symbols(r#"[
//!     { "name": "Foo", "longname": "Foo", "kind": "class",
//!       "meta": { "code": { "name": "Foo", "type": "ClassDeclaration" } },
//!       "$members": [
//!         { "name": "bar", "longname": "Foo#bar", "kind": "function", "scope": "instance",
//!           "meta": { "code": { "name": "Foo#bar", "type": "MethodDefinition" } } }
//!       ] }
//! ]"#).unwrap();
//!
//! let bar = get_symbol_by_name(&docs, "Foo#bar").unwrap();
//! assert!(is_instance_method(bar));
//! assert_eq!(get_name(bar), "bar");
//! ```

/// Crate-wide error type
pub mod error;

/// Leaf helpers: dotted-path resolution, string normalization
pub mod core;

/// Symbol model, accessors and predicates
pub mod symbol;

pub use error::{DocsymError, Result};
pub use symbol::{CodeType, Scope, Symbol, SymbolKind};
