//! Documentation symbols and the questions templates ask about them.
//!
//! - `types`      – the `Symbol` record and its vocabularies
//! - `names`      – full and short name accessors
//! - `lookup`     – pre-order traversal and lookup by name
//! - `predicates` – kind/scope classification
//! - `load`       – converting in-memory extractor JSON into forests

mod load;
mod lookup;
mod names;
mod predicates;
mod types;

pub use load::{parse_symbols, symbols_from_value};
pub use lookup::{Walk, get_symbol_by_name, matches_name, walk};
pub use names::{get_full_name, get_name};
pub use predicates::{
    has_description, is_class, is_constructor, is_enum, is_global, is_instance_member,
    is_instance_method, is_instance_property, is_method, is_namespace, is_property, is_read_only,
    is_static_member, is_static_method, is_static_property, is_undocumented,
};
pub use types::{CodeMeta, CodeType, Meta, Scope, Symbol, SymbolKind};
