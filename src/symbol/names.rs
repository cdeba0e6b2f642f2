//! Name accessors.
//!
//! When a symbol is aliased, the extractor keeps the name as written in
//! source only at `meta.code.name`; `longname` then holds the alias.

use crate::core::text_utils::{last_segment, stripped_len};

use super::types::Symbol;

/// Full qualified name of a symbol.
///
/// Picks `meta.code.name` when, with separators removed, it is at least as
/// long as `longname` with separators removed; otherwise `longname`.
/// The result is always one of the two fields, never a new string.
pub fn get_full_name(symbol: &Symbol) -> &str {
    match symbol.code_name().filter(|n| !n.is_empty()) {
        Some(code_name) if stripped_len(code_name) >= stripped_len(&symbol.longname) => code_name,
        _ => &symbol.longname,
    }
}

/// Short name of a symbol.
///
/// The trailing segment of `meta.code.name` (`"Foo#bar"` gives `"bar"`), or
/// `name` when there is no code name.
pub fn get_name(symbol: &Symbol) -> &str {
    match symbol.code_name().filter(|n| !n.is_empty()) {
        Some(code_name) => last_segment(code_name),
        None => &symbol.name,
    }
}
