//! Depth-first traversal and name lookup over a symbol forest.

use tracing::trace;

use super::names::get_full_name;
use super::types::Symbol;

// ============================================================
// Traversal
// ============================================================

/// Pre-order iterator over a forest: a symbol, then its `$members`, then
/// its next sibling.
///
/// Children are borrowed from their parent, so the forest cannot contain
/// cycles and no visited set is needed.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<std::slice::Iter<'a, Symbol>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(symbol) => {
                    if !symbol.members.is_empty() {
                        self.stack.push(symbol.members.iter());
                    }
                    return Some(symbol);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Walk every symbol in `symbols` and their members, in pre-order.
pub fn walk(symbols: &[Symbol]) -> Walk<'_> {
    Walk {
        stack: vec![symbols.iter()],
    }
}

// ============================================================
// Lookup
// ============================================================

/// Whether `name` equals the symbol's name, longname or full name.
pub fn matches_name(symbol: &Symbol, name: &str) -> bool {
    symbol.name == name || symbol.longname == name || get_full_name(symbol) == name
}

/// First symbol in pre-order whose name, longname or full name is `name`.
pub fn get_symbol_by_name<'a>(symbols: &'a [Symbol], name: &str) -> Option<&'a Symbol> {
    let found = walk(symbols).find(|symbol| matches_name(symbol, name));
    match found {
        Some(symbol) => trace!("[LOOKUP] '{}' -> {}", name, symbol.longname),
        None => trace!("[LOOKUP] '{}' not found", name),
    }
    found
}
