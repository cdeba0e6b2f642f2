//! Classification predicates.
//!
//! Every predicate is a total function: absent or unrecognized fields
//! answer `false`.

use crate::core::text_utils::non_blank;

use super::types::{CodeType, Scope, Symbol, SymbolKind};

fn has_kind(symbol: &Symbol, kind: SymbolKind) -> bool {
    symbol.kind.as_ref() == Some(&kind)
}

fn has_scope(symbol: &Symbol, scope: Scope) -> bool {
    symbol.scope.as_ref() == Some(&scope)
}

fn has_code_type(symbol: &Symbol, code_type: CodeType) -> bool {
    symbol.code_type() == Some(&code_type)
}

pub fn is_global(symbol: &Symbol) -> bool {
    has_scope(symbol, Scope::Global)
}

pub fn is_namespace(symbol: &Symbol) -> bool {
    has_kind(symbol, SymbolKind::Namespace)
}

/// A class documented at its declaration.
pub fn is_class(symbol: &Symbol) -> bool {
    has_kind(symbol, SymbolKind::Class) && has_code_type(symbol, CodeType::ClassDeclaration)
}

/// A class documented at its `constructor` method.
pub fn is_constructor(symbol: &Symbol) -> bool {
    has_kind(symbol, SymbolKind::Class) && has_code_type(symbol, CodeType::MethodDefinition)
}

pub fn is_static_member(symbol: &Symbol) -> bool {
    has_scope(symbol, Scope::Static)
}

pub fn is_instance_member(symbol: &Symbol) -> bool {
    has_scope(symbol, Scope::Instance)
}

/// A function defined as a method or assigned function expression.
pub fn is_method(symbol: &Symbol) -> bool {
    has_kind(symbol, SymbolKind::Function)
        && matches!(
            symbol.code_type(),
            Some(CodeType::MethodDefinition | CodeType::FunctionExpression)
        )
}

pub fn is_instance_method(symbol: &Symbol) -> bool {
    is_instance_member(symbol) && is_method(symbol)
}

pub fn is_static_method(symbol: &Symbol) -> bool {
    is_static_member(symbol) && is_method(symbol)
}

pub fn is_property(symbol: &Symbol) -> bool {
    has_kind(symbol, SymbolKind::Member)
}

pub fn is_instance_property(symbol: &Symbol) -> bool {
    is_instance_member(symbol) && is_property(symbol)
}

pub fn is_static_property(symbol: &Symbol) -> bool {
    is_static_member(symbol) && is_property(symbol)
}

pub fn is_enum(symbol: &Symbol) -> bool {
    symbol.is_enum
}

pub fn is_read_only(symbol: &Symbol) -> bool {
    symbol.readonly
}

/// True when the symbol carries no doc comment at all.
///
/// Only an absent `comments` field counts. An empty comment string is
/// documented, unlike a JavaScript falsy check on the field.
pub fn is_undocumented(symbol: &Symbol) -> bool {
    symbol.comments.is_none()
}

/// True when either `classdesc` or `description` has non-whitespace text.
pub fn has_description(symbol: &Symbol) -> bool {
    non_blank(symbol.classdesc.as_deref())
        .or_else(|| non_blank(symbol.description.as_deref()))
        .is_some()
}
