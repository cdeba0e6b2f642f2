//! Symbol forests shared across tests.

use docsym::{CodeType, Scope, Symbol, SymbolKind};
use once_cell::sync::Lazy;

/// Extractor output for a small class hierarchy.
pub const CLASS_DOCS_JSON: &str = r#"[
  {
    "name": "geo",
    "longname": "geo",
    "kind": "namespace",
    "scope": "global",
    "comments": "/** Geometry. */",
    "description": "Geometry helpers.",
    "meta": { "filename": "geo.js", "lineno": 1 },
    "$members": [
      {
        "name": "Point",
        "longname": "geo.Point",
        "kind": "class",
        "scope": "static",
        "comments": "/** A point. */",
        "classdesc": "A 2D point.",
        "meta": { "code": { "name": "geo.Point", "type": "ClassDeclaration" } },
        "$members": [
          {
            "name": "Point",
            "longname": "geo.Point",
            "kind": "class",
            "comments": "/** @param {number} x */",
            "meta": { "code": { "name": "Point", "type": "MethodDefinition" } }
          },
          {
            "name": "x",
            "longname": "geo.Point#x",
            "kind": "member",
            "scope": "instance",
            "readonly": true,
            "comments": "",
            "meta": { "code": { "name": "this.x" } }
          },
          {
            "name": "distance",
            "longname": "geo.Point#distance",
            "kind": "function",
            "scope": "instance",
            "comments": "/** Distance to another point. */",
            "description": "Distance to another point.",
            "meta": { "code": { "name": "Point#distance", "type": "MethodDefinition" } }
          },
          {
            "name": "origin",
            "longname": "geo.Point.origin",
            "kind": "function",
            "scope": "static",
            "meta": { "code": { "name": "Point.origin", "type": "FunctionExpression" } }
          },
          {
            "name": "DIMENSIONS",
            "longname": "geo.Point.DIMENSIONS",
            "kind": "member",
            "scope": "static",
            "readonly": true
          }
        ]
      },
      {
        "name": "Axis",
        "longname": "geo.Axis",
        "kind": "member",
        "scope": "static",
        "isEnum": true,
        "comments": "/** @enum */",
        "description": "   "
      }
    ]
  },
  {
    "name": "version",
    "longname": "version",
    "kind": "constant",
    "scope": "global"
  }
]"#;

/// Parsed form of [`CLASS_DOCS_JSON`].
pub static CLASS_DOCS: Lazy<Vec<Symbol>> = Lazy::new(|| {
    docsym::symbol::parse_symbols(CLASS_DOCS_JSON).expect("fixture parses")
});

/// Build a symbol with kind, scope and code type set.
pub fn symbol_of(
    kind: Option<SymbolKind>,
    scope: Option<Scope>,
    code_type: Option<CodeType>,
) -> Symbol {
    let mut symbol = Symbol::new("s", "S#s");
    symbol.kind = kind;
    symbol.scope = scope;
    if code_type.is_some() {
        symbol = symbol.with_code(None, code_type);
    }
    symbol
}
