//! Documentation symbol records.
//!
//! ```text
//! Symbol
//! ├── name, longname, kind, scope
//! ├── isEnum, readonly, comments, classdesc, description
//! ├── meta
//! │   └── code { name, type }
//! └── $members: [Symbol]
//! ```
//!
//! Field names on the wire follow the extractor output. Fields this crate
//! does not model are kept in `extra` so nothing is lost on a round trip.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;

// ============================================================================
// Helper macros
// ============================================================================

/// Declare a string vocabulary enum with an `Other` catch-all.
macro_rules! vocabulary {
    ($(#[$attr:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Any value outside the known vocabulary.
            Other(String),
        }

        impl $name {
            /// The wire form of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(s) => s,
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($text => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match Self::from(s.as_str()) {
                    Self::Other(_) => Self::Other(s),
                    known => known,
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(s) => s,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ============================================================================
// Vocabularies
// ============================================================================

vocabulary! {
    /// Documentation category of a symbol.
    SymbolKind {
        Class => "class",
        Constant => "constant",
        Event => "event",
        External => "external",
        File => "file",
        Function => "function",
        Interface => "interface",
        Member => "member",
        Mixin => "mixin",
        Module => "module",
        Namespace => "namespace",
        Package => "package",
        Param => "param",
        Typedef => "typedef",
    }
}

vocabulary! {
    /// Where a symbol is bound.
    Scope {
        Global => "global",
        Static => "static",
        Instance => "instance",
        Inner => "inner",
    }
}

vocabulary! {
    /// Syntactic construct a symbol was extracted from.
    CodeType {
        ClassDeclaration => "ClassDeclaration",
        ClassExpression => "ClassExpression",
        MethodDefinition => "MethodDefinition",
        FunctionExpression => "FunctionExpression",
        FunctionDeclaration => "FunctionDeclaration",
        ArrowFunctionExpression => "ArrowFunctionExpression",
        AssignmentExpression => "AssignmentExpression",
        VariableDeclarator => "VariableDeclarator",
        ObjectExpression => "ObjectExpression",
        ClassProperty => "ClassProperty",
        Literal => "Literal",
        Identifier => "Identifier",
    }
}

// ============================================================================
// Records
// ============================================================================

/// Facts about the code construct behind a symbol (`meta.code`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeMeta {
    /// Name as written in source; may be longer than the longname under aliasing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub code_type: Option<CodeType>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Source metadata attached to a symbol (`meta`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeMeta>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A documented code construct.
///
/// `longname` is required; every other field may be absent. Records are
/// read-only input to the accessors in this crate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    /// Short identifier name
    #[serde(default)]
    pub name: String,
    /// Fully qualified identifier path
    pub longname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SymbolKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(default, deserialize_with = "truthy")]
    pub is_enum: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub readonly: bool,
    /// Raw doc comment; `None` means the symbol is undocumented
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classdesc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Nested child symbols
    #[serde(rename = "$members", default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Symbol>,
    /// Fields not modelled above, in input order
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Symbol {
    /// Create a symbol with just its short and qualified names.
    pub fn new(name: impl Into<String>, longname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            longname: longname.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: SymbolKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Set `meta.code.name` and `meta.code.type`.
    pub fn with_code(mut self, name: Option<&str>, code_type: Option<CodeType>) -> Self {
        let code = self
            .meta
            .get_or_insert_with(Meta::default)
            .code
            .get_or_insert_with(CodeMeta::default);
        code.name = name.map(str::to_string);
        code.code_type = code_type;
        self
    }

    pub fn with_members(mut self, members: Vec<Symbol>) -> Self {
        self.members = members;
        self
    }

    /// `meta.code`, if present.
    pub fn code(&self) -> Option<&CodeMeta> {
        self.meta.as_ref()?.code.as_ref()
    }

    /// `meta.code.name`, if present.
    pub fn code_name(&self) -> Option<&str> {
        self.code()?.name.as_deref()
    }

    /// `meta.code.type`, if present.
    pub fn code_type(&self) -> Option<&CodeType> {
        self.code()?.code_type.as_ref()
    }

    /// Nested child symbols, empty when there are none.
    pub fn members(&self) -> &[Symbol] {
        &self.members
    }

    /// Untyped view of this record, for use with [`crate::core::notation::notate`].
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Read a symbol from an untyped record.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Accept any JSON value and apply JavaScript truthiness.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
