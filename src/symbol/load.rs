//! Converting extractor JSON that is already in memory into symbol forests.
//!
//! The extractor emits a top-level array of records. A lone record is
//! accepted as a forest of one.

use serde_json::Value;
use tracing::debug;

use crate::error::{DocsymError, Result};

use super::lookup::walk;
use super::types::Symbol;

/// Parse a forest from JSON text.
pub fn parse_symbols(json: &str) -> Result<Vec<Symbol>> {
    symbols_from_value(serde_json::from_str(json)?)
}

/// Convert an untyped JSON document into a forest.
pub fn symbols_from_value(value: Value) -> Result<Vec<Symbol>> {
    let symbols: Vec<Symbol> = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        Value::Object(_) => vec![serde_json::from_value(value)?],
        other => {
            return Err(DocsymError::invalid_record(format!(
                "expected an array or object, found {}",
                json_type_name(&other)
            )));
        }
    };
    debug!(
        "Loaded {} top-level symbols ({} total)",
        symbols.len(),
        walk(&symbols).count()
    );
    Ok(symbols)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
