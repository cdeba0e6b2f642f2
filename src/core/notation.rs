//! Dotted-path lookup into untyped JSON records.
//!
//! ```text
//! notate({"meta": {"code": {"type": "X"}}}, "meta.code.type")  => Some("X")
//! notate({}, "meta.code.type")                                  => None
//! ```

use serde_json::Value;

/// A path into a nested record.
///
/// Strings are split on `.`; sequences are taken segment by segment.
/// Implementations only borrow, so the caller's path is never consumed.
pub trait Notation {
    /// The path segments, in descent order.
    fn segments(&self) -> Vec<&str>;
}

impl Notation for str {
    fn segments(&self) -> Vec<&str> {
        self.split('.').collect()
    }
}

impl Notation for String {
    fn segments(&self) -> Vec<&str> {
        self.as_str().segments()
    }
}

impl<S: AsRef<str>> Notation for [S] {
    fn segments(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<S: AsRef<str>, const N: usize> Notation for [S; N] {
    fn segments(&self) -> Vec<&str> {
        self.as_slice().segments()
    }
}

impl<S: AsRef<str>> Notation for Vec<S> {
    fn segments(&self) -> Vec<&str> {
        self.as_slice().segments()
    }
}

impl<T: Notation + ?Sized> Notation for &T {
    fn segments(&self) -> Vec<&str> {
        (**self).segments()
    }
}

/// Resolve `path` against `value`.
///
/// Returns `None` when the path is empty, when any segment is empty, or
/// when a step lands on something that has no such field. Arrays are
/// indexed by numeric segments.
///
/// # Example
/// ```
/// use docsym::core::notation::notate;
/// use serde_json::json;
///
/// let symbol = json!({ "meta": { "code": { "type": "MethodDefinition" } } });
/// assert_eq!(notate(&symbol, "meta.code.type"), Some(&json!("MethodDefinition")));
/// assert_eq!(notate(&symbol, &["meta", "code", "name"]), None);
/// assert_eq!(notate(&json!(null), "a"), None);
/// ```
pub fn notate<'a, P: Notation + ?Sized>(value: &'a Value, path: &P) -> Option<&'a Value> {
    let segments = path.segments();
    if segments.is_empty() {
        return None;
    }
    segments
        .into_iter()
        .try_fold(value, |current, segment| step(current, segment))
}

/// Resolve `path` and view the result as a string.
pub fn notate_str<'a, P: Notation + ?Sized>(value: &'a Value, path: &P) -> Option<&'a str> {
    notate(value, path).and_then(Value::as_str)
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    if segment.is_empty() {
        return None;
    }
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}
