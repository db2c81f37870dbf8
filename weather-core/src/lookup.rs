//! Tolerant access into loosely-typed JSON trees.
//!
//! Upstream responses are treated as untrusted: any key may be missing,
//! `null`, or hold a value of an unexpected shape. These helpers report all
//! of those cases as `None` instead of failing.

use serde_json::Value;

/// Walk `path` from `root`, one object key per segment.
///
/// Returns `None` when a segment is missing, when an intermediate node is
/// not an object, or when the value found is `null`.
pub fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.as_object()?.get(*key)?;
    }

    if cur.is_null() { None } else { Some(cur) }
}

/// Numeric leaf at `path`, if it is a JSON number.
pub fn lookup_f64(root: &Value, path: &[&str]) -> Option<f64> {
    lookup(root, path)?.as_f64()
}

/// Integer leaf at `path`. Floats are truncated toward zero.
pub fn lookup_i64(root: &Value, path: &[&str]) -> Option<i64> {
    let v = lookup(root, path)?;
    if let Some(i) = v.as_i64() {
        return Some(i);
    }

    v.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)
}

/// Array leaf at `path`. Anything that is not an array is absent.
pub fn lookup_array<'a>(root: &'a Value, path: &[&str]) -> Option<&'a [Value]> {
    lookup(root, path)?.as_array().map(Vec::as_slice)
}

/// String leaf at `path`.
pub fn lookup_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(root, path)?.as_str()
}
