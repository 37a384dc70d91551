//! Value enum for dynamic field values

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// A dynamic value held by a [`Row`](super::Row) field.
///
/// Rows coming from the backend are plain JSON records, so only scalar
/// JSON types are represented.
///
/// | JSON | Rust Variant |
/// |------|--------------|
/// | null | `Null` |
/// | true/false | `Bool` |
/// | integer | `Int` |
/// | fractional number | `Float` |
/// | string | `String` |
/// | array/object | `String` (JSON text) |
///
/// # Example
///
/// ```
/// use timesheet_lib::model::Value;
///
/// let name = Value::from("Ann");
/// let hours = Value::from(7.5);
/// let empty = Value::Null;
///
/// assert_eq!(name.search_text().as_deref(), Some("Ann"));
/// assert_eq!(hours.search_text().as_deref(), Some("7.5"));
/// assert!(empty.search_text().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value if this is an integer or float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the text matched by the global filter.
    ///
    /// Only strings and numbers are searchable; everything else yields `None`.
    pub fn search_text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Null | Value::Bool(_) => None,
        }
    }

    /// Returns `true` if the value's text contains `needle_lower`.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches_filter(&self, needle_lower: &str) -> bool {
        self.search_text()
            .is_some_and(|text| text.to_lowercase().contains(needle_lower))
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Int(_) | Value::Float(_) => 0,
            Value::String(_) => 1,
            Value::Bool(_) => 2,
            Value::Null => 3,
        }
    }

    /// Total ordering used when sorting table columns.
    ///
    /// Numbers sort before strings, strings before booleans, and nulls last.
    /// Numbers compare numerically (integers and floats together); strings
    /// compare case-insensitively with a case-sensitive tiebreak.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.rank().cmp(&b.rank()),
            },
        }
    }

    /// Like [`sort_cmp`](Self::sort_cmp), but only the order within each
    /// type class is reversed: nulls stay last.
    pub fn sort_cmp_desc(&self, other: &Value) -> Ordering {
        match self.rank().cmp(&other.rank()) {
            Ordering::Equal => other.sort_cmp(self),
            class => class,
        }
    }
}

/// Exact comparison of an integer with a float.
///
/// Rounding `i` to `f64` is monotonic, so the rounded comparison is only
/// inconclusive when both sides land on the same integral float.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    match (i as f64).total_cmp(&f) {
        Ordering::Equal => i128::from(i).cmp(&(f as i128)),
        other => other,
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            // Nested structures are kept as their JSON text.
            other => Value::String(other.to_string()),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_numbers_compare_numerically() {
        assert_eq!(Value::Int(3).sort_cmp(&Value::Float(2.5)), Ordering::Greater);
        assert_eq!(Value::Float(3.0).sort_cmp(&Value::Int(3)), Ordering::Equal);
    }

    #[test]
    fn test_large_ints_compare_exactly() {
        let big = 1i64 << 53;
        assert_eq!(Value::Int(big + 1).sort_cmp(&Value::Int(big)), Ordering::Greater);
        assert_eq!(Value::Int(big + 1).sort_cmp(&Value::Float(big as f64)), Ordering::Greater);
        assert_eq!(Value::Float(big as f64).sort_cmp(&Value::Int(big + 1)), Ordering::Less);
        assert_eq!(Value::Float(big as f64).sort_cmp(&Value::Int(big)), Ordering::Equal);
        assert_eq!(Value::Int(i64::MAX).sort_cmp(&Value::Float(f64::INFINITY)), Ordering::Less);
    }

    #[test]
    fn test_strings_case_insensitive() {
        assert_eq!(Value::from("ann").sort_cmp(&Value::from("Bob")), Ordering::Less);
        assert_eq!(Value::from("Ann").sort_cmp(&Value::from("ann")), Ordering::Less);
    }

    #[test]
    fn test_nulls_last_both_directions() {
        let null = Value::Null;
        let one = Value::Int(1);
        assert_eq!(null.sort_cmp(&one), Ordering::Greater);
        assert_eq!(null.sort_cmp_desc(&one), Ordering::Greater);
        assert_eq!(null.sort_cmp(&Value::Null), Ordering::Equal);
        assert_eq!(one.sort_cmp_desc(&Value::Int(2)), Ordering::Greater);
    }

    #[test]
    fn test_filter_matching() {
        assert!(Value::from("Client Work").matches_filter("client"));
        assert!(Value::Int(1234).matches_filter("23"));
        assert!(!Value::Bool(true).matches_filter("true"));
        assert!(!Value::Null.matches_filter(""));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from(serde_json::json!(5)), Value::Int(5));
        assert_eq!(Value::from(serde_json::json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from(serde_json::json!(null)), Value::Null);
        assert_eq!(
            Value::from(serde_json::json!(["a"])),
            Value::String("[\"a\"]".to_string())
        );
    }

    #[test]
    fn test_deserialize_nested_as_text() {
        let value: Value = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(value, Value::from(r#"{"id":1}"#));
        let value: Value = serde_json::from_str("7").unwrap();
        assert_eq!(value, Value::Int(7));
    }
}
