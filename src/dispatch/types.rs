// Dispatch data types
// Parameter bags, error records and the per-dispatch outcome

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters handed to a controller operation as one opaque argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterBag {
    /// Name → value mapping (query strings, configured defaults)
    Named(Map<String, Value>),
    /// Ordered positional values
    Positional(Vec<Value>),
}

impl Default for ParameterBag {
    fn default() -> Self {
        Self::Named(Map::new())
    }
}

impl ParameterBag {
    /// Number of entries, regardless of shape
    pub fn len(&self) -> usize {
        match self {
            Self::Named(map) => map.len(),
            Self::Positional(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a named parameter. Positional bags have no names.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Named(map) => map.get(name),
            Self::Positional(_) => None,
        }
    }

    /// Look up a positional parameter
    pub fn at(&self, index: usize) -> Option<&Value> {
        match self {
            Self::Named(_) => None,
            Self::Positional(values) => values.get(index),
        }
    }

    /// Read an integer parameter, accepting both JSON numbers and numeric strings
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// The bag as a JSON value (object or array)
    pub fn to_value(&self) -> Value {
        match self {
            Self::Named(map) => Value::Object(map.clone()),
            Self::Positional(values) => Value::Array(values.clone()),
        }
    }
}

impl From<Map<String, Value>> for ParameterBag {
    fn from(map: Map<String, Value>) -> Self {
        Self::Named(map)
    }
}

impl From<Vec<Value>> for ParameterBag {
    fn from(values: Vec<Value>) -> Self {
        Self::Positional(values)
    }
}

impl FromIterator<(String, Value)> for ParameterBag {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::Named(iter.into_iter().collect())
    }
}

/// Uniform failure envelope: `{status, message, data: []}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// HTTP-style status code (404 = not found, ...)
    pub status: u16,
    pub message: String,
    /// Always an empty container
    #[serde(default)]
    pub data: Vec<Value>,
}

impl ErrorRecord {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: Vec::new(),
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "status": self.status,
            "message": self.message,
            "data": self.data,
        })
    }
}

/// Result of the most recent dispatch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Whatever the operation returned: a `{view, data}` envelope or raw data
    Success(Value),
    Failure(ErrorRecord),
}

impl DispatchOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Status to report for this outcome (200 for any success)
    pub const fn status(&self) -> u16 {
        match self {
            Self::Success(_) => 200,
            Self::Failure(record) => record.status,
        }
    }

    /// The renderable value: the success payload, or the error record as JSON
    pub fn to_value(&self) -> Value {
        match self {
            Self::Success(value) => value.clone(),
            Self::Failure(record) => record.to_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameter_bag_default_is_empty() {
        let bag = ParameterBag::default();
        assert!(bag.is_empty());
        assert_eq!(bag.to_value(), json!({}));
    }

    #[test]
    fn test_parameter_bag_shapes() {
        let named: ParameterBag = serde_json::from_value(json!({"id": 5, "name": "gear"})).unwrap();
        assert_eq!(named.len(), 2);
        assert_eq!(named.get_i64("id"), Some(5));
        assert_eq!(named.get_str("name"), Some("gear"));
        assert_eq!(named.at(0), None);

        let positional: ParameterBag = serde_json::from_value(json!(["a", 2])).unwrap();
        assert_eq!(positional.len(), 2);
        assert_eq!(positional.at(1), Some(&json!(2)));
        assert_eq!(positional.get("a"), None);
    }

    #[test]
    fn test_get_i64_accepts_numeric_strings() {
        let bag: ParameterBag = [("id".to_string(), json!(" 42 "))].into_iter().collect();
        assert_eq!(bag.get_i64("id"), Some(42));

        let bag: ParameterBag = [("id".to_string(), json!("abc"))].into_iter().collect();
        assert_eq!(bag.get_i64("id"), None);
    }

    #[test]
    fn test_error_record_json_shape() {
        let record = ErrorRecord::new(404, "Method not found");
        assert_eq!(
            record.to_value(),
            json!({"status": 404, "message": "Method not found", "data": []})
        );
        assert_eq!(serde_json::to_value(&record).unwrap(), record.to_value());
    }

    #[test]
    fn test_outcome_status() {
        assert_eq!(DispatchOutcome::Success(json!(null)).status(), 200);
        let failure = DispatchOutcome::Failure(ErrorRecord::new(403, "Forbidden"));
        assert!(!failure.is_success());
        assert_eq!(failure.status(), 403);
        assert_eq!(failure.to_value()["message"], "Forbidden");
    }
}
