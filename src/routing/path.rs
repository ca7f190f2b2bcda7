//! Path-segment route provider
//!
//! `/widgets/admin/show?id=5` becomes callback `["widgets", "admin", "show"]`
//! with named params `{"id": "5"}`. No pattern matching is done here; segments
//! are taken as they appear.

use serde_json::{Map, Value};

use super::provider::RouteProvider;
use crate::dispatch::ParameterBag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRouteProvider {
    method: String,
    callback: Vec<String>,
    params: ParameterBag,
}

impl PathRouteProvider {
    pub fn new(method: &str, path: &str, query: Option<&str>) -> Self {
        let callback = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(ToString::to_string)
            .collect();

        let params = query.map_or_else(ParameterBag::default, parse_query);

        Self {
            method: method.to_string(),
            callback,
            params,
        }
    }

    /// Fill in a configured route for requests that carry no path segments.
    /// Query parameters, when present, still win over the configured params.
    #[must_use]
    pub fn with_defaults(mut self, callback: &[String], params: &ParameterBag) -> Self {
        if self.callback.is_empty() {
            self.callback = callback.to_vec();
            if self.params.is_empty() {
                self.params = params.clone();
            }
        }
        self
    }
}

impl RouteProvider for PathRouteProvider {
    fn params(&self) -> ParameterBag {
        self.params.clone()
    }

    fn method(&self) -> String {
        self.method.clone()
    }

    fn callback(&self) -> Vec<String> {
        self.callback.clone()
    }
}

/// Decode `a=1&b=two` into a named bag. Repeated keys keep the last value.
fn parse_query(query: &str) -> ParameterBag {
    let map: Map<String, Value> = url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
        .collect();
    ParameterBag::Named(map)
}
