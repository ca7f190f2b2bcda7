//! Route provider seam
//!
//! The dispatcher never reads ambient route state. Whatever parsed the request
//! hands over a [`DefaultRoute`] snapshot, taken once through [`RouteProvider`].

use crate::dispatch::ParameterBag;

/// Source of the route resolved for the current request
pub trait RouteProvider {
    fn params(&self) -> ParameterBag;

    /// Request method (e.g. `GET`)
    fn method(&self) -> String;

    /// Callback descriptor: `(module)`, `(module, method)` or `(module, controller, method)`
    fn callback(&self) -> Vec<String>;
}

/// Route captured at dispatcher construction, used when `dispatch` gets no callback
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefaultRoute {
    pub callback: Vec<String>,
    pub params: ParameterBag,
    pub method: String,
}

impl DefaultRoute {
    pub fn new(callback: Vec<String>, params: ParameterBag, method: impl Into<String>) -> Self {
        Self {
            callback,
            params,
            method: method.into(),
        }
    }

    /// Snapshot a provider's route
    pub fn from_provider(provider: &dyn RouteProvider) -> Self {
        Self {
            callback: provider.callback(),
            params: provider.params(),
            method: provider.method(),
        }
    }
}
