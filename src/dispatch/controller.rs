// Controller capability interface
// Controllers publish a name → operation table that the invoker consults

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use super::types::ParameterBag;

/// Failure raised by controller code (or by a controller factory)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HandlerError {
    pub status: u16,
    pub message: String,
}

impl HandlerError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(403, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }
}

pub type HandlerResult = Result<Value, HandlerError>;

/// A controller operation. Always receives the whole parameter bag as its single argument.
pub type Operation<C> = fn(&mut C, &ParameterBag) -> HandlerResult;

/// Name → operation table for one controller type
pub struct Operations<C> {
    table: HashMap<&'static str, Operation<C>>,
}

impl<C> Operations<C> {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Add an operation under `name`, replacing any earlier entry
    #[must_use]
    pub fn with(mut self, name: &'static str, operation: Operation<C>) -> Self {
        self.table.insert(name, operation);
        self
    }

    pub fn get(&self, name: &str) -> Option<Operation<C>> {
        self.table.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Operation names in sorted order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.table.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl<C> Default for Operations<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Operations<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operations")
            .field("names", &self.names())
            .finish()
    }
}

/// Implemented by every controller type that can be registered
pub trait Controller: Sized + 'static {
    fn operations() -> Operations<Self>;
}

/// Object-safe view of an instantiated controller, as seen by the invoker
pub trait Handler {
    fn has_operation(&self, name: &str) -> bool;

    /// Run the named operation. `None` when no such operation exists.
    fn call(&mut self, name: &str, params: &ParameterBag) -> Option<HandlerResult>;
}

/// A controller instance paired with its operation table
pub struct BoundController<C> {
    instance: C,
    operations: Operations<C>,
}

impl<C: Controller> BoundController<C> {
    pub fn new(instance: C) -> Self {
        Self {
            instance,
            operations: C::operations(),
        }
    }

    pub const fn instance(&self) -> &C {
        &self.instance
    }
}

impl<C: Controller> Handler for BoundController<C> {
    fn has_operation(&self, name: &str) -> bool {
        self.operations.contains(name)
    }

    fn call(&mut self, name: &str, params: &ParameterBag) -> Option<HandlerResult> {
        let operation = self.operations.get(name)?;
        Some(operation(&mut self.instance, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Counter {
        hits: u32,
    }

    impl Counter {
        fn bump(&mut self, _params: &ParameterBag) -> HandlerResult {
            self.hits += 1;
            Ok(json!(self.hits))
        }

        fn echo(&mut self, params: &ParameterBag) -> HandlerResult {
            Ok(params.to_value())
        }
    }

    impl Controller for Counter {
        fn operations() -> Operations<Self> {
            Operations::new()
                .with("bump", Self::bump)
                .with("echo", Self::echo)
        }
    }

    #[test]
    fn test_operation_table_lookup() {
        let ops = Counter::operations();
        assert!(ops.contains("bump"));
        assert!(!ops.contains("missing"));
        assert_eq!(ops.names(), vec!["bump", "echo"]);
    }

    #[test]
    fn test_bound_controller_keeps_instance_state() {
        let mut bound = BoundController::new(Counter::default());
        let params = ParameterBag::default();
        assert_eq!(bound.call("bump", &params), Some(Ok(json!(1))));
        assert_eq!(bound.call("bump", &params), Some(Ok(json!(2))));
        assert_eq!(bound.instance().hits, 2);
    }

    #[test]
    fn test_bound_controller_passes_whole_bag() {
        let mut bound = BoundController::new(Counter::default());
        let params: ParameterBag = serde_json::from_value(json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(
            bound.call("echo", &params),
            Some(Ok(json!({"a": 1, "b": 2})))
        );
    }

    #[test]
    fn test_unknown_operation_returns_none() {
        let mut bound = BoundController::new(Counter::default());
        assert!(!bound.has_operation("reset"));
        assert!(bound.call("reset", &ParameterBag::default()).is_none());
    }
}
