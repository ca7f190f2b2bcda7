// Operation invoker
// Calls one named operation on a resolved handler and captures its failure

use serde_json::Value;

use super::controller::Handler;
use super::error::DispatchError;
use super::types::ParameterBag;

/// Invoke `method` on `handler` with the full parameter bag as its single argument.
///
/// `component` only labels the error when the method is missing.
pub fn invoke(
    handler: &mut dyn Handler,
    component: &str,
    method: &str,
    params: &ParameterBag,
) -> Result<Value, DispatchError> {
    let missing = || DispatchError::NotFoundMethod {
        component: component.to_string(),
        method: method.to_string(),
    };

    if !handler.has_operation(method) {
        return Err(missing());
    }

    match handler.call(method, params) {
        Some(Ok(value)) => Ok(value),
        Some(Err(err)) => Err(DispatchError::InvocationFailure(err)),
        None => Err(missing()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::controller::{BoundController, Controller, HandlerError, HandlerResult, Operations};
    use serde_json::json;

    #[derive(Default)]
    struct Vault;

    impl Vault {
        fn open(&mut self, params: &ParameterBag) -> HandlerResult {
            match params.get_str("code") {
                Some("1234") => Ok(json!({"opened": true})),
                _ => Err(HandlerError::forbidden("Wrong code")),
            }
        }

        fn count(&mut self, params: &ParameterBag) -> HandlerResult {
            Ok(json!(params.len()))
        }
    }

    impl Controller for Vault {
        fn operations() -> Operations<Self> {
            Operations::new()
                .with("open", Self::open)
                .with("count", Self::count)
        }
    }

    fn bag(value: Value) -> ParameterBag {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_invoke_success() {
        let mut handler = BoundController::new(Vault);
        let result = invoke(&mut handler, "Vault", "open", &bag(json!({"code": "1234"})));
        assert_eq!(result, Ok(json!({"opened": true})));
    }

    #[test]
    fn test_invoke_missing_method() {
        let mut handler = BoundController::new(Vault);
        let err = invoke(&mut handler, "Vault", "smash", &ParameterBag::default()).unwrap_err();
        assert_eq!(err.to_string(), "Method not found");
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn test_invoke_captures_handler_failure() {
        let mut handler = BoundController::new(Vault);
        let err = invoke(&mut handler, "Vault", "open", &bag(json!({"code": "0000"}))).unwrap_err();
        assert_eq!(
            err,
            DispatchError::InvocationFailure(HandlerError::forbidden("Wrong code"))
        );
        assert_eq!(err.to_record().status, 403);
    }

    #[test]
    fn test_invoke_passes_positional_bag_as_one_argument() {
        let mut handler = BoundController::new(Vault);
        let result = invoke(&mut handler, "Vault", "count", &bag(json!([1, 2, 3])));
        assert_eq!(result, Ok(json!(3)));
    }
}
