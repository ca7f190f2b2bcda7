//! Request dispatcher
//!
//! One `Dispatcher` serves one request. It resolves a callback descriptor to a
//! controller through the [`ComponentRegistry`], invokes the named operation and
//! keeps the outcome until the next `dispatch` call overwrites it.
//!
//! Callback descriptors are read positionally:
//!
//! | entries | module | controller | method |
//! |---------|--------|------------|--------|
//! | 1       | `[0]`  | `[0]`      | `[0]`  |
//! | 2       | `[0]`  | `[0]`      | `[1]`  |
//! | 3+      | `[0]`  | `[1]`      | `[2]`  |
//!
//! The one-entry form calls an operation named after the module on the module's
//! own controller (`["home"]` → `Home.Controllers.HomeController::home`).

use serde_json::Value;

use super::error::DispatchError;
use super::invoker::invoke;
use super::registry::{ComponentId, ComponentRegistry};
use super::types::{DispatchOutcome, ErrorRecord, ParameterBag};
use crate::logger;
use crate::routing::{DefaultRoute, RouteProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    Idle,
    Dispatched,
}

#[derive(Debug)]
pub struct Dispatcher<'r> {
    registry: &'r ComponentRegistry,
    default_route: Option<DefaultRoute>,
    outcome: Option<DispatchOutcome>,
    state: DispatcherState,
}

impl<'r> Dispatcher<'r> {
    pub const fn new(registry: &'r ComponentRegistry, default_route: Option<DefaultRoute>) -> Self {
        Self {
            registry,
            default_route,
            outcome: None,
            state: DispatcherState::Idle,
        }
    }

    /// Build a dispatcher seeded with the provider's route
    pub fn from_provider(registry: &'r ComponentRegistry, provider: &dyn RouteProvider) -> Self {
        Self::new(registry, Some(DefaultRoute::from_provider(provider)))
    }

    /// Run one dispatch attempt.
    ///
    /// Returns `true` when a controller was resolved and invoked (or failed to
    /// be), `false` only when there was nothing to dispatch. The result itself,
    /// success or failure, is read back through [`Self::outcome`].
    pub fn dispatch<S: AsRef<str>>(&mut self, callback: &[S], params: ParameterBag) -> bool {
        self.state = DispatcherState::Dispatched;

        let mut callback: Vec<String> = callback.iter().map(|s| s.as_ref().to_string()).collect();
        let mut params = params;

        if callback.is_empty() {
            if let Some(route) = &self.default_route {
                callback.clone_from(&route.callback);
                params = route.params.clone();
            } else {
                self.fail(DispatchError::NoCallback);
            }
        } else if params.is_empty() {
            if let Some(route) = &self.default_route {
                params = route.params.clone();
            }
        }

        let (module, controller, method) = match callback.as_slice() {
            [] => {
                self.fail(DispatchError::NoCallback);
                return false;
            }
            [module] => (module.as_str(), module.as_str(), module.as_str()),
            [module, method] => (module.as_str(), module.as_str(), method.as_str()),
            [module, controller, method, ..] => {
                (module.as_str(), controller.as_str(), method.as_str())
            }
        };

        let outcome = match self.module_response(module, controller, method, &params) {
            Ok(value) => DispatchOutcome::Success(value),
            Err(err) => DispatchOutcome::Failure(err.into()),
        };
        self.outcome = Some(outcome);
        true
    }

    /// Outcome of the latest `dispatch`, `None` before the first call
    pub const fn outcome(&self) -> Option<&DispatchOutcome> {
        self.outcome.as_ref()
    }

    pub const fn error(&self) -> Option<&ErrorRecord> {
        match &self.outcome {
            Some(DispatchOutcome::Failure(record)) => Some(record),
            _ => None,
        }
    }

    pub const fn response(&self) -> Option<&Value> {
        match &self.outcome {
            Some(DispatchOutcome::Success(value)) => Some(value),
            _ => None,
        }
    }

    pub const fn state(&self) -> DispatcherState {
        self.state
    }

    pub const fn default_route(&self) -> Option<&DefaultRoute> {
        self.default_route.as_ref()
    }

    /// End of request: release the default route and the stored outcome
    pub fn teardown(mut self) {
        let had_outcome = self.outcome.take().is_some();
        self.default_route = None;
        logger::log_debug(&format!(
            "[Dispatch] Teardown (state: {:?}, had outcome: {had_outcome})",
            self.state
        ));
    }

    fn fail(&mut self, err: DispatchError) {
        self.outcome = Some(DispatchOutcome::Failure(err.into()));
    }

    fn module_response(
        &self,
        module: &str,
        controller: &str,
        method: &str,
        params: &ParameterBag,
    ) -> Result<Value, DispatchError> {
        let component = ComponentId::new(module, Some(controller));
        logger::log_debug(&format!("[Dispatch] {component}::{method}"));

        let mut handler = self.registry.resolve(module, Some(controller))?;
        invoke(handler.as_mut(), component.as_str(), method, params)
    }
}
