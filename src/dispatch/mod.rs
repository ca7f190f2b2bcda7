//! Dispatch kernel
//!
//! Resolves a callback descriptor to a registered controller, invokes the named
//! operation and stores the outcome:
//! - `registry`: `(module, controller)` → controller factory
//! - `invoker`: named-operation call with failure capture
//! - `dispatcher`: callback interpretation, default route fallback, outcome slot

pub mod controller;
pub mod dispatcher;
pub mod error;
pub mod invoker;
pub mod registry;
pub mod types;

pub use controller::{
    BoundController, Controller, Handler, HandlerError, HandlerResult, Operation, Operations,
};
pub use dispatcher::{Dispatcher, DispatcherState};
pub use error::DispatchError;
pub use invoker::invoke;
pub use registry::{title_case, ComponentId, ComponentRegistry, Factory};
pub use types::{DispatchOutcome, ErrorRecord, ParameterBag};
