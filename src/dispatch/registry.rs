//! Component registry
//!
//! Maps `(module, controller)` pairs to controller factories. Keys are the
//! canonical identifier `<Module>.Controllers.<Controller>Controller`, built from
//! title-cased names, so lookups are exact-match only.

use std::collections::HashMap;
use std::fmt;

use super::controller::{BoundController, Controller, Handler, HandlerError};
use super::error::DispatchError;
use crate::logger;

/// Type-erased controller constructor
pub type Factory = Box<dyn Fn() -> Result<Box<dyn Handler>, HandlerError> + Send + Sync>;

/// Canonical component identifier, e.g. `Widgets.Controllers.AdminController`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(String);

impl ComponentId {
    /// Build the identifier for a module and optional controller.
    /// The controller defaults to the module name.
    pub fn new(module: &str, controller: Option<&str>) -> Self {
        let module = title_case(module);
        let controller = controller.map_or_else(|| module.clone(), title_case);
        Self(format!("{module}.Controllers.{controller}Controller"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper-case the first ASCII letter of every word, words being separated by
/// ASCII space, tab, CR, LF, vertical tab or form feed.
/// Everything else, non-ASCII letters included, is left untouched.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        out.push(if at_word_start { ch.to_ascii_uppercase() } else { ch });
        at_word_start = matches!(ch, ' ' | '\t' | '\r' | '\n' | '\x0b' | '\x0c');
    }
    out
}

/// Registry of controller factories, populated once at startup
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<ComponentId, Factory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller factory under `(module, controller)`.
    /// A second registration for the same identifier replaces the first.
    pub fn register<C, F>(&mut self, module: &str, controller: Option<&str>, factory: F) -> &mut Self
    where
        C: Controller,
        F: Fn() -> Result<C, HandlerError> + Send + Sync + 'static,
    {
        let id = ComponentId::new(module, controller);
        let erased: Factory = Box::new(move || {
            factory().map(|instance| Box::new(BoundController::new(instance)) as Box<dyn Handler>)
        });
        if self.components.insert(id.clone(), erased).is_some() {
            logger::log_warning(&format!("Component {id} registered twice, keeping the latest"));
        }
        self
    }

    /// Register a controller whose construction cannot fail
    pub fn register_default<C>(&mut self, module: &str, controller: Option<&str>) -> &mut Self
    where
        C: Controller + Default,
    {
        self.register(module, controller, || Ok(C::default()))
    }

    pub fn contains(&self, module: &str, controller: Option<&str>) -> bool {
        self.components
            .contains_key(&ComponentId::new(module, controller))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Registered identifiers in sorted order
    pub fn ids(&self) -> Vec<&ComponentId> {
        let mut ids: Vec<_> = self.components.keys().collect();
        ids.sort();
        ids
    }

    /// Instantiate the controller registered for `(module, controller)`
    pub fn resolve(
        &self,
        module: &str,
        controller: Option<&str>,
    ) -> Result<Box<dyn Handler>, DispatchError> {
        let id = ComponentId::new(module, controller);
        let Some(factory) = self.components.get(&id) else {
            logger::log_debug(&format!("[Resolve] {id} is not registered"));
            return Err(DispatchError::NotFoundComponent {
                component: id.to_string(),
            });
        };

        factory().map_err(|source| {
            logger::log_warning(&format!("Failed to instantiate {id}: {source}"));
            DispatchError::Instantiation {
                component: id.to_string(),
                source,
            }
        })
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("components", &self.ids())
            .finish()
    }
}
