//! Bundled application modules
//!
//! Each module contributes controllers to the component registry:
//! - `home`: landing page (`Home.Controllers.HomeController`)
//! - `widgets`: a small in-memory catalog (`Widgets.Controllers.WidgetsController`,
//!   `Widgets.Controllers.AdminController`)

pub mod home;
pub mod widgets;

use crate::dispatch::ComponentRegistry;

/// Register every bundled controller
pub fn register_all(registry: &mut ComponentRegistry) {
    registry
        .register_default::<home::HomeController>("home", None)
        .register_default::<widgets::WidgetsController>("widgets", None)
        .register_default::<widgets::AdminController>("widgets", Some("admin"));
}

/// A registry holding every bundled controller
pub fn registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    register_all(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_components() {
        let registry = registry();
        let ids: Vec<_> = registry.ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "Home.Controllers.HomeController",
                "Widgets.Controllers.AdminController",
                "Widgets.Controllers.WidgetsController",
            ]
        );
    }
}
