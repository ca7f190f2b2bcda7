//! Widgets module
//!
//! A fixed in-memory catalog served by two controllers: the public
//! `WidgetsController` and the `AdminController`.

use serde::Serialize;
use serde_json::json;

use crate::dispatch::{Controller, HandlerError, HandlerResult, Operations, ParameterBag};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Widget {
    pub id: i64,
    pub name: String,
    pub stock: u32,
}

fn catalog() -> Vec<Widget> {
    [(1, "Sprocket", 12), (2, "Gear", 40), (3, "Flange", 0)]
        .into_iter()
        .map(|(id, name, stock)| Widget {
            id,
            name: name.to_string(),
            stock,
        })
        .collect()
}

fn to_value<T: Serialize>(value: &T) -> HandlerResult {
    serde_json::to_value(value)
        .map_err(|e| HandlerError::internal(format!("Failed to encode widgets: {e}")))
}

/// `Widgets.Controllers.WidgetsController`
#[derive(Debug)]
pub struct WidgetsController {
    widgets: Vec<Widget>,
}

impl Default for WidgetsController {
    fn default() -> Self {
        Self { widgets: catalog() }
    }
}

impl WidgetsController {
    /// Catalog overview, reached through the one-entry callback `["widgets"]`
    fn widgets(&mut self, _params: &ParameterBag) -> HandlerResult {
        Ok(json!({
            "view": "widgets/index",
            "data": {
                "count": self.widgets.len(),
                "widgets": to_value(&self.widgets)?,
            }
        }))
    }

    fn show(&mut self, params: &ParameterBag) -> HandlerResult {
        let id = params
            .get_i64("id")
            .ok_or_else(|| HandlerError::bad_request("Parameter 'id' must be an integer"))?;
        let widget = self
            .widgets
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| HandlerError::not_found(format!("Widget {id} not found")))?;

        Ok(json!({
            "view": "widgets/show",
            "data": { "widget": to_value(widget)? }
        }))
    }

    /// Raw list without a view, left to the envelope builder
    fn list(&mut self, params: &ParameterBag) -> HandlerResult {
        let in_stock = params.get_str("in_stock") == Some("true");
        let widgets: Vec<&Widget> = self
            .widgets
            .iter()
            .filter(|w| !in_stock || w.stock > 0)
            .collect();
        to_value(&widgets)
    }
}

impl Controller for WidgetsController {
    fn operations() -> Operations<Self> {
        Operations::new()
            .with("widgets", Self::widgets)
            .with("show", Self::show)
            .with("list", Self::list)
    }
}

/// `Widgets.Controllers.AdminController`
#[derive(Debug)]
pub struct AdminController {
    widgets: Vec<Widget>,
}

impl Default for AdminController {
    fn default() -> Self {
        Self { widgets: catalog() }
    }
}

impl AdminController {
    fn show(&mut self, _params: &ParameterBag) -> HandlerResult {
        let total_stock: u32 = self.widgets.iter().map(|w| w.stock).sum();
        let out_of_stock: Vec<&str> = self
            .widgets
            .iter()
            .filter(|w| w.stock == 0)
            .map(|w| w.name.as_str())
            .collect();
        Ok(json!({
            "view": "widgets/admin",
            "data": {
                "total_stock": total_stock,
                "out_of_stock": out_of_stock,
            }
        }))
    }

    /// The catalog is read-only
    fn purge(&mut self, _params: &ParameterBag) -> HandlerResult {
        Err(HandlerError::forbidden("Catalog is read-only"))
    }
}

impl Controller for AdminController {
    fn operations() -> Operations<Self> {
        Operations::new()
            .with("show", Self::show)
            .with("purge", Self::purge)
    }
}
