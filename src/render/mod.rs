//! Rendering collaborators
//!
//! The dispatcher never renders. After a dispatch the caller passes the outcome
//! to [`ResponseNormalizer`], which picks the collaborator that turns it into a
//! [`View`] and forwards that view to a [`Renderer`].

mod json;
mod normalizer;

pub use json::{JsonEnvelopeBuilder, JsonRenderer, PlainMessageFormatter};
pub use normalizer::ResponseNormalizer;

use serde::Serialize;
use serde_json::Value;

/// A view identifier plus the data it is rendered with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub view: String,
    pub data: Value,
}

impl View {
    pub fn new(view: impl Into<String>, data: Value) -> Self {
        Self {
            view: view.into(),
            data,
        }
    }
}

/// Output side: turns a view into whatever the host writes back
pub trait Renderer {
    fn render(&mut self, view: &str, data: &Value);
}

/// Wraps structured data that carries no `view` key
pub trait EnvelopeBuilder {
    fn build(&self, raw: &Value) -> View;
}

/// Wraps scalar results (strings, numbers, booleans, null)
pub trait MessageFormatter {
    fn build(&self, raw: &Value) -> View;
}
