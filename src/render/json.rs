// JSON collaborators used by the HTTP shell

use serde_json::{json, Value};

use super::{EnvelopeBuilder, MessageFormatter, Renderer, View};
use crate::logger;

/// Wraps structured data under a fixed view name
#[derive(Debug, Clone)]
pub struct JsonEnvelopeBuilder {
    view: String,
}

impl JsonEnvelopeBuilder {
    pub fn new(view: impl Into<String>) -> Self {
        Self { view: view.into() }
    }
}

impl EnvelopeBuilder for JsonEnvelopeBuilder {
    fn build(&self, raw: &Value) -> View {
        View::new(self.view.clone(), raw.clone())
    }
}

/// Wraps a scalar as `{"message": <value>}` under a fixed view name
#[derive(Debug, Clone)]
pub struct PlainMessageFormatter {
    view: String,
}

impl PlainMessageFormatter {
    pub fn new(view: impl Into<String>) -> Self {
        Self { view: view.into() }
    }
}

impl MessageFormatter for PlainMessageFormatter {
    fn build(&self, raw: &Value) -> View {
        View::new(self.view.clone(), json!({ "message": raw }))
    }
}

/// Serializes the rendered view as `{"view": ..., "data": ...}`
#[derive(Debug, Default)]
pub struct JsonRenderer {
    body: Option<Vec<u8>>,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_rendered(&self) -> bool {
        self.body.is_some()
    }

    /// Rendered body, empty if nothing was rendered
    pub fn into_body(self) -> Vec<u8> {
        self.body.unwrap_or_default()
    }
}

impl Renderer for JsonRenderer {
    fn render(&mut self, view: &str, data: &Value) {
        let document = json!({ "view": view, "data": data });
        let body = match serde_json::to_vec_pretty(&document) {
            Ok(bytes) => bytes,
            Err(e) => {
                logger::log_error(&format!("Failed to serialize view '{view}': {e}"));
                br#"{"view":"error","data":{"message":"Internal server error"}}"#.to_vec()
            }
        };
        self.body = Some(body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ResponseNormalizer;

    #[test]
    fn test_envelope_builder_keeps_data() {
        let view = JsonEnvelopeBuilder::new("json").build(&json!({"a": 1}));
        assert_eq!(view, View::new("json", json!({"a": 1})));
    }

    #[test]
    fn test_message_formatter_wraps_scalar() {
        let view = PlainMessageFormatter::new("message").build(&json!("Welcome"));
        assert_eq!(view, View::new("message", json!({"message": "Welcome"})));
    }

    #[test]
    fn test_renderer_output_document() {
        let mut renderer = JsonRenderer::new();
        assert!(!renderer.is_rendered());
        renderer.render("home", &json!({"title": "Home"}));
        assert!(renderer.is_rendered());

        let body: Value = serde_json::from_slice(&renderer.into_body()).unwrap();
        assert_eq!(body, json!({"view": "home", "data": {"title": "Home"}}));
    }

    #[test]
    fn test_error_record_renders_through_envelope() {
        let normalizer = ResponseNormalizer::new(
            JsonEnvelopeBuilder::new("json"),
            PlainMessageFormatter::new("message"),
        );
        let mut renderer = JsonRenderer::new();
        normalizer.render(
            &json!({"status": 404, "message": "Component not found", "data": []}),
            &mut renderer,
        );

        let body: Value = serde_json::from_slice(&renderer.into_body()).unwrap();
        assert_eq!(body["view"], "json");
        assert_eq!(body["data"]["status"], 404);
    }
}
