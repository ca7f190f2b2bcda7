// Response normalizer
// Chooses which collaborator turns a raw result into a view; renders nothing itself

use serde_json::{Map, Value};

use super::{EnvelopeBuilder, MessageFormatter, Renderer, View};

pub struct ResponseNormalizer {
    envelope: Box<dyn EnvelopeBuilder + Send + Sync>,
    formatter: Box<dyn MessageFormatter + Send + Sync>,
}

impl ResponseNormalizer {
    pub fn new(
        envelope: impl EnvelopeBuilder + Send + Sync + 'static,
        formatter: impl MessageFormatter + Send + Sync + 'static,
    ) -> Self {
        Self {
            envelope: Box::new(envelope),
            formatter: Box::new(formatter),
        }
    }

    /// Map a result to `(view, data)`:
    /// 1. objects with a `view` key pass through (`data` defaults to `{}`)
    /// 2. other objects and arrays go to the envelope builder
    /// 3. scalars go to the message formatter
    pub fn normalize(&self, result: &Value) -> View {
        match result {
            Value::Object(map) if map.contains_key("view") => {
                let view = match &map["view"] {
                    Value::String(name) => name.clone(),
                    other => other.to_string(),
                };
                let data = map
                    .get("data")
                    .cloned()
                    .unwrap_or_else(|| Value::Object(Map::new()));
                View { view, data }
            }
            Value::Object(_) | Value::Array(_) => self.envelope.build(result),
            _ => self.formatter.build(result),
        }
    }

    /// Normalize and hand the view to `renderer`
    pub fn render(&self, result: &Value, renderer: &mut dyn Renderer) {
        let view = self.normalize(result);
        renderer.render(&view.view, &view.data);
    }
}
