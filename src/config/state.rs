// Application state module
// Read-only state shared by every connection

use std::sync::Arc;

use super::types::Config;
use crate::dispatch::ComponentRegistry;
use crate::render::{JsonEnvelopeBuilder, PlainMessageFormatter, ResponseNormalizer};

/// Application state
///
/// Built once at startup and never mutated afterwards, so connections share it
/// without locks. Per-request dispatch state lives in each request's `Dispatcher`.
pub struct AppState {
    pub config: Config,
    pub registry: ComponentRegistry,
    pub normalizer: ResponseNormalizer,
}

impl AppState {
    pub fn new(config: &Config, registry: ComponentRegistry) -> Self {
        let normalizer = ResponseNormalizer::new(
            JsonEnvelopeBuilder::new(config.dispatch.json_view.clone()),
            PlainMessageFormatter::new(config.dispatch.message_view.clone()),
        );
        Self {
            config: config.clone(),
            registry,
            normalizer,
        }
    }

    pub fn shared(config: &Config, registry: ComponentRegistry) -> Arc<Self> {
        Arc::new(Self::new(config, registry))
    }
}
