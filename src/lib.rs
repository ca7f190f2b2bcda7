//! Request dispatch kernel with a thin HTTP shell.
//!
//! - [`dispatch`]: component registry, operation invoker and the per-request
//!   [`dispatch::Dispatcher`] that stores one outcome at a time.
//! - [`render`]: the normalizer that turns outcomes into views, plus the
//!   collaborator traits it calls.
//! - [`routing`]: the route provider seam and a path-segment provider.
//! - [`handler`], [`server`], [`http`]: the hyper shell around the kernel.

pub mod config;
pub mod dispatch;
pub mod handler;
pub mod http;
pub mod logger;
pub mod modules;
pub mod render;
pub mod routing;
pub mod server;
