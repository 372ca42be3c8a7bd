//! Headless search widget over a remote content collection.
//!
//! # Design
//!
//! - The host page is reached only through the [`Surface`] seam; rendering
//!   replaces the results container content in a single call, so the host
//!   never observes a partially built list.
//! - Configuration is a typed tree resolved once from defaults plus
//!   overrides; everything downstream consumes the resolved copy.
//! - Lifecycle hooks are side-channel notifications with no-op defaults;
//!   they never steer control flow.
//! - Failures are logged and terminal for the operation in progress. The
//!   widget stays responsive: a failed fetch retries on the next trigger.

mod config;
mod error;
mod hooks;
mod render;
mod surface;
mod triggers;
mod widget;

pub use config::{ApiOverrides, Config, ConfigOverrides, ParameterOverrides, SearchOverrides, Template, Trigger};
pub use error::{ConfigError, Error, Result};
pub use hooks::{Hooks, NoopHooks};
pub use render::Renderer;
pub use surface::Surface;
pub use triggers::{FetchOn, QueryOn, TriggerPlan, WidgetEvent};
pub use widget::SearchWidget;
