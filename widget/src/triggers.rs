//! Trigger strategy selection.

use crate::config::{Config, Trigger};

/// Host events the widget reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The page finished loading.
    Load,
    /// The query input gained focus.
    InputFocus,
    /// A key was released inside the query input.
    KeyUp,
    /// The configured button was clicked.
    ButtonClick,
}

/// When the one-time corpus fetch runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOn {
    Focus,
    Load,
}

/// When queries run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryOn {
    /// Every key-up in the query input.
    KeyUp,
    /// Clicks on the configured button. The host must also suppress the
    /// surrounding form's default submission.
    Button {
        selector: String,
        intercept_submit: bool,
    },
}

/// Event bindings derived from the resolved configuration.
///
/// The host installs exactly these bindings and forwards the matching
/// [`WidgetEvent`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerPlan {
    pub fetch_on: FetchOn,
    /// A pre-populated default query also fetches on load, regardless of
    /// `fetch_on`.
    pub fetch_on_load_for_default: bool,
    pub query_on: QueryOn,
}

impl TriggerPlan {
    pub fn from_config(config: &Config) -> Self {
        let fetch_on = match config.trigger {
            Trigger::Focus => FetchOn::Focus,
            Trigger::Load => FetchOn::Load,
        };
        let query_on = match &config.button {
            Some(selector) => QueryOn::Button {
                selector: selector.clone(),
                intercept_submit: true,
            },
            None => QueryOn::KeyUp,
        };

        Self {
            fetch_on,
            fetch_on_load_for_default: !config.default_value.is_empty(),
            query_on,
        }
    }

    pub(crate) fn fetches_on(&self, event: &WidgetEvent) -> bool {
        match event {
            WidgetEvent::InputFocus => self.fetch_on == FetchOn::Focus,
            WidgetEvent::Load => self.fetch_on == FetchOn::Load || self.fetch_on_load_for_default,
            _ => false,
        }
    }

    pub(crate) fn queries_on(&self, event: &WidgetEvent) -> bool {
        matches!(
            (&self.query_on, event),
            (QueryOn::KeyUp, WidgetEvent::KeyUp)
                | (QueryOn::Button { .. }, WidgetEvent::ButtonClick)
        )
    }
}
