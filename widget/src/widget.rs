//! Widget orchestration.

use crate::config::{Config, Template};
use crate::error::Result;
use crate::hooks::{Hooks, NoopHooks};
use crate::render::{Renderer, default_template};
use crate::surface::Surface;
use crate::triggers::{TriggerPlan, WidgetEvent};
use ghost_search::QueryOrchestrator;
use ghost_search_core::api::{ContentApi, ContentSource};
use ghost_search_core::fetch::{Corpus, FetchGate};
use std::sync::Arc;

/// The search widget.
///
/// Owns the fetch gate, the query orchestrator and the renderer. The host
/// installs the bindings described by [`SearchWidget::plan`] and forwards
/// every event to [`SearchWidget::handle_event`].
pub struct SearchWidget<S: Surface> {
    config: Config,
    plan: TriggerPlan,
    surface: S,
    source: Arc<dyn ContentSource>,
    gate: FetchGate,
    orchestrator: QueryOrchestrator,
    renderer: Renderer,
    hooks: Box<dyn Hooks>,
    /// Pending pre-populated query; cleared after its first render.
    default_value: Option<String>,
}

impl<S: Surface> SearchWidget<S> {
    /// Validates the configuration against the surface and assembles the
    /// widget around the content API.
    ///
    /// A missing selector or credential aborts initialization: the
    /// diagnostic is logged, the error is returned and no binding is
    /// installed.
    pub fn new(config: Config, surface: S) -> Result<Self> {
        let source = Arc::new(ContentApi::new(
            config.api.clone(),
            config.resource.clone(),
            config.parameters.clone(),
        ));
        Self::with_source(config, surface, source)
    }

    /// Like [`SearchWidget::new`], with an explicit corpus source.
    pub fn with_source(config: Config, surface: S, source: Arc<dyn ContentSource>) -> Result<Self> {
        if let Err(err) = config.validate(&surface) {
            log::error!("search widget initialization aborted: {err}");
            return Err(err.into());
        }

        let plan = TriggerPlan::from_config(&config);
        let orchestrator = QueryOrchestrator::new(config.search.clone());
        let renderer = Renderer::new(Box::new(default_template), config.search.limit);
        let default_value = (!config.default_value.is_empty()).then(|| config.default_value.clone());

        let mut widget = Self {
            config,
            plan,
            surface,
            source,
            gate: FetchGate::new(),
            orchestrator,
            renderer,
            hooks: Box::new(NoopHooks),
            default_value,
        };
        if let Some(value) = widget.default_value.clone() {
            widget.surface.set_input_value(&value);
        }
        Ok(widget)
    }

    /// Replaces the record template.
    pub fn with_template(mut self, template: Template) -> Self {
        self.renderer = Renderer::new(template, self.config.search.limit);
        self
    }

    /// Replaces the lifecycle hooks.
    pub fn with_hooks(mut self, hooks: Box<dyn Hooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn plan(&self) -> &TriggerPlan {
        &self.plan
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The corpus, once fetched.
    pub fn corpus(&self) -> Option<Corpus> {
        self.gate.corpus()
    }

    /// Feeds one host event through the trigger plan.
    ///
    /// Fetch and query failures are logged and do not propagate: the widget
    /// stays responsive, and the gate retries on the next fetch trigger.
    pub async fn handle_event(&mut self, event: WidgetEvent) {
        let fetches = self.plan.fetches_on(&event);
        let queries = self.plan.queries_on(&event);
        if !fetches && !queries {
            return;
        }

        self.hooks.before_display();

        if fetches {
            if !self.fetch_corpus().await {
                return;
            }
            // A pre-populated default query renders as soon as the corpus
            // is available.
            if self.default_value.is_some() {
                self.display().await;
            }
        }

        if queries {
            self.display().await;
        }
    }

    /// Drives the fetch gate. Returns whether the corpus is available.
    async fn fetch_corpus(&self) -> bool {
        let hooks = self.hooks.as_ref();
        let source = Arc::clone(&self.source);

        let outcome = self
            .gate
            .ensure_fetched(|| async move {
                hooks.before_fetch();
                let records = source.browse().await?;
                hooks.after_fetch(&records);
                Ok(records)
            })
            .await;

        match outcome {
            Ok(Some(_)) => true,
            // Another trigger's fetch is still in flight; coalesce.
            Ok(None) => false,
            Err(err) => {
                log::error!("corpus fetch failed: {err}");
                false
            }
        }
    }

    /// Runs the query pipeline and renders the ranked list.
    ///
    /// A query trigger that arrives before the corpus is ready is a no-op;
    /// fetching stays the gate's business.
    async fn display(&mut self) {
        let Some(corpus) = self.gate.corpus() else {
            return;
        };

        let query = match &self.default_value {
            Some(value) => value.clone(),
            None => self.surface.input_value().trim().to_string(),
        };

        self.hooks.before_search();
        match self.orchestrator.query(&corpus, &query).await {
            Ok(results) => {
                self.renderer
                    .render(&results, &mut self.surface, self.hooks.as_ref());
                self.default_value = None;
            }
            Err(err) => log::error!("query failed: {err}"),
        }
    }
}
