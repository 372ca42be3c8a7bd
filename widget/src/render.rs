//! Result rendering.

use crate::config::Template;
use crate::hooks::Hooks;
use crate::surface::Surface;
use ghost_search::MatchResult;
use ghost_search_core::Record;

/// Default record template: a link to the record's slug, labeled by title.
pub(crate) fn default_template(record: &Record) -> String {
    let title = record.text("title").unwrap_or_default();
    let slug = record.text("slug").unwrap_or_default();
    format!("<a href=\"/{slug}/\">{title}</a>")
}

/// Renders ranked matches into the results container.
pub struct Renderer {
    template: Template,
    limit: usize,
}

impl Renderer {
    pub fn new(template: Template, limit: usize) -> Self {
        Self { template, limit }
    }

    /// Truncates `results` to the display limit, templates each record and
    /// swaps the container content in one call.
    ///
    /// The markup is assembled off-screen first, so the host never observes
    /// a partially rendered list. Truncation keeps the ranked prefix as-is.
    pub fn render(&self, results: &[MatchResult], surface: &mut dyn Surface, hooks: &dyn Hooks) {
        let shown = &results[..results.len().min(self.limit)];

        let mut markup = String::new();
        for result in shown {
            markup.push_str(&(self.template)(result.record()));
        }
        surface.replace_results(&markup);

        hooks.after_display(shown);
    }
}
