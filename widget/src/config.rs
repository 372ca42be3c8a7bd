//! Widget configuration: typed option tree, defaults, override merge.

use crate::error::ConfigError;
use crate::surface::Surface;
use ghost_search::{CaseMatching, QueryMode, SearchOptions};
use ghost_search_core::api::{ApiConfig, ApiVersion, BrowseParams};
use ghost_search_core::Record;
use serde::Deserialize;

/// Fetch trigger strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Fetch when the query input gains focus.
    #[default]
    Focus,
    /// Fetch when the page finishes loading.
    Load,
}

/// Markup template applied to each rendered record.
pub type Template = Box<dyn Fn(&Record) -> String + Send + Sync>;

/// Resolved widget configuration.
///
/// Built once via [`Config::resolve`]; immutable afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    pub api: ApiConfig,
    /// Selector of the query input element.
    pub input: String,
    /// Selector of the results container.
    pub results: String,
    /// Optional selector of a search button. When set, queries run on click
    /// instead of key-up.
    pub button: Option<String>,
    /// Pre-populated query; forces a fetch-and-query on load.
    pub default_value: String,
    pub trigger: Trigger,
    /// Content API resource holding the corpus.
    pub resource: String,
    pub parameters: BrowseParams,
    pub search: SearchOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            input: "#ghost-search-field".to_string(),
            results: "#ghost-search-results".to_string(),
            button: None,
            default_value: String::new(),
            trigger: Trigger::default(),
            resource: "posts".to_string(),
            parameters: BrowseParams::default(),
            search: SearchOptions::default(),
        }
    }
}

impl Config {
    /// Merges `overrides` over the defaults.
    ///
    /// Nested override structs recurse field by field; leaf overrides
    /// (arrays included) replace the default wholesale; `None` keeps the
    /// default. Returns a fresh tree; defaults are never shared or mutated
    /// across instances.
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        let mut config = Self::default();

        if let Some(host) = overrides.host {
            config.api.host = host;
        }
        if let Some(key) = overrides.key {
            config.api.key = key;
        }
        if let Some(version) = overrides.version {
            config.api.version = version;
        }
        if let Some(input) = overrides.input {
            config.input = input;
        }
        if let Some(results) = overrides.results {
            config.results = results;
        }
        if let Some(button) = overrides.button {
            config.button = Some(button);
        }
        if let Some(default_value) = overrides.default_value {
            config.default_value = default_value;
        }
        if let Some(trigger) = overrides.trigger {
            config.trigger = trigger;
        }
        if let Some(api) = overrides.api {
            if let Some(resource) = api.resource {
                config.resource = resource;
            }
            if let Some(parameters) = api.parameters {
                merge_parameters(&mut config.parameters, parameters);
            }
        }
        if let Some(search) = overrides.search {
            merge_search(&mut config.search, search);
        }

        config
    }

    /// Checks everything that must hold before any binding is installed.
    pub fn validate(&self, surface: &dyn Surface) -> Result<(), ConfigError> {
        if self.api.host.is_empty() {
            return Err(ConfigError::MissingHost);
        }
        if self.api.key.is_empty() {
            return Err(ConfigError::MissingKey);
        }
        if !surface.has_element(&self.input) {
            return Err(ConfigError::ElementNotFound(self.input.clone()));
        }
        if !surface.has_element(&self.results) {
            return Err(ConfigError::ElementNotFound(self.results.clone()));
        }
        if let Some(button) = &self.button {
            if !surface.has_element(button) {
                return Err(ConfigError::ElementNotFound(button.clone()));
            }
        }
        Ok(())
    }
}

/// Caller-supplied overrides, merged over [`Config::default`].
///
/// Unknown keys in a deserialized override document are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub key: Option<String>,
    pub version: Option<ApiVersion>,
    pub input: Option<String>,
    pub results: Option<String>,
    pub button: Option<String>,
    pub default_value: Option<String>,
    pub trigger: Option<Trigger>,
    pub api: Option<ApiOverrides>,
    pub search: Option<SearchOverrides>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiOverrides {
    pub resource: Option<String>,
    pub parameters: Option<ParameterOverrides>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParameterOverrides {
    pub limit: Option<String>,
    pub fields: Option<Vec<String>>,
    pub filter: Option<String>,
    pub include: Option<String>,
    pub order: Option<String>,
    pub formats: Option<String>,
    pub page: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchOverrides {
    pub keys: Option<Vec<String>>,
    pub limit: Option<usize>,
    pub mode: Option<QueryMode>,
    pub case_matching: Option<CaseMatching>,
    pub unicode_normalization: Option<bool>,
    pub tokenize: Option<bool>,
    pub include_matches: Option<bool>,
    pub min_match_char_length: Option<usize>,
    pub max_pattern_length: Option<usize>,
}

fn merge_parameters(target: &mut BrowseParams, overrides: ParameterOverrides) {
    if let Some(limit) = overrides.limit {
        target.limit = limit;
    }
    if let Some(fields) = overrides.fields {
        target.fields = fields;
    }
    if let Some(filter) = overrides.filter {
        target.filter = filter;
    }
    if let Some(include) = overrides.include {
        target.include = include;
    }
    if let Some(order) = overrides.order {
        target.order = order;
    }
    if let Some(formats) = overrides.formats {
        target.formats = formats;
    }
    if let Some(page) = overrides.page {
        target.page = page;
    }
}

fn merge_search(target: &mut SearchOptions, overrides: SearchOverrides) {
    if let Some(keys) = overrides.keys {
        target.keys = keys;
    }
    if let Some(limit) = overrides.limit {
        target.limit = limit;
    }
    if let Some(mode) = overrides.mode {
        target.mode = mode;
    }
    if let Some(case_matching) = overrides.case_matching {
        target.case_matching = case_matching;
    }
    if let Some(unicode_normalization) = overrides.unicode_normalization {
        target.unicode_normalization = unicode_normalization;
    }
    if let Some(tokenize) = overrides.tokenize {
        target.tokenize = tokenize;
    }
    if let Some(include_matches) = overrides.include_matches {
        target.include_matches = include_matches;
    }
    if let Some(min_match_char_length) = overrides.min_match_char_length {
        target.min_match_char_length = min_match_char_length;
    }
    if let Some(max_pattern_length) = overrides.max_pattern_length {
        target.max_pattern_length = max_pattern_length;
    }
}
