use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One protected search engine: the domain to intercept and the
/// provider-published CNAME that forces filtered results.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchEngineConfig {
    pub domain: String,
    pub enforced_cname: String,
}

/// Safe-search enforcement configuration.
///
/// `client_groups` maps a group name to the engines enforced for that
/// group; `search_engines` defines the engines themselves. Keys are
/// unique, order is irrelevant, and the whole structure is immutable
/// after stage construction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SafeSearchConfig {
    #[serde(default)]
    pub client_groups: HashMap<String, Vec<String>>,

    #[serde(default = "default_search_engines")]
    pub search_engines: HashMap<String, SearchEngineConfig>,
}

impl Default for SafeSearchConfig {
    fn default() -> Self {
        Self {
            client_groups: HashMap::new(),
            search_engines: default_search_engines(),
        }
    }
}

impl SafeSearchConfig {
    /// Fill in the built-in engine definitions when none were supplied.
    pub fn apply_defaults(&mut self) {
        if self.search_engines.is_empty() {
            self.search_engines = default_search_engines();
        }
    }

    /// Every engine referenced by a client group must be defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (group, engines) in &self.client_groups {
            for engine in engines {
                if !self.search_engines.contains_key(engine) {
                    return Err(ConfigError::UnknownSearchEngine {
                        group: group.clone(),
                        engine: engine.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Enforcement is meaningful only when at least one client group is
    /// subject to it. An empty mapping disables the stage entirely.
    pub fn is_enabled(&self) -> bool {
        !self.client_groups.is_empty()
    }
}

/// Built-in engine definitions, used unless overridden by the config file.
pub fn default_search_engines() -> HashMap<String, SearchEngineConfig> {
    HashMap::from([
        (
            "bing".to_string(),
            SearchEngineConfig {
                domain: "bing.com".to_string(),
                enforced_cname: "enforcesafesearch.bing.com".to_string(),
            },
        ),
        (
            "google".to_string(),
            SearchEngineConfig {
                domain: "google.com".to_string(),
                enforced_cname: "forcesafesearch.google.com".to_string(),
            },
        ),
        (
            "brave".to_string(),
            SearchEngineConfig {
                domain: "search.brave.com".to_string(),
                enforced_cname: "enforcesafesearch.brave.com".to_string(),
            },
        ),
    ])
}
