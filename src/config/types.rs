use crate::error::ConfigError;
use crate::view::{FormatterRegistry, ViewOptions, VisibilityDirective};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub view: ViewConfig,
    pub output: OutputConfig,
    /// Formatter aliases: `alias = "builtin-id"`
    pub formatters: BTreeMap<String, String>,
}

/// Default visibility applied before command-line flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub show: Vec<String>,
    pub hide: Vec<String>,
    pub hide_all_by_default: bool,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces between aligned columns
    pub padding: usize,
    /// Colorize error and check output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            padding: 2,
            color: true,
        }
    }
}

impl Config {
    /// Visibility directive from the `[view]` section.
    pub fn directive(&self) -> VisibilityDirective {
        let mut directive = VisibilityDirective::new();
        directive.show_paths.extend(self.view.show.iter().cloned());
        directive.hide_paths.extend(self.view.hide.iter().cloned());
        directive.hide_all_by_default = self.view.hide_all_by_default;
        directive
    }

    /// Formatter registry with every configured alias resolved.
    pub fn formatters(&self) -> Result<FormatterRegistry, ConfigError> {
        let mut registry = FormatterRegistry::new();
        for (alias, target) in &self.formatters {
            registry = registry.with_alias(alias.as_str(), target)?;
        }
        Ok(registry)
    }

    pub fn view_options(&self) -> Result<ViewOptions, ConfigError> {
        Ok(ViewOptions::new()
            .with_directive(self.directive())
            .with_formatters(self.formatters()?))
    }
}
