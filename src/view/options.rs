//! Options shared by both renderers.

use super::format::{Formatter, FormatterRegistry};
use super::visibility::VisibilityDirective;

/// Visibility directive plus formatter overrides for one render request.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub directive: VisibilityDirective,
    pub formatters: FormatterRegistry,
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directive(mut self, directive: VisibilityDirective) -> Self {
        self.directive = directive;
        self
    }

    pub fn with_formatters(mut self, formatters: FormatterRegistry) -> Self {
        self.formatters = formatters;
        self
    }

    /// Show the field at this dotted path.
    pub fn show(mut self, path: impl Into<String>) -> Self {
        self.directive = self.directive.show(path);
        self
    }

    /// Hide the field at this dotted path; wins over `show` for the same path.
    pub fn hide(mut self, path: impl Into<String>) -> Self {
        self.directive = self.directive.hide(path);
        self
    }

    pub fn hide_all_by_default(mut self) -> Self {
        self.directive = self.directive.hide_all();
        self
    }

    /// Register a custom formatter for this request only.
    pub fn formatter(mut self, id: impl Into<String>, formatter: Formatter) -> Self {
        self.formatters.insert(id, formatter);
        self
    }
}
