//! Show/hide resolution over a schema tree.

use super::schema::{FieldNode, Schema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which fields a render call displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityDirective {
    pub show_paths: BTreeSet<String>,
    pub hide_paths: BTreeSet<String>,
    pub hide_all_by_default: bool,
}

impl VisibilityDirective {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(mut self, path: impl Into<String>) -> Self {
        self.show_paths.insert(path.into());
        self
    }

    pub fn hide(mut self, path: impl Into<String>) -> Self {
        self.hide_paths.insert(path.into());
        self
    }

    pub fn hide_all(mut self) -> Self {
        self.hide_all_by_default = true;
        self
    }

    /// Visibility of the synthetic root.
    ///
    /// Listing any undotted path under `show_paths` switches to selective
    /// display: everything not explicitly shown starts hidden.
    pub fn root_default(&self) -> bool {
        if self.hide_all_by_default {
            return false;
        }
        !self.show_paths.iter().any(|path| !path.contains('.'))
    }

    /// Hide beats show; no match inherits.
    fn resolve(&self, address: &str, inherited: bool) -> bool {
        if self.hide_paths.contains(address) {
            false
        } else if self.show_paths.contains(address) {
            true
        } else {
            inherited
        }
    }
}

/// Resolved visibility of every node in one schema, indexed by node id.
#[derive(Debug, Clone)]
pub struct Visibility {
    shown: Vec<bool>,
}

impl Visibility {
    pub fn resolve(schema: &Schema, directive: &VisibilityDirective) -> Self {
        let mut shown = vec![false; schema.len()];
        let root_default = directive.root_default();
        shown[0] = root_default;
        for child in &schema.root().children {
            resolve_node(child, root_default, directive, &mut shown);
        }
        log::trace!(
            "resolved visibility: root default {}, {} of {} nodes shown",
            root_default,
            shown.iter().filter(|s| **s).count(),
            shown.len()
        );
        Self { shown }
    }

    pub fn is_shown(&self, node: &FieldNode) -> bool {
        self.shown.get(node.id).copied().unwrap_or(false)
    }
}

fn resolve_node(
    node: &FieldNode,
    inherited: bool,
    directive: &VisibilityDirective,
    shown: &mut [bool],
) {
    let visible = directive.resolve(&node.address(), inherited);
    shown[node.id] = visible;
    // hidden groups still recurse; children may re-enable themselves
    for child in &node.children {
        resolve_node(child, visible, directive, shown);
    }
}
