//! Layout files describe untyped (JSON/YAML) records.
//!
//! ```toml
//! name = "TrainJob"
//!
//! [[fields]]
//! key = "name"
//! title = "NAME"
//!
//! [[fields]]
//! key = "usage"
//! group = { name = "USAGE" }
//!
//! [[fields.fields]]
//! key = "memory"
//! title = "MEM"
//! format = "byte-size"
//! ```
//!
//! A field with child `fields` (or a `group`) is a record field; everything
//! else is a scalar.

use crate::error::LayoutError;
use crate::view::{Field, GroupSpec, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<LayoutField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutField {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<LayoutGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<LayoutField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub flatten: bool,
}

impl Layout {
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let content = fs::read_to_string(path).map_err(|source| LayoutError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| LayoutError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        let mut descriptor = TypeDescriptor::new(self.name.as_str());
        for field in &self.fields {
            descriptor.push(field.to_field());
        }
        descriptor
    }
}

impl LayoutField {
    fn is_record(&self) -> bool {
        self.group.is_some() || !self.fields.is_empty()
    }

    fn to_field(&self) -> Field {
        let mut field = if self.is_record() {
            let mut nested = TypeDescriptor::new(self.key.as_str());
            for child in &self.fields {
                nested.push(child.to_field());
            }
            Field::record(self.key.as_str(), nested)
        } else {
            Field::new(self.key.as_str())
        };

        if let Some(title) = &self.title {
            field = field.with_title(title.as_str());
        }
        if let Some(default) = &self.default {
            field = field.with_default(default.as_str());
        }
        if let Some(format) = &self.format {
            field = field.with_format(format.as_str());
        }
        if let Some(group) = &self.group {
            let name = if group.name.is_empty() {
                self.title.clone().unwrap_or_else(|| self.key.clone())
            } else {
                group.name.clone()
            };
            field = field.with_group(GroupSpec {
                name,
                flatten: group.flatten,
            });
        }
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{FormatterRegistry, Schema};

    const LAYOUT: &str = r#"
name = "TrainJob"

[[fields]]
key = "name"
title = "NAME"

[[fields]]
key = "meta"
group = { flatten = true }

[[fields.fields]]
key = "namespace"
default = "default"

[[fields]]
key = "usage"
group = { name = "USAGE" }

[[fields.fields]]
key = "memory"
title = "MEM"
format = "byte-size"
"#;

    #[test]
    fn test_parse_layout() {
        let layout: Layout = toml::from_str(LAYOUT).unwrap();
        assert_eq!(layout.name, "TrainJob");
        assert_eq!(layout.fields.len(), 3);
        assert!(layout.fields[1].group.as_ref().unwrap().flatten);
        assert_eq!(layout.fields[2].fields[0].format.as_deref(), Some("byte-size"));
    }

    #[test]
    fn test_descriptor_builds_schema() {
        let layout: Layout = toml::from_str(LAYOUT).unwrap();
        let schema = Schema::build(&layout.descriptor(), &FormatterRegistry::new()).unwrap();
        let leaves = schema.leaves();
        let selectors: Vec<String> = leaves.iter().map(|n| n.selector_path()).collect();
        assert_eq!(selectors, vec!["name", "meta.namespace", "usage.memory"]);
        assert_eq!(leaves[1].default_text, "default");

        let usage = &schema.root().children[2];
        assert_eq!(usage.group.as_ref().unwrap().name, "USAGE");
        let meta = &schema.root().children[1];
        assert_eq!(meta.group.as_ref().unwrap().name, "meta");
    }

    #[test]
    fn test_load_reports_path() {
        let err = Layout::load(Path::new("/nonexistent/layout.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/layout.toml"));
    }
}
