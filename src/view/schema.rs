//! Record type descriptors and the schema tree built from them.
//!
//! A [`TypeDescriptor`] is the static declaration of a record layout: an
//! ordered list of [`Field`]s, each with optional display metadata. Building a
//! [`Schema`] walks that declaration depth-first and produces a tree of
//! [`FieldNode`]s.
//!
//! # Addressing
//!
//! Every node carries two key sequences:
//!
//! - `path`: the visibility address. A flatten group is transparent, so its
//!   children keep the parent's path. A boxed group starts a new addressing
//!   root: its descendants' paths begin empty again, while the group node
//!   itself is addressed relative to its own parent.
//! - `selector`: the full chain of record keys from the rendered record to the
//!   node, used to extract values.

use super::error::SchemaError;
use super::format::FormatterRegistry;

/// Group metadata attached to a composite field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    pub name: String,
    /// Flatten groups contribute no header level and no path segment.
    pub flatten: bool,
}

impl GroupSpec {
    pub fn boxed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flatten: false,
        }
    }

    pub fn flatten(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flatten: true,
        }
    }
}

/// One declared field of a record type.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    title: Option<String>,
    default_text: Option<String>,
    format: Option<String>,
    group: Option<GroupSpec>,
    nested: Option<TypeDescriptor>,
}

impl Field {
    /// A scalar field.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: None,
            default_text: None,
            format: None,
            group: None,
            nested: None,
        }
    }

    /// A field whose type is itself a record.
    pub fn record(key: impl Into<String>, nested: TypeDescriptor) -> Self {
        Self {
            nested: Some(nested),
            ..Self::new(key)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_default(mut self, text: impl Into<String>) -> Self {
        self.default_text = Some(text.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_group(mut self, group: GroupSpec) -> Self {
        self.group = Some(group);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn nested(&self) -> Option<&TypeDescriptor> {
        self.nested.as_ref()
    }

    /// Composite type + group metadata + no formatter. Formatting wins over grouping.
    fn as_group(&self) -> Option<(&GroupSpec, &TypeDescriptor)> {
        match (&self.group, &self.nested, &self.format) {
            (Some(group), Some(nested), None) => Some((group, nested)),
            _ => None,
        }
    }
}

/// Static description of a record type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeDescriptor {
    name: String,
    fields: Vec<Field>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// Implemented by record types that carry their own descriptor.
pub trait Describe: super::value::Record {
    fn descriptor() -> TypeDescriptor;
}

/// Group information of a group node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    /// Unique per group instance, so same-named siblings stay distinct.
    pub id: usize,
    pub name: String,
    pub flatten: bool,
}

/// A node of the schema tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNode {
    /// Depth-first index; the synthetic root is 0.
    pub id: usize,
    pub path: Vec<String>,
    /// Empty for the root.
    pub key: String,
    pub selector: Vec<String>,
    pub title: String,
    /// Substituted only when the rendered text is empty.
    pub default_text: String,
    pub formatter: Option<String>,
    pub group: Option<GroupInfo>,
    pub children: Vec<FieldNode>,
}

impl FieldNode {
    pub fn is_group(&self) -> bool {
        self.group.is_some()
    }

    pub fn is_flatten(&self) -> bool {
        self.group.as_ref().is_some_and(|g| g.flatten)
    }

    pub fn is_leaf(&self) -> bool {
        self.group.is_none() && self.id != 0
    }

    /// The exact dotted path matched against show/hide lists.
    pub fn address(&self) -> String {
        let mut parts: Vec<&str> = self.path.iter().map(String::as_str).collect();
        if !self.key.is_empty() {
            parts.push(&self.key);
        }
        parts.join(".")
    }

    /// Full selector joined with dots, for error messages.
    pub fn selector_path(&self) -> String {
        self.selector.join(".")
    }
}

/// The introspected field tree of one record type.
#[derive(Debug, Clone)]
pub struct Schema {
    root: FieldNode,
    len: usize,
}

impl Schema {
    /// Walks `descriptor` and validates every format identifier against `formatters`.
    pub fn build(
        descriptor: &TypeDescriptor,
        formatters: &FormatterRegistry,
    ) -> Result<Self, SchemaError> {
        let mut next_id = 1;
        let children = build_nodes(descriptor.fields(), &[], &[], formatters, &mut next_id)?;
        let root = FieldNode {
            id: 0,
            path: Vec::new(),
            key: String::new(),
            selector: Vec::new(),
            title: descriptor.name().to_string(),
            default_text: String::new(),
            formatter: None,
            group: None,
            children,
        };
        log::debug!(
            "built schema for '{}' with {} nodes",
            descriptor.name(),
            next_id
        );
        Ok(Self { root, len: next_id })
    }

    pub fn root(&self) -> &FieldNode {
        &self.root
    }

    /// Number of nodes including the root.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Leaves in depth-first declaration order.
    pub fn leaves(&self) -> Vec<&FieldNode> {
        let mut leaves = Vec::new();
        collect_leaves(&self.root, &mut leaves);
        leaves
    }
}

fn collect_leaves<'a>(node: &'a FieldNode, out: &mut Vec<&'a FieldNode>) {
    for child in &node.children {
        if child.is_group() {
            collect_leaves(child, out);
        } else {
            out.push(child);
        }
    }
}

fn build_nodes(
    fields: &[Field],
    path: &[String],
    selector: &[String],
    formatters: &FormatterRegistry,
    next_id: &mut usize,
) -> Result<Vec<FieldNode>, SchemaError> {
    let mut nodes = Vec::with_capacity(fields.len());

    for field in fields {
        let mut node_selector = selector.to_vec();
        node_selector.push(field.key.clone());

        if let Some(format) = field.format()
            && !formatters.contains(format)
        {
            return Err(SchemaError::UnknownFormatter {
                field: node_selector.join("."),
                formatter: format.to_string(),
            });
        }

        let id = *next_id;
        *next_id += 1;

        let (group, children) = match field.as_group() {
            Some((spec, nested)) => {
                let child_path = if spec.flatten {
                    path.to_vec()
                } else {
                    Vec::new()
                };
                let children = build_nodes(
                    nested.fields(),
                    &child_path,
                    &node_selector,
                    formatters,
                    next_id,
                )?;
                let info = GroupInfo {
                    id,
                    name: spec.name.clone(),
                    flatten: spec.flatten,
                };
                (Some(info), children)
            }
            None => (None, Vec::new()),
        };

        nodes.push(FieldNode {
            id,
            path: path.to_vec(),
            key: field.key.clone(),
            selector: node_selector,
            title: field.title.clone().unwrap_or_else(|| field.key.clone()),
            default_text: field.default_text.clone().unwrap_or_default(),
            formatter: field.format.clone(),
            group,
            children,
        });
    }

    Ok(nodes)
}
