use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Capability traits over an externally owned view hierarchy
// ============================================================================

/// Read-only view of a single node in a view hierarchy.
///
/// Traversal only needs these accessors, so any platform tree can be walked
/// without converting it into [`AssistNode`] first.
pub trait ViewNode {
    /// Ordered autofill hints. Empty when the node carries none.
    fn autofill_hints(&self) -> &[String];

    /// Opaque identifier used to target the field in a fill response.
    fn autofill_id(&self) -> Option<AutofillId>;

    /// Current text content of the field.
    fn text(&self) -> Option<&str>;

    fn child_count(&self) -> usize;

    fn child_at(&self, index: usize) -> Option<&Self>;
}

/// A structure made of one or more independent window roots.
pub trait ViewStructure {
    type Node: ViewNode;

    fn window_count(&self) -> usize;

    fn window_root(&self, index: usize) -> Option<&Self::Node>;
}

// ============================================================================
// Concrete structure, deserialized from JSON snapshots
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutofillId(pub u32);

impl fmt::Display for AutofillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AutofillId({})", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistStructure {
    /// Package of the activity the structure was captured from
    #[serde(default)]
    pub package_name: Option<String>,

    #[serde(default)]
    pub windows: Vec<WindowNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowNode {
    pub root: AssistNode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistNode {
    #[serde(default)]
    pub hints: Vec<String>,

    #[serde(default)]
    pub id: Option<AutofillId>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub children: Vec<AssistNode>,
}

impl AssistNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(AutofillId(id));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: AssistNode) -> Self {
        self.children.push(child);
        self
    }
}

impl AssistStructure {
    pub fn from_roots(roots: Vec<AssistNode>) -> Self {
        Self {
            package_name: None,
            windows: roots.into_iter().map(|root| WindowNode { root }).collect(),
        }
    }

    pub fn with_package(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }
}

impl ViewNode for AssistNode {
    fn autofill_hints(&self) -> &[String] {
        &self.hints
    }

    fn autofill_id(&self) -> Option<AutofillId> {
        self.id
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<&Self> {
        self.children.get(index)
    }
}

impl ViewStructure for AssistStructure {
    type Node = AssistNode;

    fn window_count(&self) -> usize {
        self.windows.len()
    }

    fn window_root(&self, index: usize) -> Option<&AssistNode> {
        self.windows.get(index).map(|w| &w.root)
    }
}
