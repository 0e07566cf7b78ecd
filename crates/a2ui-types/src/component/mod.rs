pub mod props;
pub mod shape;

pub use props::*;
pub use shape::*;

use serde::{Deserialize, Serialize};

/// Root component id a new surface starts with.
pub const DEFAULT_ROOT: &str = "root";

/// One node of the UI tree.
///
/// Components never nest: containers hold the ids of their children, so a
/// surface is an adjacency list rather than a tree of values. On the wire the
/// shape is flattened next to the id:
///
/// ```json
/// {"id": "root", "component": "Column", "children": ["title", "body"]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Identifier, unique within one surface
    pub id: String,

    /// Widget kind and its fields (flattened, tagged by `component`)
    #[serde(flatten)]
    pub shape: Shape,
}

impl Component {
    pub fn new(id: impl Into<String>, shape: impl Into<Shape>) -> Self {
        Self {
            id: id.into(),
            shape: shape.into(),
        }
    }

    /// Discriminator string, e.g. `"Column"`.
    pub fn name(&self) -> &'static str {
        self.shape.name()
    }

    /// Outgoing edges to other components, see [`Shape::references`].
    pub fn references(&self) -> Vec<Reference<'_>> {
        self.shape.references()
    }

    pub fn data_binding(&self) -> Option<&DataBinding> {
        self.shape.data_binding()
    }
}
