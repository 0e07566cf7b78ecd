use a2ui_types::{Component, DEFAULT_ROOT, DataModel, Message};
use std::collections::{BTreeMap, HashMap};

use crate::surface::Surface;

// NOTE: Replay semantics (renderer side)
//
// - beginRendering: create the surface, or re-root an existing one
// - updateComponents: upsert by id; a known id is replaced in place, a new id
//   is appended, so the last occurrence of an id governs rendering
// - dataModelUpdate: shallow merge of contents, later keys overwrite
// - deleteSurface: drop the surface and everything it holds
//
// Updates for a surface that was never begun create it with the default
// root, matching renderers that process messages without strict ordering.

/// Renderer-side view of one surface, rebuilt from messages.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMirror {
    id: String,
    root: String,
    components: Vec<Component>,
    index: HashMap<String, usize>,
    data: DataModel,
}

impl SurfaceMirror {
    fn new(id: &str, root: &str) -> Self {
        Self {
            id: id.to_string(),
            root: root.to_string(),
            components: Vec::new(),
            index: HashMap::new(),
            data: DataModel::new(),
        }
    }

    fn upsert(&mut self, component: Component) {
        match self.index.get(&component.id) {
            Some(&position) => self.components[position] = component,
            None => {
                self.index
                    .insert(component.id.clone(), self.components.len());
                self.components.push(component);
            }
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Components with unique ids, in first-seen order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.index.get(id).map(|&position| &self.components[position])
    }

    pub fn data(&self) -> &DataModel {
        &self.data
    }

    /// Producer-side surface holding the mirrored state, e.g. to resend a
    /// full snapshot to a renderer that lost sync.
    pub fn to_surface(&self) -> Surface {
        let mut surface = Surface::new(self.id.clone());
        surface
            .set_root(self.root.clone())
            .add_all(self.components.iter().cloned());
        for (path, value) in &self.data {
            surface.set_data(path.clone(), value.clone());
        }
        surface
    }
}

/// Applies message streams to a set of mirrored surfaces.
#[derive(Debug, Clone, Default)]
pub struct Replay {
    surfaces: BTreeMap<String, SurfaceMirror>,
}

impl Replay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay a whole stream in order.
    pub fn from_messages(messages: impl IntoIterator<Item = Message>) -> Self {
        let mut replay = Self::new();
        for message in messages {
            replay.apply(message);
        }
        replay
    }

    pub fn apply(&mut self, message: Message) {
        match message {
            Message::BeginRendering(begin) => {
                tracing::debug!(surface_id = %begin.surface_id, root = %begin.root, "begin rendering");
                self.surfaces
                    .entry(begin.surface_id.clone())
                    .and_modify(|mirror| mirror.root = begin.root.clone())
                    .or_insert_with(|| SurfaceMirror::new(&begin.surface_id, &begin.root));
            }
            Message::UpdateComponents(update) => {
                let mirror = self.mirror_mut(&update.surface_id);
                for component in update.components {
                    mirror.upsert(component);
                }
            }
            Message::DataModelUpdate(update) => {
                let mirror = self.mirror_mut(&update.surface_id);
                mirror.data.extend(update.contents);
            }
            Message::DeleteSurface(delete) => {
                if self.surfaces.remove(&delete.surface_id).is_none() {
                    tracing::warn!(surface_id = %delete.surface_id, "delete for unknown surface");
                }
            }
        }
    }

    fn mirror_mut(&mut self, surface_id: &str) -> &mut SurfaceMirror {
        self.surfaces
            .entry(surface_id.to_string())
            .or_insert_with(|| {
                tracing::warn!(surface_id, "update before beginRendering, using default root");
                SurfaceMirror::new(surface_id, DEFAULT_ROOT)
            })
    }

    pub fn surface(&self, surface_id: &str) -> Option<&SurfaceMirror> {
        self.surfaces.get(surface_id)
    }

    /// Mirrored surfaces, ordered by id.
    pub fn surfaces(&self) -> impl Iterator<Item = &SurfaceMirror> {
        self.surfaces.values()
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
