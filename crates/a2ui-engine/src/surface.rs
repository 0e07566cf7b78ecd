use a2ui_types::{
    BeginRendering, Component, DEFAULT_ROOT, DataModel, DataModelUpdate, DeleteSurface, Message,
    UpdateComponents,
};
use serde_json::Value;

use crate::validation::{ValidationError, validate_components};

// NOTE: Surface design
//
// A Surface is a producer-side accumulator. Mutators never validate, so the
// surface may pass through invalid states (a child referenced before it is
// added, a root set before its component exists). `validate()` and
// `messages()` are read-only projections and can be called in any order.
//
// Every message is a full snapshot, not a delta: the whole component list
// and the whole data model are resent each time. Adding a component whose id
// already exists appends a second entry rather than replacing the first;
// renderers index by id so the later entry wins, and validation flags it.

/// Builds A2UI messages for one UI surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    id: String,
    root: String,
    components: Vec<Component>,
    data: DataModel,
}

impl Surface {
    /// New empty surface whose root defaults to `"root"`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            root: DEFAULT_ROOT.to_string(),
            components: Vec::new(),
            data: DataModel::new(),
        }
    }

    /// Replace the root id. The component need not exist yet.
    pub fn set_root(&mut self, id: impl Into<String>) -> &mut Self {
        self.root = id.into();
        self
    }

    /// Append one component.
    pub fn add(&mut self, component: Component) -> &mut Self {
        self.components.push(component);
        self
    }

    /// Append several components, keeping their relative order.
    pub fn add_all(&mut self, components: impl IntoIterator<Item = Component>) -> &mut Self {
        self.components.extend(components);
        self
    }

    /// Insert or overwrite the value at `path`. Last write wins.
    pub fn set_data(&mut self, path: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.data.insert(path.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Components in insertion order, duplicates included.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn data(&self) -> &DataModel {
        &self.data
    }

    /// Complete message sequence describing the current state to a fresh
    /// renderer: `beginRendering`, `updateComponents`, then
    /// `dataModelUpdate` only when the data model is non-empty.
    pub fn messages(&self) -> Vec<Message> {
        let mut messages = Vec::with_capacity(3);
        messages.push(self.begin_rendering_message());
        messages.push(self.update_components_message());

        if !self.data.is_empty() {
            messages.push(self.data_model_update_message());
        }

        tracing::debug!(
            surface_id = %self.id,
            components = self.components.len(),
            data_entries = self.data.len(),
            messages = messages.len(),
            "built surface messages"
        );

        messages
    }

    pub fn begin_rendering_message(&self) -> Message {
        Message::BeginRendering(BeginRendering {
            surface_id: self.id.clone(),
            root: self.root.clone(),
        })
    }

    /// Snapshot of all components, for incremental streaming.
    pub fn update_components_message(&self) -> Message {
        Message::UpdateComponents(UpdateComponents {
            surface_id: self.id.clone(),
            components: self.components.clone(),
        })
    }

    /// Snapshot of the data model, emitted even when it is empty.
    pub fn data_model_update_message(&self) -> Message {
        Message::DataModelUpdate(DataModelUpdate {
            surface_id: self.id.clone(),
            contents: self.data.clone(),
        })
    }

    pub fn delete_surface_message(&self) -> Message {
        Message::DeleteSurface(DeleteSurface {
            surface_id: self.id.clone(),
        })
    }

    /// Structural findings for the current components and root.
    /// An empty list means the surface is well-formed.
    pub fn validate(&self) -> Vec<ValidationError> {
        let errors = validate_components(&self.root, &self.components);
        if errors.is_empty() {
            tracing::debug!(surface_id = %self.id, "surface is valid");
        } else {
            tracing::debug!(
                surface_id = %self.id,
                errors = errors.len(),
                "surface has structural errors"
            );
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a2ui_types::factory::*;
    use serde_json::json;

    #[test]
    fn test_new_surface_defaults() {
        let s = Surface::new("test-surface");
        assert_eq!(s.id(), "test-surface");
        assert_eq!(s.root(), "root");
        assert!(s.components().is_empty());
        assert!(s.data().is_empty());
    }

    #[test]
    fn test_set_data_overwrites() {
        let mut s = Surface::new("test");
        s.set_data("/user/name", "Alice")
            .set_data("/items", vec!["a", "b", "c"])
            .set_data("/user/name", "Bob");

        assert_eq!(s.data()["/user/name"], json!("Bob"));
        assert_eq!(s.data()["/items"], json!(["a", "b", "c"]));
        assert_eq!(s.data().len(), 2);
    }

    #[test]
    fn test_paths_are_opaque_keys() {
        let mut s = Surface::new("test");
        s.set_data("/a", json!({"b": 1})).set_data("/a/b", 2);

        assert_eq!(s.data().len(), 2);
        assert_eq!(s.data()["/a"], json!({"b": 1}));
        assert_eq!(s.data()["/a/b"], json!(2));
    }

    #[test]
    fn test_messages_without_data() {
        let mut s = Surface::new("test");
        s.add(text_static("root", "Hello"));

        let msgs = s.messages();
        assert_eq!(msgs.len(), 2);
    }

    #[test]
    fn test_add_same_id_appends() {
        let mut s = Surface::new("test");
        s.add(text_static("root", "first"))
            .add(text_static("root", "second"));

        assert_eq!(s.components().len(), 2);
        assert_eq!(s.validate().len(), 1);
    }

    #[test]
    fn test_data_model_update_message_when_empty() {
        let s = Surface::new("test");
        match s.data_model_update_message() {
            Message::DataModelUpdate(update) => {
                assert_eq!(update.surface_id, "test");
                assert!(update.contents.is_empty());
            }
            other => panic!("expected dataModelUpdate, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_surface_message() {
        let s = Surface::new("gone");
        assert_eq!(
            s.delete_surface_message(),
            Message::DeleteSurface(DeleteSurface {
                surface_id: "gone".to_string()
            })
        );
    }
}
