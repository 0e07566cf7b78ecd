use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::component::Component;

/// Data model contents: JSON-Pointer-style path → value.
///
/// Paths are opaque keys; `/a` and `/a/b` are independent entries. A sorted
/// map keeps emission deterministic.
pub type DataModel = BTreeMap<String, Value>;

/// Producer → renderer protocol message.
///
/// Externally tagged, so exactly one key is present on the wire:
/// `{"beginRendering": {...}}`, `{"updateComponents": {...}}`,
/// `{"dataModelUpdate": {...}}` or `{"deleteSurface": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Message {
    /// Announces a surface and the id of its root component
    BeginRendering(BeginRendering),
    /// Full snapshot of the surface's component list
    UpdateComponents(UpdateComponents),
    /// Full snapshot of the surface's data model
    DataModelUpdate(DataModelUpdate),
    /// Tombstone: the renderer drops the surface
    DeleteSurface(DeleteSurface),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeginRendering {
    pub surface_id: String,
    pub root: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComponents {
    pub surface_id: String,
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModelUpdate {
    pub surface_id: String,
    pub contents: DataModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSurface {
    pub surface_id: String,
}

/// Discriminator of a [`Message`], for logging and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKind {
    BeginRendering,
    UpdateComponents,
    DataModelUpdate,
    DeleteSurface,
}

impl MessageKind {
    /// Wire key of the message variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::BeginRendering => "beginRendering",
            MessageKind::UpdateComponents => "updateComponents",
            MessageKind::DataModelUpdate => "dataModelUpdate",
            MessageKind::DeleteSurface => "deleteSurface",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::BeginRendering(_) => MessageKind::BeginRendering,
            Message::UpdateComponents(_) => MessageKind::UpdateComponents,
            Message::DataModelUpdate(_) => MessageKind::DataModelUpdate,
            Message::DeleteSurface(_) => MessageKind::DeleteSurface,
        }
    }

    /// Surface this message addresses.
    pub fn surface_id(&self) -> &str {
        match self {
            Message::BeginRendering(m) => &m.surface_id,
            Message::UpdateComponents(m) => &m.surface_id,
            Message::DataModelUpdate(m) => &m.surface_id,
            Message::DeleteSurface(m) => &m.surface_id,
        }
    }

    /// Decode one message from a JSON string.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact single-line JSON encoding.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Renderer → producer message.
///
/// `{"event": {"surfaceId": ..., "componentId": ..., "type": ..., "data": {...}}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClientMessage {
    Event(Event),
}

/// A user interaction reported by the renderer.
///
/// The producer library does not interpret `event_type` or `data`; both are
/// forwarded to the application as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub surface_id: String,
    pub component_id: String,
    /// Interaction kind, e.g. "action", "input", "change"
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

impl ClientMessage {
    pub fn event(&self) -> &Event {
        match self {
            ClientMessage::Event(event) => event,
        }
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exactly_one_key_on_the_wire() {
        let message = Message::BeginRendering(BeginRendering {
            surface_id: "s".to_string(),
            root: "root".to_string(),
        });

        let value = serde_json::to_value(&message).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(value, json!({"beginRendering": {"surfaceId": "s", "root": "root"}}));
    }

    #[test]
    fn test_legacy_surface_update_key_is_not_accepted() {
        let result =
            Message::from_json(r#"{"surfaceUpdate":{"surfaceId":"s","components":[]}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_kind_and_surface_id() {
        let message = Message::DeleteSurface(DeleteSurface {
            surface_id: "gone".to_string(),
        });
        assert_eq!(message.kind(), MessageKind::DeleteSurface);
        assert_eq!(message.kind().to_string(), "deleteSurface");
        assert_eq!(message.surface_id(), "gone");
    }

    #[test]
    fn test_client_event_decoding() {
        let message = ClientMessage::from_json(
            r#"{"event":{"surfaceId":"booking","componentId":"submit-btn","type":"action","data":{"party":4}}}"#,
        )
        .unwrap();

        let event = message.event();
        assert_eq!(event.surface_id, "booking");
        assert_eq!(event.component_id, "submit-btn");
        assert_eq!(event.event_type, "action");
        assert_eq!(event.data["party"], 4);
    }

    #[test]
    fn test_client_event_without_data() {
        let message = ClientMessage::from_json(
            r#"{"event":{"surfaceId":"s","componentId":"c","type":"change"}}"#,
        )
        .unwrap();
        assert!(message.event().data.is_empty());

        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("data"));
    }
}
