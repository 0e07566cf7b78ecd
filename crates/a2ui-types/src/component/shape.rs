use serde::{Deserialize, Serialize};

use super::props::{
    Action, Alignment, ChoiceOption, DataBinding, Direction, Distribution, IconName, ImageFit,
    Orientation, TabDef, TextFieldType, UsageHint,
};

// NOTE: Shape catalog
//
// The catalog is closed: every widget a renderer understands is a variant
// here, and an unknown `component` tag fails to decode. Adding a widget means
// adding a variant, its props struct, and (for containers) its edges in
// `Shape::references`.
//
// Edges are plain id strings. Nothing here checks that they resolve; that is
// the validator's job, run over a whole surface at once.

/// Widget kind plus its shape-specific fields.
///
/// Serialized internally tagged by `component`, so it flattens into the
/// owning [`Component`](super::Component) record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component")]
pub enum Shape {
    // Layout
    Column(Layout),
    Row(Layout),
    Card(Card),
    List(List),
    Tabs(Tabs),
    Modal(Modal),

    // Display
    Text(Text),
    Image(Image),
    Icon(Icon),
    Video(Video),
    AudioPlayer(AudioPlayer),
    Divider(Divider),

    // Input
    Button(Button),
    TextField(TextField),
    CheckBox(CheckBox),
    DateTimeInput(DateTimeInput),
    MultipleChoice(MultipleChoice),
    Slider(Slider),
}

/// An outgoing edge from one component to another, by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'a> {
    /// Shape and slot holding the edge, e.g. `"Column.Children"` or
    /// `"Tabs.Tabs[1].Child"`.
    pub field: String,
    /// Id of the referenced component.
    pub target: &'a str,
}

impl<'a> Reference<'a> {
    fn new(field: impl Into<String>, target: &'a str) -> Self {
        Self {
            field: field.into(),
            target,
        }
    }
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Column(_) => "Column",
            Shape::Row(_) => "Row",
            Shape::Card(_) => "Card",
            Shape::List(_) => "List",
            Shape::Tabs(_) => "Tabs",
            Shape::Modal(_) => "Modal",
            Shape::Text(_) => "Text",
            Shape::Image(_) => "Image",
            Shape::Icon(_) => "Icon",
            Shape::Video(_) => "Video",
            Shape::AudioPlayer(_) => "AudioPlayer",
            Shape::Divider(_) => "Divider",
            Shape::Button(_) => "Button",
            Shape::TextField(_) => "TextField",
            Shape::CheckBox(_) => "CheckBox",
            Shape::DateTimeInput(_) => "DateTimeInput",
            Shape::MultipleChoice(_) => "MultipleChoice",
            Shape::Slider(_) => "Slider",
        }
    }

    /// Every component id this shape points at, in declaration order.
    ///
    /// Children lists yield one entry per child (duplicates included), tabs
    /// yield one entry per tab in index order. Leaf shapes yield nothing.
    pub fn references(&self) -> Vec<Reference<'_>> {
        match self {
            Shape::Column(layout) => layout
                .children
                .iter()
                .map(|child| Reference::new("Column.Children", child))
                .collect(),
            Shape::Row(layout) => layout
                .children
                .iter()
                .map(|child| Reference::new("Row.Children", child))
                .collect(),
            Shape::Card(card) => vec![Reference::new("Card.Child", &card.child)],
            Shape::List(list) => vec![Reference::new("List.Template", &list.template)],
            Shape::Tabs(tabs) => tabs
                .tabs
                .iter()
                .enumerate()
                .map(|(i, tab)| Reference::new(format!("Tabs.Tabs[{}].Child", i), &tab.child))
                .collect(),
            Shape::Modal(modal) => vec![
                Reference::new("Modal.EntryPointChild", &modal.entry_point_child),
                Reference::new("Modal.ContentChild", &modal.content_child),
            ],
            Shape::Button(button) => vec![Reference::new("Button.Child", &button.child)],
            Shape::Text(_)
            | Shape::Image(_)
            | Shape::Icon(_)
            | Shape::Video(_)
            | Shape::AudioPlayer(_)
            | Shape::Divider(_)
            | Shape::TextField(_)
            | Shape::CheckBox(_)
            | Shape::DateTimeInput(_)
            | Shape::MultipleChoice(_)
            | Shape::Slider(_) => Vec::new(),
        }
    }

    /// Data model path this shape is bound to, if any.
    pub fn data_binding(&self) -> Option<&DataBinding> {
        match self {
            Shape::List(list) => list.data_binding.as_ref(),
            Shape::Text(text) => text.data_binding.as_ref(),
            Shape::Image(image) => image.data_binding.as_ref(),
            Shape::Video(video) => video.data_binding.as_ref(),
            Shape::AudioPlayer(audio) => audio.data_binding.as_ref(),
            Shape::TextField(field) => field.data_binding.as_ref(),
            Shape::CheckBox(check_box) => check_box.data_binding.as_ref(),
            Shape::DateTimeInput(input) => input.data_binding.as_ref(),
            Shape::MultipleChoice(choice) => choice.data_binding.as_ref(),
            Shape::Slider(slider) => slider.data_binding.as_ref(),
            Shape::Column(_)
            | Shape::Row(_)
            | Shape::Card(_)
            | Shape::Tabs(_)
            | Shape::Modal(_)
            | Shape::Icon(_)
            | Shape::Divider(_)
            | Shape::Button(_) => None,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

/// Column and Row share their fields; the variant decides the axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Distribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub child: String,
}

/// Renders `template` once per item of the bound array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_binding: Option<DataBinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tabs {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<TabDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modal {
    /// Component that opens the modal
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub entry_point_child: String,
    /// Component shown inside the modal
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_child: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_binding: Option<DataBinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_hint: Option<UsageHint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<ImageFit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_hint: Option<UsageHint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_binding: Option<DataBinding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    pub icon: IconName,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_binding: Option<DataBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_binding: Option<DataBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Divider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

/// A pressable with a single child (usually a `Text` label).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub child: String,
    #[serde(default)]
    pub action: Action,
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_field_type: Option<TextFieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_regexp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_binding: Option<DataBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckBox {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_binding: Option<DataBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub enable_date: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub enable_time: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_binding: Option<DataBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selections: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_allowed_selections: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_binding: Option<DataBinding>,
}

/// Numeric range input. The range is not checked against `value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_value: f64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_binding: Option<DataBinding>,
}

macro_rules! impl_into_shape {
    ($($props:ident),* $(,)?) => {
        $(
            impl From<$props> for Shape {
                fn from(props: $props) -> Self {
                    Shape::$props(props)
                }
            }
        )*
    };
}

// Layout is shared by Column and Row, so it has no unambiguous conversion.
impl_into_shape!(
    Card,
    List,
    Tabs,
    Modal,
    Text,
    Image,
    Icon,
    Video,
    AudioPlayer,
    Divider,
    Button,
    TextField,
    CheckBox,
    DateTimeInput,
    MultipleChoice,
    Slider,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn targets<'a>(refs: &[Reference<'a>]) -> Vec<(&'a str, String)> {
        refs.iter().map(|r| (r.target, r.field.clone())).collect()
    }

    #[test]
    fn test_children_references_keep_order() {
        let shape = Shape::Row(Layout {
            children: vec!["b".into(), "a".into(), "b".into()],
            ..Default::default()
        });

        assert_eq!(
            targets(&shape.references()),
            vec![
                ("b", "Row.Children".to_string()),
                ("a", "Row.Children".to_string()),
                ("b", "Row.Children".to_string()),
            ]
        );
    }

    #[test]
    fn test_tabs_references_are_indexed() {
        let shape = Shape::Tabs(Tabs {
            tabs: vec![
                TabDef {
                    title: "One".into(),
                    child: "first".into(),
                },
                TabDef {
                    title: "Two".into(),
                    child: "second".into(),
                },
            ],
        });

        assert_eq!(
            targets(&shape.references()),
            vec![
                ("first", "Tabs.Tabs[0].Child".to_string()),
                ("second", "Tabs.Tabs[1].Child".to_string()),
            ]
        );
    }

    #[test]
    fn test_modal_references_both_slots() {
        let shape = Shape::Modal(Modal {
            entry_point_child: "open".into(),
            content_child: "body".into(),
        });

        assert_eq!(
            targets(&shape.references()),
            vec![
                ("open", "Modal.EntryPointChild".to_string()),
                ("body", "Modal.ContentChild".to_string()),
            ]
        );
    }

    #[test]
    fn test_leaf_shapes_have_no_references() {
        let image = Shape::Image(Image {
            data_binding: Some(DataBinding::new("/photo")),
            ..Default::default()
        });
        assert!(image.references().is_empty());
        assert!(Shape::Divider(Divider::default()).references().is_empty());
        assert_eq!(image.data_binding().map(|b| b.path.as_str()), Some("/photo"));
    }

    #[test]
    fn test_button_child_is_a_reference() {
        let shape = Shape::Button(Button {
            child: "label".into(),
            action: Action::new("submit"),
            primary: false,
        });
        assert_eq!(
            targets(&shape.references()),
            vec![("label", "Button.Child".to_string())]
        );
    }
}
