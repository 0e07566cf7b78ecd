//! Constructor helpers for every shape in the catalog.
//!
//! These are plain data factories: they never look at other components and
//! never fail. Container helpers take child ids, not child components.

use serde_json::{Map, Value};

use crate::component::*;

fn ids<I, S>(children: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    children.into_iter().map(Into::into).collect()
}

fn binding(path: impl Into<String>) -> Option<DataBinding> {
    Some(DataBinding::new(path))
}

/// Vertical layout.
pub fn column<I, S>(id: impl Into<String>, children: I) -> Component
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Component::new(
        id,
        Shape::Column(Layout {
            children: ids(children),
            ..Default::default()
        }),
    )
}

/// Horizontal layout.
pub fn row<I, S>(id: impl Into<String>, children: I) -> Component
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Component::new(
        id,
        Shape::Row(Layout {
            children: ids(children),
            ..Default::default()
        }),
    )
}

pub fn column_with_layout<I, S>(
    id: impl Into<String>,
    distribution: Distribution,
    alignment: Alignment,
    children: I,
) -> Component
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Component::new(
        id,
        Shape::Column(Layout {
            children: ids(children),
            distribution: Some(distribution),
            alignment: Some(alignment),
        }),
    )
}

pub fn row_with_layout<I, S>(
    id: impl Into<String>,
    distribution: Distribution,
    alignment: Alignment,
    children: I,
) -> Component
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Component::new(
        id,
        Shape::Row(Layout {
            children: ids(children),
            distribution: Some(distribution),
            alignment: Some(alignment),
        }),
    )
}

pub fn card(id: impl Into<String>, child: impl Into<String>) -> Component {
    Component::new(
        id,
        Card {
            child: child.into(),
        },
    )
}

/// Text with literal content.
pub fn text_static(id: impl Into<String>, text: impl Into<String>) -> Component {
    Component::new(
        id,
        Text {
            text: Some(text.into()),
            ..Default::default()
        },
    )
}

/// Text whose content comes from the data model.
pub fn text_bound(id: impl Into<String>, path: impl Into<String>) -> Component {
    Component::new(
        id,
        Text {
            data_binding: binding(path),
            ..Default::default()
        },
    )
}

pub fn text_with_hint(id: impl Into<String>, text: impl Into<String>, hint: UsageHint) -> Component {
    Component::new(
        id,
        Text {
            text: Some(text.into()),
            usage_hint: Some(hint),
            ..Default::default()
        },
    )
}

pub fn image_static(
    id: impl Into<String>,
    url: impl Into<String>,
    alt: impl Into<String>,
) -> Component {
    Component::new(
        id,
        Image {
            url: Some(url.into()),
            alt: Some(alt.into()),
            ..Default::default()
        },
    )
}

pub fn image_bound(
    id: impl Into<String>,
    path: impl Into<String>,
    alt: impl Into<String>,
) -> Component {
    Component::new(
        id,
        Image {
            alt: Some(alt.into()),
            data_binding: binding(path),
            ..Default::default()
        },
    )
}

pub fn image_with_fit(
    id: impl Into<String>,
    url: impl Into<String>,
    alt: impl Into<String>,
    fit: ImageFit,
) -> Component {
    Component::new(
        id,
        Image {
            url: Some(url.into()),
            alt: Some(alt.into()),
            fit: Some(fit),
            ..Default::default()
        },
    )
}

pub fn icon(id: impl Into<String>, icon: IconName) -> Component {
    Component::new(id, Icon { icon })
}

pub fn video(id: impl Into<String>, url: impl Into<String>) -> Component {
    Component::new(
        id,
        Video {
            url: Some(url.into()),
            data_binding: None,
        },
    )
}

pub fn video_bound(id: impl Into<String>, path: impl Into<String>) -> Component {
    Component::new(
        id,
        Video {
            url: None,
            data_binding: binding(path),
        },
    )
}

pub fn audio_player(
    id: impl Into<String>,
    url: impl Into<String>,
    description: impl Into<String>,
) -> Component {
    Component::new(
        id,
        AudioPlayer {
            url: Some(url.into()),
            description: Some(description.into()),
            data_binding: None,
        },
    )
}

pub fn audio_player_bound(
    id: impl Into<String>,
    path: impl Into<String>,
    description: impl Into<String>,
) -> Component {
    Component::new(
        id,
        AudioPlayer {
            url: None,
            description: Some(description.into()),
            data_binding: binding(path),
        },
    )
}

pub fn divider(id: impl Into<String>) -> Component {
    Component::new(id, Divider::default())
}

pub fn divider_vertical(id: impl Into<String>) -> Component {
    Component::new(
        id,
        Divider {
            orientation: Some(Orientation::Vertical),
        },
    )
}

fn button_pair(id: String, text: String, action: Action, primary: bool) -> [Component; 2] {
    let child_id = format!("{}_text", id);
    [
        Component::new(
            id,
            Button {
                child: child_id.clone(),
                action,
                primary,
            },
        ),
        text_static(child_id, text),
    ]
}

/// Button plus its `<id>_text` label component.
pub fn button(
    id: impl Into<String>,
    text: impl Into<String>,
    action_type: impl Into<String>,
) -> [Component; 2] {
    button_pair(id.into(), text.into(), Action::new(action_type), false)
}

/// Button whose action carries opaque `data`, plus its label component.
pub fn button_with_data(
    id: impl Into<String>,
    text: impl Into<String>,
    action_type: impl Into<String>,
    data: Map<String, Value>,
) -> [Component; 2] {
    button_pair(
        id.into(),
        text.into(),
        Action::new(action_type).with_data(data),
        false,
    )
}

pub fn button_primary(
    id: impl Into<String>,
    text: impl Into<String>,
    action_type: impl Into<String>,
) -> [Component; 2] {
    button_pair(id.into(), text.into(), Action::new(action_type), true)
}

/// Just the button; the caller manages `child_id` separately.
pub fn button_only(
    id: impl Into<String>,
    child_id: impl Into<String>,
    action_type: impl Into<String>,
) -> Component {
    Component::new(
        id,
        Button {
            child: child_id.into(),
            action: Action::new(action_type),
            primary: false,
        },
    )
}

pub fn text_field(
    id: impl Into<String>,
    label: impl Into<String>,
    placeholder: impl Into<String>,
) -> Component {
    Component::new(
        id,
        TextField {
            label: Some(label.into()),
            placeholder: Some(placeholder.into()),
            ..Default::default()
        },
    )
}

pub fn text_field_bound(
    id: impl Into<String>,
    label: impl Into<String>,
    placeholder: impl Into<String>,
    path: impl Into<String>,
) -> Component {
    Component::new(
        id,
        TextField {
            label: Some(label.into()),
            placeholder: Some(placeholder.into()),
            data_binding: binding(path),
            ..Default::default()
        },
    )
}

pub fn text_field_with_type(
    id: impl Into<String>,
    label: impl Into<String>,
    placeholder: impl Into<String>,
    field_type: TextFieldType,
) -> Component {
    Component::new(
        id,
        TextField {
            label: Some(label.into()),
            placeholder: Some(placeholder.into()),
            text_field_type: Some(field_type),
            ..Default::default()
        },
    )
}

pub fn check_box(id: impl Into<String>, label: impl Into<String>, checked: bool) -> Component {
    Component::new(
        id,
        CheckBox {
            label: Some(label.into()),
            checked,
            data_binding: None,
        },
    )
}

pub fn check_box_bound(
    id: impl Into<String>,
    label: impl Into<String>,
    path: impl Into<String>,
) -> Component {
    Component::new(
        id,
        CheckBox {
            label: Some(label.into()),
            checked: false,
            data_binding: binding(path),
        },
    )
}

pub fn date_time_input(
    id: impl Into<String>,
    label: impl Into<String>,
    enable_date: bool,
    enable_time: bool,
) -> Component {
    Component::new(
        id,
        DateTimeInput {
            label: Some(label.into()),
            enable_date,
            enable_time,
            data_binding: None,
        },
    )
}

pub fn date_time_input_bound(
    id: impl Into<String>,
    label: impl Into<String>,
    path: impl Into<String>,
    enable_date: bool,
    enable_time: bool,
) -> Component {
    Component::new(
        id,
        DateTimeInput {
            label: Some(label.into()),
            enable_date,
            enable_time,
            data_binding: binding(path),
        },
    )
}

pub fn multiple_choice(
    id: impl Into<String>,
    label: impl Into<String>,
    options: Vec<ChoiceOption>,
) -> Component {
    Component::new(
        id,
        MultipleChoice {
            label: Some(label.into()),
            options,
            ..Default::default()
        },
    )
}

pub fn multiple_choice_bound(
    id: impl Into<String>,
    label: impl Into<String>,
    path: impl Into<String>,
    options: Vec<ChoiceOption>,
) -> Component {
    Component::new(
        id,
        MultipleChoice {
            label: Some(label.into()),
            options,
            data_binding: binding(path),
            ..Default::default()
        },
    )
}

/// Option for [`multiple_choice`].
pub fn choice(label: impl Into<String>, value: impl Into<String>) -> ChoiceOption {
    ChoiceOption {
        label: label.into(),
        value: value.into(),
    }
}

pub fn slider(id: impl Into<String>, label: impl Into<String>, min: f64, max: f64, value: f64) -> Component {
    Component::new(
        id,
        Slider {
            label: Some(label.into()),
            min_value: min,
            max_value: max,
            value: Some(value),
            data_binding: None,
        },
    )
}

pub fn slider_bound(
    id: impl Into<String>,
    label: impl Into<String>,
    path: impl Into<String>,
    min: f64,
    max: f64,
) -> Component {
    Component::new(
        id,
        Slider {
            label: Some(label.into()),
            min_value: min,
            max_value: max,
            value: None,
            data_binding: binding(path),
        },
    )
}

/// List rendering `template_id` once per item of the array at `data_path`.
pub fn list_template(
    id: impl Into<String>,
    template_id: impl Into<String>,
    data_path: impl Into<String>,
) -> Component {
    Component::new(
        id,
        List {
            template: template_id.into(),
            data_binding: binding(data_path),
            direction: None,
        },
    )
}

pub fn tabs(id: impl Into<String>, tabs: impl IntoIterator<Item = TabDef>) -> Component {
    Component::new(
        id,
        Tabs {
            tabs: tabs.into_iter().collect(),
        },
    )
}

/// Tab for [`tabs`].
pub fn tab(title: impl Into<String>, child: impl Into<String>) -> TabDef {
    TabDef {
        title: title.into(),
        child: child.into(),
    }
}

pub fn modal(
    id: impl Into<String>,
    entry_point_child: impl Into<String>,
    content_child: impl Into<String>,
) -> Component {
    Component::new(
        id,
        Modal {
            entry_point_child: entry_point_child.into(),
            content_child: content_child.into(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_helper() {
        let c = column("col", ["a", "b", "c"]);
        assert_eq!(c.id, "col");
        match &c.shape {
            Shape::Column(layout) => assert_eq!(layout.children, vec!["a", "b", "c"]),
            other => panic!("expected Column, got {:?}", other),
        }
    }

    #[test]
    fn test_text_static_has_no_binding() {
        let txt = text_static("txt", "Hello World");
        match &txt.shape {
            Shape::Text(text) => {
                assert_eq!(text.text.as_deref(), Some("Hello World"));
                assert!(text.data_binding.is_none());
            }
            other => panic!("expected Text, got {:?}", other),
        }
    }

    #[test]
    fn test_text_bound_helper() {
        let txt = text_bound("txt", "/user/name");
        assert_eq!(
            txt.data_binding().map(|b| b.path.as_str()),
            Some("/user/name")
        );
    }

    #[test]
    fn test_list_template_helper() {
        let lst = list_template("list", "item-template", "/items");
        match &lst.shape {
            Shape::List(list) => {
                assert_eq!(list.template, "item-template");
                assert_eq!(
                    list.data_binding.as_ref().map(|b| b.path.as_str()),
                    Some("/items")
                );
            }
            other => panic!("expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_button_returns_label_child() {
        let [btn, label] = button("btn", "Click Me", "submit");

        match &btn.shape {
            Shape::Button(b) => {
                assert_eq!(b.child, "btn_text");
                assert_eq!(b.action.action_type, "submit");
                assert!(!b.primary);
            }
            other => panic!("expected Button, got {:?}", other),
        }
        assert_eq!(label.id, "btn_text");
        assert_eq!(label.name(), "Text");
    }

    #[test]
    fn test_button_primary_and_data() {
        let [primary, _] = button_primary("go", "Go", "navigate");
        assert!(matches!(&primary.shape, Shape::Button(b) if b.primary));

        let mut data = Map::new();
        data.insert("endpoint".to_string(), Value::from("/submit"));
        let [with_data, _] = button_with_data("send", "Send", "submit", data);
        match &with_data.shape {
            Shape::Button(b) => {
                let data = b.action.data.as_ref().unwrap();
                assert_eq!(data["endpoint"], "/submit");
            }
            other => panic!("expected Button, got {:?}", other),
        }
    }

    #[test]
    fn test_image_helpers() {
        let img = image_static("img", "https://example.com/photo.jpg", "A photo");
        match &img.shape {
            Shape::Image(image) => {
                assert_eq!(image.url.as_deref(), Some("https://example.com/photo.jpg"));
                assert_eq!(image.alt.as_deref(), Some("A photo"));
            }
            other => panic!("expected Image, got {:?}", other),
        }

        let bound = image_bound("img2", "/photo/url", "Dynamic photo");
        assert_eq!(
            bound.data_binding().map(|b| b.path.as_str()),
            Some("/photo/url")
        );
    }

    #[test]
    fn test_tabs_and_modal_helpers() {
        let t = tabs("tabs", [tab("One", "first"), tab("Two", "second")]);
        assert_eq!(t.references().len(), 2);

        let m = modal("m", "open", "body");
        assert_eq!(m.references().len(), 2);
    }
}
