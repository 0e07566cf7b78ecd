use a2ui_engine::{Surface, ValidationErrorKind};
use a2ui_types::factory::*;
use a2ui_types::{Message, MessageKind};
use serde_json::json;

fn kinds(messages: &[Message]) -> Vec<MessageKind> {
    messages.iter().map(Message::kind).collect()
}

#[test]
fn test_message_order_without_and_with_data() {
    let mut surface = Surface::new("order");
    surface.add(text_static("root", "Hello"));

    assert_eq!(
        kinds(&surface.messages()),
        vec![MessageKind::BeginRendering, MessageKind::UpdateComponents]
    );

    surface.set_data("/greeting", "hi");
    assert_eq!(
        kinds(&surface.messages()),
        vec![
            MessageKind::BeginRendering,
            MessageKind::UpdateComponents,
            MessageKind::DataModelUpdate,
        ]
    );
}

#[test]
fn test_messages_are_snapshots_not_deltas() {
    let mut surface = Surface::new("snap");
    surface.add(column("root", ["a"]));
    let first = surface.messages();

    surface.add(text_static("a", "added later"));
    let second = surface.messages();

    let count = |messages: &[Message]| match &messages[1] {
        Message::UpdateComponents(update) => update.components.len(),
        other => panic!("expected updateComponents, got {:?}", other),
    };
    assert_eq!(count(&first), 1);
    assert_eq!(count(&second), 2);
}

#[test]
fn test_messages_do_not_mutate_surface() {
    let mut surface = Surface::new("idempotent");
    surface.add(text_static("root", "x")).set_data("/k", true);

    let before = surface.clone();
    assert_eq!(surface.messages(), surface.messages());
    assert_eq!(surface.validate(), surface.validate());
    assert_eq!(surface, before);
}

#[test]
fn test_duplicate_id_reported_once() {
    let mut surface = Surface::new("dup");
    surface.add_all([
        column("root", ["a", "b"]),
        text_static("a", "1"),
        text_static("b", "2"),
        text_static("a", "3"),
    ]);

    let errors = surface.validate();
    let duplicates: Vec<_> = errors
        .iter()
        .filter(|e| e.kind == ValidationErrorKind::DuplicateId)
        .collect();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].component_id, "a");
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_missing_root_reported_once() {
    let mut surface = Surface::new("rootless");
    surface.set_root("missing").add(text_static("root", "x"));

    let errors = surface.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationErrorKind::RootNotFound);
    assert_eq!(errors[0].component_id, "missing");
    assert_eq!(errors[0].field, "Root");
}

#[test]
fn test_dangling_reference_field_per_shape() {
    let cases = vec![
        (column("root", ["ghost"]), "Column.Children"),
        (row("root", ["ghost"]), "Row.Children"),
        (card("root", "ghost"), "Card.Child"),
        (list_template("root", "ghost", "/items"), "List.Template"),
        (tabs("root", [tab("Only", "ghost")]), "Tabs.Tabs[0].Child"),
        (button_only("root", "ghost", "submit"), "Button.Child"),
    ];

    for (component, field) in cases {
        let mut surface = Surface::new("dangling");
        surface.add(component);

        let errors = surface.validate();
        assert_eq!(errors.len(), 1, "expected one error for {}", field);
        assert_eq!(errors[0].kind, ValidationErrorKind::DanglingReference);
        assert_eq!(errors[0].component_id, "root");
        assert_eq!(errors[0].field, field);
        assert!(errors[0].message.contains("ghost"));
    }
}

#[test]
fn test_every_missing_reference_is_reported() {
    let mut surface = Surface::new("many");
    surface
        .add(column("root", ["gone", "tabs", "gone"]))
        .add(tabs("tabs", [tab("A", "x"), tab("B", "root"), tab("C", "y")]))
        .add(modal("modal", "open", "body"));

    let fields: Vec<String> = surface.validate().into_iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            "Column.Children",
            "Column.Children",
            "Tabs.Tabs[0].Child",
            "Tabs.Tabs[2].Child",
            "Modal.EntryPointChild",
            "Modal.ContentChild",
        ]
    );
}

#[test]
fn test_well_formed_surface_validates_clean() {
    let mut surface = Surface::new("valid");
    surface
        .add(column("root", ["title", "tabs", "dialog", "list"]))
        .add(text_with_hint("title", "Products", a2ui_types::UsageHint::H1))
        .add(tabs("tabs", [tab("One", "one"), tab("Two", "two")]))
        .add(text_static("one", "1"))
        .add(text_static("two", "2"))
        .add(modal("dialog", "open", "details"))
        .add_all(button("open", "Open", "open"))
        .add(card("details", "details_text"))
        .add(text_bound("details_text", "/details"))
        .add(list_template("list", "item", "/items"))
        .add(text_bound("item", "/name"))
        .set_data("/details", "More")
        .set_data("/items", json!([{"name": "Widget"}]));

    let errors = surface.validate();
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_invalid_surface_still_emits_messages() {
    let mut surface = Surface::new("broken");
    surface.set_root("nowhere").add(card("c", "ghost"));

    assert!(!surface.validate().is_empty());
    assert_eq!(surface.messages().len(), 2);
}

#[test]
fn test_concrete_scenario() {
    let mut surface = Surface::new("demo");
    surface
        .add(column("root", ["a", "b"]))
        .add(text_static("a", "Hello"))
        .add(text_static("b", "World"))
        .set_data("/v", 42);

    let messages = surface.messages();
    assert_eq!(messages.len(), 3);

    insta::assert_json_snapshot!(messages, @r###"
    [
      {
        "beginRendering": {
          "surfaceId": "demo",
          "root": "root"
        }
      },
      {
        "updateComponents": {
          "surfaceId": "demo",
          "components": [
            {
              "id": "root",
              "component": "Column",
              "children": [
                "a",
                "b"
              ]
            },
            {
              "id": "a",
              "component": "Text",
              "text": "Hello"
            },
            {
              "id": "b",
              "component": "Text",
              "text": "World"
            }
          ]
        }
      },
      {
        "dataModelUpdate": {
          "surfaceId": "demo",
          "contents": {
            "/v": 42
          }
        }
      }
    ]
    "###);
}
