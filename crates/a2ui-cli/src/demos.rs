//! Sample surfaces.
//!
//! Each demo is a list of stages; a stage is the batch of messages a producer
//! would write and flush together. Single-shot demos have one stage.

use crate::types::DemoName;
use a2ui_engine::Surface;
use a2ui_engine::types::Message;
use a2ui_engine::types::factory::*;
use serde_json::{Map, Value, json};

pub fn stages(name: DemoName) -> Vec<Vec<Message>> {
    match name {
        DemoName::Itinerary => itinerary(),
        DemoName::Booking => vec![booking()],
    }
}

struct Day {
    number: u32,
    title: &'static str,
    activities: &'static [&'static str],
}

const DAYS: [Day; 3] = [
    Day {
        number: 1,
        title: "Day 1: Arrival",
        activities: &[
            "Airport pickup at 10:00 AM",
            "Hotel check-in at Grand Hotel",
            "Welcome dinner at La Terrazza",
        ],
    },
    Day {
        number: 2,
        title: "Day 2: City Exploration",
        activities: &[
            "Breakfast at hotel",
            "City walking tour (9:00 AM - 12:00 PM)",
            "Lunch at local market",
            "Museum visit (2:00 PM - 5:00 PM)",
            "Free evening",
        ],
    },
    Day {
        number: 3,
        title: "Day 3: Departure",
        activities: &[
            "Breakfast and checkout",
            "Souvenir shopping",
            "Airport transfer at 2:00 PM",
            "Flight departure at 5:00 PM",
        ],
    },
];

fn add_day(surface: &mut Surface, day: &Day) {
    let n = day.number;
    let activities: Vec<Value> = day
        .activities
        .iter()
        .map(|name| json!({ "name": name }))
        .collect();

    surface
        .add(card(format!("day{n}"), format!("day{n}-content")))
        .add(column(
            format!("day{n}-content"),
            [format!("day{n}-title"), format!("day{n}-activities")],
        ))
        .add(text_bound(format!("day{n}-title"), format!("/day{n}/title")))
        .add(list_template(
            format!("day{n}-activities"),
            format!("day{n}-activity"),
            format!("/day{n}/activities"),
        ))
        .add(text_bound(format!("day{n}-activity"), "/name"))
        .set_data(format!("/day{n}/title"), day.title)
        .set_data(format!("/day{n}/activities"), activities);
}

/// Travel itinerary that fills in one day per stage.
///
/// The `content` column is re-added with a longer child list at every stage.
/// Renderers keep the last entry per id, so the list grows on screen, but the
/// snapshots carry duplicate ids that `a2ui lint` reports.
fn itinerary() -> Vec<Vec<Message>> {
    let mut surface = Surface::new("itinerary");
    let mut stages = Vec::new();

    surface
        .add(column("root", ["header", "content", "footer"]))
        .add(text_static("header", "Your Travel Itinerary"))
        .add(column("content", ["loading"]))
        .add(text_static("loading", "Planning your trip..."))
        .add(text_static("footer", ""));
    stages.push(surface.messages());

    let mut shown = Vec::new();
    for day in &DAYS {
        add_day(&mut surface, day);
        shown.push(format!("day{}", day.number));
        surface.add(column("content", shown.clone()));
        stages.push(incremental(&surface));
    }

    surface
        .add(card("summary", "summary-content"))
        .add(column(
            "summary-content",
            ["summary-title", "summary-total"],
        ))
        .add(text_static("summary-title", "Trip Summary"))
        .add(text_bound("summary-total", "/summary/total"))
        .set_data("/summary/total", "Total estimated cost: $1,250");
    shown.push("summary".to_string());
    surface
        .add(column("content", shown))
        .add(text_static("footer", "Have a great trip!"));
    stages.push(incremental(&surface));

    stages
}

fn incremental(surface: &Surface) -> Vec<Message> {
    vec![
        surface.update_components_message(),
        surface.data_model_update_message(),
    ]
}

/// Restaurant booking form with inputs bound to `/form/*`.
fn booking() -> Vec<Message> {
    let mut surface = Surface::new("booking-form");

    let mut submit = Map::new();
    submit.insert("endpoint".to_string(), json!("/submit"));

    surface
        .add(column("root", ["header", "form-card", "status"]))
        .add(text_with_hint(
            "header",
            "Restaurant Booking",
            a2ui_engine::types::UsageHint::H2,
        ))
        .add(card("form-card", "form-content"))
        .add(column(
            "form-content",
            [
                "name-field",
                "date-field",
                "time-field",
                "party-field",
                "submit-btn",
            ],
        ))
        .add(text_field_bound("name-field", "Name", "Your name", "/form/name"))
        .add(date_time_input_bound(
            "date-field",
            "Date",
            "/form/date",
            true,
            false,
        ))
        .add(date_time_input_bound(
            "time-field",
            "Time",
            "/form/time",
            false,
            true,
        ))
        .add(slider_bound("party-field", "Party Size", "/form/party", 1.0, 12.0))
        .add_all(button_with_data("submit-btn", "Book Table", "submit", submit))
        .add(text_static("status", ""))
        .set_data("/form/name", "")
        .set_data("/form/date", "")
        .set_data("/form/time", "19:00")
        .set_data("/form/party", 2);

    surface.messages()
}
