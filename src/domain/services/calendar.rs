use crate::domain::models::event::WeddingEvent;
use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

fn to_ical(event: &WeddingEvent) -> IcalEvent {
    IcalEvent::new()
        .summary(&event.title)
        .description(&event.description)
        .location(&event.location)
        .starts(event.starts_at)
        .ends(event.ends_at)
        .uid(&format!("{}@wedding", event.slug))
        .done()
}

/// Generates an iCalendar (.ics) string for a single schedule entry
pub fn generate_ics(event: &WeddingEvent) -> String {
    let mut calendar = Calendar::new();
    calendar.push(to_ical(event));
    calendar.to_string()
}

/// One calendar holding every schedule entry, for "add all to calendar"
pub fn generate_schedule_ics(events: &[WeddingEvent]) -> String {
    let mut calendar = Calendar::new();
    for event in events {
        calendar.push(to_ical(event));
    }
    calendar.to_string()
}
