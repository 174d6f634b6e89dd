pub mod ranges;
pub mod status_events;
