pub mod billing_events;
pub mod busy_times;
pub mod enums;
pub mod subscriptions;
