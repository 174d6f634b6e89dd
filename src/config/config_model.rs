use chrono_tz::Tz;

use super::stage::Stage;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub stage: Stage,
    pub analytics: Analytics,
    pub subscriptions: Subscriptions,
}

#[derive(Debug, Clone)]
pub struct Analytics {
    /// Zone used to bucket status events into weekday and hour.
    pub timezone: Tz,
}

#[derive(Debug, Clone)]
pub struct Subscriptions {
    pub trial_period_days: i64,
}
