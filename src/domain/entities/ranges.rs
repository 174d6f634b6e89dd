use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::{
    enums::{subscription_statuses::SubscriptionStatus, subscription_types::SubscriptionType},
    subscriptions::SubscriptionRecord,
};

/// Range row as returned by the storage layer. Subscription columns are stored
/// as free text and may be missing on older rows.
#[derive(Debug, Clone)]
pub struct RangeEntity {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub subscription_type: Option<String>,
    pub subscription_status: Option<String>,
    pub subscription_expiry: Option<DateTime<Utc>>,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub canceled_at: Option<DateTime<Utc>>,
}

impl From<&RangeEntity> for SubscriptionRecord {
    fn from(value: &RangeEntity) -> Self {
        Self {
            subscription_type: value
                .subscription_type
                .as_deref()
                .and_then(SubscriptionType::from_str),
            subscription_status: value
                .subscription_status
                .as_deref()
                .and_then(SubscriptionStatus::from_str),
            subscription_expiry: value.subscription_expiry,
            last_payment_date: value.last_payment_date,
            canceled_at: value.canceled_at,
        }
    }
}
