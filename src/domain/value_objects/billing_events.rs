use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    enums::{subscription_statuses::SubscriptionStatus, subscription_types::SubscriptionType},
    subscriptions::{PaidPlan, SubscriptionRecord},
};

/// Subscription changes reported by the billing provider, already verified and
/// decoded by the webhook handler. Delivery order is not guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BillingEvent {
    CheckoutCompleted {
        plan: PaidPlan,
        expiry: DateTime<Utc>,
    },
    PaymentSucceeded {
        paid_at: DateTime<Utc>,
        period_end: DateTime<Utc>,
    },
    StatusChanged {
        status: SubscriptionStatus,
    },
    SubscriptionCanceled {
        canceled_at: DateTime<Utc>,
    },
    TrialWillEnd,
}

impl SubscriptionRecord {
    /// A fresh trial record. Earlier payment and cancellation history is not
    /// carried over.
    pub fn trial(now: DateTime<Utc>, trial_days: i64) -> SubscriptionRecord {
        SubscriptionRecord {
            subscription_type: Some(SubscriptionType::Trial),
            subscription_status: Some(SubscriptionStatus::Active),
            subscription_expiry: Some(now + Duration::days(trial_days)),
            last_payment_date: None,
            canceled_at: None,
        }
    }

    /// Returns the columns the billing collaborator should write after `event`.
    pub fn apply(&self, event: &BillingEvent) -> SubscriptionRecord {
        let mut next = self.clone();

        match event {
            BillingEvent::CheckoutCompleted { plan, expiry } => {
                next.subscription_type = Some(plan.subscription_type());
                next.subscription_status = Some(SubscriptionStatus::Active);
                next.subscription_expiry = Some(*expiry);
                next.canceled_at = None;
            }
            BillingEvent::PaymentSucceeded {
                paid_at,
                period_end,
            } => {
                next.subscription_status = Some(SubscriptionStatus::Active);
                next.subscription_expiry = Some(*period_end);
                next.last_payment_date = Some(*paid_at);
            }
            BillingEvent::StatusChanged { status } => {
                next.subscription_status = Some(*status);
            }
            BillingEvent::SubscriptionCanceled { canceled_at } => {
                next.subscription_status = Some(SubscriptionStatus::Canceled);
                next.subscription_expiry = Some(*canceled_at);
                next.canceled_at = Some(*canceled_at);
            }
            BillingEvent::TrialWillEnd => {}
        }

        next
    }
}
