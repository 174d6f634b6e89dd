use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::{
    status_colors::StatusColor, subscription_statuses::SubscriptionStatus,
    subscription_types::SubscriptionType,
};

/// Subscription columns of a range, read together from a single row fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionRecord {
    pub subscription_type: Option<SubscriptionType>,
    pub subscription_status: Option<SubscriptionStatus>,
    pub subscription_expiry: Option<DateTime<Utc>>,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub canceled_at: Option<DateTime<Utc>>,
}

impl SubscriptionRecord {
    /// A range that is listed in the directory but was never onboarded.
    pub fn unlisted() -> Self {
        Self {
            subscription_type: None,
            subscription_status: Some(SubscriptionStatus::Expired),
            subscription_expiry: None,
            last_payment_date: None,
            canceled_at: None,
        }
    }

    /// No "trial granted" marker is stored, so this is inferred from whatever
    /// subscription data the record still carries. Clearing both columns makes
    /// the range eligible for another trial.
    pub fn has_used_free_trial(&self) -> bool {
        self.subscription_type.is_some() || self.subscription_expiry.is_some()
    }

    pub fn is_unconfigured(&self) -> bool {
        self.subscription_type.is_none()
            && self.subscription_expiry.is_none()
            && matches!(
                self.subscription_status,
                None | Some(SubscriptionStatus::Expired)
            )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaidPlan {
    Monthly,
    Yearly,
}

impl PaidPlan {
    pub fn label(&self) -> &'static str {
        match self {
            PaidPlan::Monthly => "Monthly",
            PaidPlan::Yearly => "Yearly",
        }
    }

    pub fn subscription_type(&self) -> SubscriptionType {
        match self {
            PaidPlan::Monthly => SubscriptionType::Monthly,
            PaidPlan::Yearly => SubscriptionType::Yearly,
        }
    }
}

/// What kind of subscription a range holds, resolved once from the nullable
/// columns. Access is decided separately by `SubscriptionDecision`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "plan", rename_all = "snake_case")]
pub enum SubscriptionStanding {
    Unconfigured,
    Trial,
    Paid(PaidPlan),
    Canceled,
    PastDue,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CallToAction {
    /// Listed but never onboarded: ask the owner to get in touch.
    ContactToActivate,
    /// Had a subscription or trial that no longer grants access.
    Subscribe,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionDecision {
    pub standing: SubscriptionStanding,
    pub is_active: bool,
    pub is_paid: bool,
    pub is_expired: bool,
    pub is_canceled: bool,
    pub is_past_due: bool,
    pub is_trial: bool,
    pub days_remaining: Option<i64>,
    pub days_past_due: Option<i64>,
    pub days_since_last_payment: Option<i64>,
    pub days_since_canceled: Option<i64>,
    pub status_text: String,
    pub status_color: StatusColor,
    pub can_access_full_features: bool,
}

impl SubscriptionDecision {
    pub fn needs_onboarding(&self) -> bool {
        self.standing == SubscriptionStanding::Unconfigured
    }

    pub fn call_to_action(&self) -> Option<CallToAction> {
        if self.can_access_full_features {
            None
        } else if self.needs_onboarding() {
            Some(CallToAction::ContactToActivate)
        } else {
            Some(CallToAction::Subscribe)
        }
    }

    pub fn upgrade_message(&self) -> &'static str {
        if self.needs_onboarding() {
            "This range is in our directory. Contact us to set up live status updates and subscription features."
        } else if self.is_trial && self.is_expired {
            "Your trial has expired. Subscribe now to continue updating your range status."
        } else if self.is_past_due {
            "Your subscription is past due. Please update your payment to continue service."
        } else if self.is_canceled {
            "Your subscription has been canceled. Reactivate to continue updating your status."
        } else if self.is_expired {
            "Your subscription has expired. Renew now to continue using all features."
        } else {
            "Subscribe to access all features including status updates."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn unlisted_record_is_unconfigured_and_has_no_trial_history() {
        let record = SubscriptionRecord::unlisted();

        assert!(record.is_unconfigured());
        assert!(!record.has_used_free_trial());
    }

    #[test]
    fn record_with_lapsed_expiry_has_used_trial() {
        let record = SubscriptionRecord {
            subscription_expiry: Some(Utc::now() - Duration::days(30)),
            ..SubscriptionRecord::unlisted()
        };

        assert!(!record.is_unconfigured());
        assert!(record.has_used_free_trial());
    }

    #[test]
    fn standing_serializes_with_plan_tag() {
        let json = serde_json::to_value(SubscriptionStanding::Paid(PaidPlan::Yearly)).unwrap();

        assert_eq!(json, serde_json::json!({ "kind": "paid", "plan": "yearly" }));
    }
}
