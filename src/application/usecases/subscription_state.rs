use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::value_objects::{
    enums::{
        status_colors::StatusColor, subscription_statuses::SubscriptionStatus,
        subscription_types::SubscriptionType,
    },
    subscriptions::{PaidPlan, SubscriptionDecision, SubscriptionRecord, SubscriptionStanding},
};

const RECENT_PAYMENT_DAYS: i64 = 31;

/// Resolves the access decision for a range at `now`.
///
/// Total over every combination of the nullable columns. `subscription_expiry`
/// wins over `subscription_status` whenever it is present; the status column
/// only decides expiry for records that never had a date written. Nothing here
/// reads the wall clock, so callers must pass a fresh `now` on every request.
pub fn derive_subscription_decision(
    record: &SubscriptionRecord,
    now: DateTime<Utc>,
) -> SubscriptionDecision {
    let status = record.subscription_status.unwrap_or_default();
    let paid_plan = paid_plan(record.subscription_type);
    let unconfigured = record.is_unconfigured();

    let is_trial = paid_plan.is_none();
    let is_expired = match record.subscription_expiry {
        Some(expiry) => now > expiry,
        None => status == SubscriptionStatus::Expired,
    };
    let is_canceled = status == SubscriptionStatus::Canceled;
    let is_past_due = status == SubscriptionStatus::PastDue;

    let is_active = if unconfigured {
        false
    } else if is_trial {
        !is_expired
    } else {
        status == SubscriptionStatus::Active && !is_expired
    };
    let is_paid = paid_plan.is_some() && is_active;
    let can_access_full_features = is_active && !is_expired;

    let days_remaining = record
        .subscription_expiry
        .map(|expiry| ceil_days(expiry - now));
    let days_past_due = record
        .subscription_expiry
        .filter(|expiry| now > *expiry)
        .map(|expiry| ceil_days(now - expiry));
    let days_since_last_payment = record.last_payment_date.map(|paid| ceil_days(now - paid));
    let days_since_canceled = record
        .canceled_at
        .map(|canceled| ceil_days(now - canceled));

    let standing = if unconfigured {
        SubscriptionStanding::Unconfigured
    } else if is_canceled {
        SubscriptionStanding::Canceled
    } else {
        match paid_plan {
            None => SubscriptionStanding::Trial,
            Some(_) if is_past_due => SubscriptionStanding::PastDue,
            Some(plan) => SubscriptionStanding::Paid(plan),
        }
    };

    let (status_text, status_color) = if unconfigured {
        ("Needs Account Setup".to_string(), StatusColor::Gray)
    } else if is_canceled {
        let text = match days_since_canceled {
            Some(days) => format!("Canceled {days} days ago"),
            None => "Canceled".to_string(),
        };
        (text, StatusColor::Red)
    } else if let (true, Some(days)) = (is_past_due, days_past_due) {
        (format!("Past Due ({days} days overdue)"), StatusColor::Orange)
    } else if let (true, Some(days)) = (is_trial, days_remaining) {
        if days > 0 {
            (format!("Trial ({days} days remaining)"), StatusColor::Blue)
        } else {
            ("Trial Expired".to_string(), StatusColor::Red)
        }
    } else if let (true, Some(days)) = (is_expired, days_past_due) {
        (format!("Expired ({days} days ago)"), StatusColor::Red)
    } else if let (true, Some(plan)) = (is_paid, paid_plan) {
        let text = match days_since_last_payment {
            Some(days) if days <= RECENT_PAYMENT_DAYS => {
                format!("{} (paid {days} days ago)", plan.label())
            }
            _ => format!("{} Subscription", plan.label()),
        };
        (text, StatusColor::Green)
    } else {
        ("Unknown Status".to_string(), StatusColor::Gray)
    };

    SubscriptionDecision {
        standing,
        is_active,
        is_paid,
        is_expired,
        is_canceled,
        is_past_due,
        is_trial,
        days_remaining,
        days_past_due,
        days_since_last_payment,
        days_since_canceled,
        status_text,
        status_color,
        can_access_full_features,
    }
}

/// A missing type is read as a trial.
fn paid_plan(subscription_type: Option<SubscriptionType>) -> Option<PaidPlan> {
    match subscription_type {
        Some(SubscriptionType::Monthly) => Some(PaidPlan::Monthly),
        Some(SubscriptionType::Yearly) => Some(PaidPlan::Yearly),
        Some(SubscriptionType::Trial) | None => None,
    }
}

/// Whole days, rounded up: 0.3 days left reads as 1.
fn ceil_days(delta: TimeDelta) -> i64 {
    let days = delta.num_days();
    if delta > TimeDelta::days(days) {
        days + 1
    } else {
        days
    }
}
