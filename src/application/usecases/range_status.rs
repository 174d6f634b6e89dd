use std::sync::Arc;

use chrono::Duration;
use chrono_tz::Tz;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::application::usecases::{
    busy_times::{LOOKBACK_DAYS, analyze_busy_times},
    subscription_state::derive_subscription_decision,
};
use crate::domain::{
    clock::Clock,
    entities::ranges::RangeEntity,
    repositories::{ranges::RangeRepository, status_events::StatusEventRepository},
    value_objects::{
        busy_times::{BusyTimeReport, StatusEvent},
        subscriptions::{CallToAction, SubscriptionDecision, SubscriptionRecord},
    },
};

#[derive(Debug, Error)]
pub enum RangeStatusError {
    #[error("range not found: {0}")]
    RangeNotFound(Uuid),
    #[error("subscription does not allow status updates ({status_text})")]
    SubscriptionRequired {
        call_to_action: CallToAction,
        status_text: String,
    },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type UseCaseResult<T> = std::result::Result<T, RangeStatusError>;

#[derive(Debug, Clone, Serialize)]
pub struct RangeOverview {
    pub range_id: Uuid,
    pub slug: String,
    pub name: String,
    pub subscription: SubscriptionDecision,
    /// Only computed when the subscription grants full access.
    pub busy_times: Option<BusyTimeReport>,
}

pub struct RangeStatusUseCase<R, E, C>
where
    R: RangeRepository + Send + Sync + 'static,
    E: StatusEventRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    range_repo: Arc<R>,
    status_event_repo: Arc<E>,
    clock: Arc<C>,
    timezone: Tz,
}

impl<R, E, C> RangeStatusUseCase<R, E, C>
where
    R: RangeRepository + Send + Sync + 'static,
    E: StatusEventRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    pub fn new(
        range_repo: Arc<R>,
        status_event_repo: Arc<E>,
        clock: Arc<C>,
        timezone: Tz,
    ) -> Self {
        Self {
            range_repo,
            status_event_repo,
            clock,
            timezone,
        }
    }

    pub async fn subscription_decision(
        &self,
        range_id: Uuid,
    ) -> UseCaseResult<SubscriptionDecision> {
        let range = self.load_range(range_id).await?;

        Ok(derive_subscription_decision(
            &SubscriptionRecord::from(&range),
            self.clock.now(),
        ))
    }

    /// Everything the public range page needs. Busy times are loaded only
    /// after the subscription check passes.
    pub async fn range_overview(&self, range_id: Uuid) -> UseCaseResult<RangeOverview> {
        let range = self.load_range(range_id).await?;
        let now = self.clock.now();
        let subscription = derive_subscription_decision(&SubscriptionRecord::from(&range), now);

        let busy_times = if subscription.can_access_full_features {
            let from = now - Duration::days(LOOKBACK_DAYS);
            let events: Vec<StatusEvent> = self
                .status_event_repo
                .list_since(range_id, from)
                .await
                .map_err(|err| {
                    error!(
                        %range_id,
                        db_error = ?err,
                        "range_status: failed to load status events"
                    );
                    RangeStatusError::Internal(err)
                })?
                .into_iter()
                .map(StatusEvent::from)
                .collect();

            let report = analyze_busy_times(&events, now.with_timezone(&self.timezone));
            info!(
                %range_id,
                event_count = events.len(),
                has_enough_data = report.has_enough_data,
                "range_status: busy times analyzed"
            );
            Some(report)
        } else {
            info!(
                %range_id,
                status_text = %subscription.status_text,
                "range_status: live status hidden by subscription"
            );
            None
        };

        Ok(RangeOverview {
            range_id: range.id,
            slug: range.slug,
            name: range.name,
            subscription,
            busy_times,
        })
    }

    /// Gate for the portal's status-update action.
    pub async fn authorize_status_update(
        &self,
        range_id: Uuid,
    ) -> UseCaseResult<SubscriptionDecision> {
        let decision = self.subscription_decision(range_id).await?;

        match decision.call_to_action() {
            None => Ok(decision),
            Some(call_to_action) => {
                let err = RangeStatusError::SubscriptionRequired {
                    call_to_action,
                    status_text: decision.status_text.clone(),
                };
                warn!(
                    %range_id,
                    call_to_action = ?call_to_action,
                    "range_status: status update rejected"
                );
                Err(err)
            }
        }
    }

    async fn load_range(&self, range_id: Uuid) -> UseCaseResult<RangeEntity> {
        self.range_repo
            .find_by_id(range_id)
            .await
            .map_err(|err| {
                error!(
                    %range_id,
                    db_error = ?err,
                    "range_status: failed to load range"
                );
                RangeStatusError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%range_id, "range_status: range not found");
                RangeStatusError::RangeNotFound(range_id)
            })
    }
}
