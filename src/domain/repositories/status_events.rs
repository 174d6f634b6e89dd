use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::status_events::StatusEventEntity;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusEventRepository {
    /// Events with `created_at >= from`, oldest first, from one consistent snapshot.
    async fn list_since(
        &self,
        range_id: Uuid,
        from: DateTime<Utc>,
    ) -> Result<Vec<StatusEventEntity>>;
}
