use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::ranges::RangeEntity;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RangeRepository {
    /// Subscription columns must come from this single read.
    async fn find_by_id(&self, range_id: Uuid) -> Result<Option<RangeEntity>>;
}
