use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::{busy_times::StatusEvent, enums::crowd_levels::CrowdLevel};

#[derive(Debug, Clone)]
pub struct StatusEventEntity {
    pub id: Uuid,
    pub range_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<StatusEventEntity> for StatusEvent {
    fn from(value: StatusEventEntity) -> Self {
        Self {
            status: CrowdLevel::from_str(&value.status),
            created_at: value.created_at,
        }
    }
}
