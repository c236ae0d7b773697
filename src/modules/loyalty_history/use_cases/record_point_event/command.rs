use chrono::{DateTime, Utc};

/// Fields as received at the boundary; presence is checked by the handler.
#[derive(Debug, Clone, Default)]
pub struct RecordPointEvent {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub points: Option<i64>,
    pub date: Option<DateTime<Utc>>,
}
