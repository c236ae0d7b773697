use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct RecordTransaction {
    pub user_id: Option<String>,
    pub description: Option<String>,
    pub points: Option<i64>,
    pub date: Option<DateTime<Utc>>,
}
