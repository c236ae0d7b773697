use chrono::{DateTime, TimeZone, Utc};

use crate::modules::loyalty_history::core::records::{
    NewPointEvent, NewTransactionEvent, PointEvent, TransactionEvent,
};

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

pub struct PointEventBuilder {
    id: String,
    user_id: String,
    points: i64,
    date: String,
}

impl PointEventBuilder {
    pub fn new() -> Self {
        Self {
            id: "qr-fixed-0001".into(),
            user_id: "user-fixed-0001".into(),
            points: 10,
            date: "2024-05-01 10:00:00.000".into(),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.into();
        self
    }

    pub fn user_id(mut self, user_id: &str) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.into();
        self
    }

    pub fn build(self) -> PointEvent {
        PointEvent {
            id: self.id,
            user_id: self.user_id,
            points: self.points,
            date: self.date,
        }
    }
}

pub struct TransactionEventBuilder {
    id: i64,
    user_id: String,
    description: String,
    points: i64,
    date: String,
}

impl TransactionEventBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            user_id: "user-fixed-0001".into(),
            description: "redeem".into(),
            points: 5,
            date: "2024-05-01 09:00:00.000".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn user_id(mut self, user_id: &str) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.into();
        self
    }

    pub fn points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.into();
        self
    }

    pub fn build(self) -> TransactionEvent {
        TransactionEvent {
            id: self.id,
            user_id: self.user_id,
            description: self.description,
            points: self.points,
            date: self.date,
        }
    }
}

pub fn new_point(id: &str, user_id: &str, points: i64, date: DateTime<Utc>) -> NewPointEvent {
    NewPointEvent {
        id: id.into(),
        user_id: user_id.into(),
        points,
        date,
    }
}

pub fn new_transaction(
    user_id: &str,
    description: &str,
    points: i64,
    date: DateTime<Utc>,
) -> NewTransactionEvent {
    NewTransactionEvent {
        user_id: user_id.into(),
        description: description.into(),
        points,
        date,
    }
}
