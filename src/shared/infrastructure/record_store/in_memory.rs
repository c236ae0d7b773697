use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::loyalty_history::core::mutation::{
    Assignment, DeleteStatement, UpdateStatement, transaction_id,
};
use crate::modules::loyalty_history::core::records::{
    DateRange, NewPointEvent, NewTransactionEvent, PointEvent, TransactionEvent,
};
use crate::modules::loyalty_history::core::tables::HistoryTable;
use crate::modules::loyalty_history::core::timestamp::{format_timestamp, parse_timestamp};
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};

#[derive(Default)]
struct Transactions {
    rows: Vec<TransactionEvent>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryRecordStore {
    points: RwLock<Vec<PointEvent>>,
    transactions: RwLock<Transactions>,
    is_offline: bool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Seed a row verbatim, e.g. one whose date no longer parses.
    pub async fn seed_point(&self, point: PointEvent) {
        self.points.write().await.push(point);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Record store offline".into()));
        }
        Ok(())
    }
}

fn in_range(date: &str, range: Option<DateRange>) -> bool {
    match range {
        None => true,
        Some(range) => parse_timestamp(date).is_some_and(|at| range.contains(at)),
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert_point(&self, point: NewPointEvent) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut rows = self.points.write().await;
        if rows.iter().any(|row| row.id == point.id) {
            return Err(StoreError::ConstraintViolation(format!(
                "unique constraint violation: histPoints.id '{}'",
                point.id
            )));
        }
        rows.push(PointEvent {
            id: point.id,
            user_id: point.user_id,
            points: point.points,
            date: format_timestamp(point.date),
        });
        Ok(())
    }

    async fn insert_transaction(
        &self,
        transaction: NewTransactionEvent,
    ) -> Result<i64, StoreError> {
        self.ensure_online()?;
        let mut guard = self.transactions.write().await;
        guard.last_id += 1;
        let id = guard.last_id;
        guard.rows.push(TransactionEvent {
            id,
            user_id: transaction.user_id,
            description: transaction.description,
            points: transaction.points,
            date: format_timestamp(transaction.date),
        });
        Ok(id)
    }

    async fn points_for_user(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<PointEvent>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .points
            .read()
            .await
            .iter()
            .filter(|row| row.user_id == user_id && in_range(&row.date, range))
            .cloned()
            .collect())
    }

    async fn transactions_for_user(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<TransactionEvent>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .transactions
            .read()
            .await
            .rows
            .iter()
            .filter(|row| row.user_id == user_id && in_range(&row.date, range))
            .cloned()
            .collect())
    }

    async fn apply_update(&self, statement: &UpdateStatement) -> Result<u64, StoreError> {
        self.ensure_online()?;
        let mut affected = 0;
        match statement.table {
            HistoryTable::Points => {
                let mut rows = self.points.write().await;
                for row in rows.iter_mut().filter(|row| row.id == statement.record_id) {
                    for assignment in &statement.assignments {
                        if let Assignment::Points(points) = assignment {
                            row.points = *points;
                        }
                    }
                    affected += 1;
                }
            }
            HistoryTable::Transactions => {
                let target = transaction_id(&statement.record_id);
                let mut guard = self.transactions.write().await;
                for row in guard.rows.iter_mut().filter(|row| Some(row.id) == target) {
                    for assignment in &statement.assignments {
                        match assignment {
                            Assignment::Points(points) => row.points = *points,
                            Assignment::Description(description) => {
                                row.description = description.clone()
                            }
                        }
                    }
                    affected += 1;
                }
            }
        }
        Ok(affected)
    }

    async fn apply_delete(&self, statement: &DeleteStatement) -> Result<u64, StoreError> {
        self.ensure_online()?;
        let removed = match statement.table {
            HistoryTable::Points => {
                let mut rows = self.points.write().await;
                let before = rows.len();
                rows.retain(|row| row.id != statement.record_id);
                before - rows.len()
            }
            HistoryTable::Transactions => {
                let target = transaction_id(&statement.record_id);
                let mut guard = self.transactions.write().await;
                let before = guard.rows.len();
                guard.rows.retain(|row| Some(row.id) != target);
                before - guard.rows.len()
            }
        };
        Ok(removed as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_online()
    }
}
