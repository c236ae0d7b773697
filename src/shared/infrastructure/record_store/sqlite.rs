//! SQLite implementation of the record store.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::query::Query;
use sqlx::{Row, Sqlite, SqlitePool};

use crate::modules::loyalty_history::core::mutation::{
    Assignment, DeleteStatement, UpdateStatement, transaction_id,
};
use crate::modules::loyalty_history::core::records::{
    DateRange, NewPointEvent, NewTransactionEvent, PointEvent, TransactionEvent,
};
use crate::modules::loyalty_history::core::tables::HistoryTable;
use crate::modules::loyalty_history::core::timestamp::{STORED_FORMAT, format_timestamp};
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};

pub const CREATE_POINTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS histPoints (
    id TEXT PRIMARY KEY NOT NULL,
    iduser TEXT NOT NULL,
    points INTEGER NOT NULL,
    date TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
)
";

pub const CREATE_TRANSACTIONS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS histtransactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    iduser TEXT NOT NULL,
    description TEXT NOT NULL,
    points INTEGER NOT NULL,
    date TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
)
";

const CREATE_POINTS_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_histpoints_iduser ON histPoints (iduser, date)";

const CREATE_TRANSACTIONS_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_histtransactions_iduser ON histtransactions (iduser, date)";

const SELECT_POINTS: &str = "SELECT id, iduser, points, date FROM histPoints WHERE iduser = ?";

const SELECT_TRANSACTIONS: &str =
    "SELECT id, iduser, description, points, date FROM histtransactions WHERE iduser = ?";

const RANGE_FILTER: &str = " AND date >= ? AND date < ?";

const INSERTION_ORDER: &str = " ORDER BY rowid";

pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create both tables and their per-user indexes if missing.
    pub async fn init(&self) -> Result<(), StoreError> {
        for statement in [
            CREATE_POINTS_TABLE,
            CREATE_TRANSACTIONS_TABLE,
            CREATE_POINTS_USER_INDEX,
            CREATE_TRANSACTIONS_USER_INDEX,
        ] {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn select_for_user(base: &str, range: Option<DateRange>) -> String {
    let filter = if range.is_some() { RANGE_FILTER } else { "" };
    format!("{base}{filter}{INSERTION_ORDER}")
}

fn bind_range<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    range: Option<DateRange>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match range {
        Some(range) => query
            .bind(range.lower_bound().format(STORED_FORMAT).to_string())
            .bind(range.upper_bound().format(STORED_FORMAT).to_string()),
        None => query,
    }
}

// Transaction ids are integers; bind them as such so the comparison does not
// depend on column affinity.
fn bind_record_id<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    table: HistoryTable,
    record_id: &'q str,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match (table, transaction_id(record_id)) {
        (HistoryTable::Transactions, Some(id)) => query.bind(id),
        _ => query.bind(record_id),
    }
}

fn point_from_row(row: &SqliteRow) -> Result<PointEvent, StoreError> {
    Ok(PointEvent {
        id: row.try_get("id")?,
        user_id: row.try_get("iduser")?,
        points: row.try_get("points")?,
        date: row.try_get("date")?,
    })
}

fn transaction_from_row(row: &SqliteRow) -> Result<TransactionEvent, StoreError> {
    Ok(TransactionEvent {
        id: row.try_get("id")?,
        user_id: row.try_get("iduser")?,
        description: row.try_get("description")?,
        points: row.try_get("points")?,
        date: row.try_get("date")?,
    })
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn insert_point(&self, point: NewPointEvent) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO histPoints (id, iduser, points, date) VALUES (?, ?, ?, ?)")
            .bind(point.id)
            .bind(point.user_id)
            .bind(point.points)
            .bind(format_timestamp(point.date))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert_transaction(
        &self,
        transaction: NewTransactionEvent,
    ) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO histtransactions (iduser, description, points, date) VALUES (?, ?, ?, ?)",
        )
        .bind(transaction.user_id)
        .bind(transaction.description)
        .bind(transaction.points)
        .bind(format_timestamp(transaction.date))
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn points_for_user(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<PointEvent>, StoreError> {
        let sql = select_for_user(SELECT_POINTS, range);
        let rows = bind_range(sqlx::query(&sql).bind(user_id), range)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(point_from_row).collect()
    }

    async fn transactions_for_user(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<TransactionEvent>, StoreError> {
        let sql = select_for_user(SELECT_TRANSACTIONS, range);
        let rows = bind_range(sqlx::query(&sql).bind(user_id), range)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(transaction_from_row).collect()
    }

    async fn apply_update(&self, statement: &UpdateStatement) -> Result<u64, StoreError> {
        let sql = statement.sql();
        let mut query = sqlx::query(&sql);
        for assignment in &statement.assignments {
            query = match assignment {
                Assignment::Points(points) => query.bind(*points),
                Assignment::Description(description) => query.bind(description.as_str()),
            };
        }
        let result = bind_record_id(query, statement.table, &statement.record_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn apply_delete(&self, statement: &DeleteStatement) -> Result<u64, StoreError> {
        let sql = statement.sql();
        let query = sqlx::query(&sql);
        let result = bind_record_id(query, statement.table, &statement.record_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
