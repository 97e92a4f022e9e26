//! SQLite persistence layer for the raw warehouse tables.
//!
//! RULE: Only the store talks to the database.
//! Stages produce records; the store decides how they become rows.

use crate::{
    dataset::{Dataset, TableRecord},
    error::{GenError, GenResult},
};
use chrono::NaiveDateTime;
use rusqlite::{Connection, Transaction};

mod dimensions;
mod facts;

/// Every table the store knows, in load order.
pub const TABLES: [&str; 6] = [
    "customers",
    "products",
    "orders",
    "order_items",
    "web_sessions",
    "marketing_spend",
];

pub struct WarehouseStore {
    conn: Connection,
}

impl WarehouseStore {
    /// Open (or create) the warehouse database at `path`.
    pub fn open(path: &str) -> GenResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only applies to real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> GenResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Create the raw tables. Safe to call on an existing database.
    pub fn migrate(&self) -> GenResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_raw_tables.sql"))?;
        Ok(())
    }

    /// Bulk-load every present table in one transaction, replacing the
    /// rows already stored for those tables, then build the lookup indexes.
    pub fn load_dataset(&mut self, dataset: &Dataset) -> GenResult<()> {
        let tx = self.conn.transaction()?;
        load_table(&tx, dataset.customers.as_deref(), dimensions::insert_customer)?;
        load_table(&tx, dataset.products.as_deref(), dimensions::insert_product)?;
        load_table(&tx, dataset.orders.as_deref(), facts::insert_order)?;
        load_table(&tx, dataset.order_items.as_deref(), facts::insert_order_item)?;
        load_table(&tx, dataset.web_sessions.as_deref(), facts::insert_web_session)?;
        load_table(&tx, dataset.marketing_spend.as_deref(), facts::insert_marketing_spend)?;
        tx.execute_batch(include_str!("../../../migrations/002_indexes.sql"))?;
        tx.commit()?;
        Ok(())
    }

    pub fn row_count(&self, table: &str) -> GenResult<i64> {
        if !TABLES.contains(&table) {
            return Err(GenError::InvalidArgument(format!("unknown table '{table}'")));
        }
        let n: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        Ok(n)
    }

    /// Index names present in the database, sorted.
    pub fn index_names(&self) -> GenResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'index' AND name LIKE 'idx_%'
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }
}

fn load_table<T: TableRecord>(
    tx: &Transaction<'_>,
    rows: Option<&[T]>,
    insert: fn(&Transaction<'_>, &T) -> rusqlite::Result<()>,
) -> GenResult<()> {
    let Some(rows) = rows else {
        return Ok(());
    };
    tx.execute(&format!("DELETE FROM {}", T::TABLE), [])?;
    for row in rows {
        insert(tx, row)?;
    }
    log::info!("store: loaded {} rows into {}", rows.len(), T::TABLE);
    Ok(())
}

/// Timestamps are stored in the same ISO form the CSV export uses.
fn timestamp(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// `INSERT INTO <table> (<columns>) VALUES (?1, .., ?n)` for a record type.
fn insert_sql<T: TableRecord>() -> String {
    let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("?{i}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        T::TABLE,
        T::COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketing_generator::MarketingSpendRecord;

    #[test]
    fn insert_sql_lists_every_column() {
        let sql = insert_sql::<MarketingSpendRecord>();
        assert!(sql.starts_with("INSERT INTO marketing_spend (spend_date, channel,"));
        assert!(sql.ends_with("?12, ?13)"));
    }

    #[test]
    fn migrate_is_idempotent() {
        let store = WarehouseStore::in_memory().unwrap();
        store.migrate().unwrap();
        store.migrate().unwrap();
        for table in TABLES {
            assert_eq!(store.row_count(table).unwrap(), 0);
        }
    }

    #[test]
    fn unknown_table_is_rejected() {
        let store = WarehouseStore::in_memory().unwrap();
        store.migrate().unwrap();
        assert!(matches!(
            store.row_count("customers; DROP TABLE orders"),
            Err(GenError::InvalidArgument(_))
        ));
    }
}
