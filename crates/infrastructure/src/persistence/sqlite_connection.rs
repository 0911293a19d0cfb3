//! SQLite engine adapter

use application::ports::SqlConnectionPort;
use domain::{CellValue, QueryFrame, SqlParam};
use rusqlite::types::{Value, ValueRef};
use rusqlite::{Connection, params_from_iter};
use tracing::{debug, info};

use super::IN_MEMORY;

/// Exclusively owned SQLite connection
#[derive(Debug)]
pub struct SqliteConnection {
    conn: Connection,
    path: String,
}

impl SqliteConnection {
    /// Open a connection to `path`, or an ephemeral database for `":memory:"`
    pub fn open(path: &str) -> Result<Self, rusqlite::Error> {
        info!(path, "Opening SQLite connection");

        let conn = if path == IN_MEMORY {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };

        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    /// Open an ephemeral in-memory database
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::open(IN_MEMORY)
    }

    /// Target this connection was opened with
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Borrow the underlying `rusqlite` connection
    pub const fn raw(&self) -> &Connection {
        &self.conn
    }
}

impl SqlConnectionPort for SqliteConnection {
    type Error = rusqlite::Error;

    fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<usize, Self::Error> {
        self.conn
            .execute(sql, params_from_iter(params.iter().map(to_sqlite_value)))
    }

    fn query(&self, sql: &str, params: &[SqlParam]) -> Result<QueryFrame, Self::Error> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        let width = columns.len();

        let mut rows_result = stmt.query(params_from_iter(params.iter().map(to_sqlite_value)))?;
        let mut rows = Vec::new();
        while let Some(row) = rows_result.next()? {
            let values = (0..width)
                .map(|i| row.get_ref(i).map(sqlite_value_to_cell))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(values);
        }
        debug!(rows = rows.len(), columns = width, "SQLite query materialized");

        Ok(QueryFrame::new(columns, rows))
    }

    fn execute_batch(&self, sql: &str) -> Result<(), Self::Error> {
        self.conn.execute_batch(sql)
    }

    fn is_autocommit(&self) -> bool {
        self.conn.is_autocommit()
    }

    fn engine_version(&self) -> Result<String, Self::Error> {
        Ok(format!("SQLite {}", rusqlite::version()))
    }
}

fn to_sqlite_value(param: &SqlParam) -> Value {
    match param {
        SqlParam::Null => Value::Null,
        SqlParam::Boolean(b) => Value::Integer(i64::from(*b)),
        SqlParam::Integer(i) => Value::Integer(*i),
        SqlParam::Double(d) => Value::Real(*d),
        SqlParam::Text(s) => Value::Text(s.clone()),
        SqlParam::Blob(b) => Value::Blob(b.clone()),
    }
}

fn sqlite_value_to_cell(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(i) => CellValue::Integer(i),
        ValueRef::Real(f) => CellValue::Double(f),
        ValueRef::Text(s) => CellValue::Text(String::from_utf8_lossy(s).into_owned()),
        ValueRef::Blob(b) => CellValue::Blob(b.to_vec()),
    }
}
