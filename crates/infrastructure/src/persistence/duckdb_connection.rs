//! DuckDB engine adapter
//!
//! The default engine: an embedded analytical database, in memory unless a
//! file path is given.

use std::cell::Cell;

use application::ports::SqlConnectionPort;
use chrono::{DateTime, NaiveDateTime, NaiveTime};
use domain::{CellValue, QueryFrame, SqlParam};
use duckdb::types::{TimeUnit, Value};
use duckdb::{Connection, params_from_iter};
use tracing::{debug, info};

use super::IN_MEMORY;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Exclusively owned DuckDB connection
#[derive(Debug)]
pub struct DuckDbConnection {
    conn: Connection,
    path: String,
    // duckdb-rs reports autocommit unconditionally, so explicit
    // transactions opened through the port are tracked here.
    in_transaction: Cell<bool>,
}

impl DuckDbConnection {
    /// Open a connection to `path`, or an ephemeral database for `":memory:"`
    pub fn open(path: &str) -> Result<Self, duckdb::Error> {
        info!(path, "Opening DuckDB connection");

        let conn = if path == IN_MEMORY {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };

        Ok(Self {
            conn,
            path: path.to_string(),
            in_transaction: Cell::new(false),
        })
    }

    /// Open an ephemeral in-memory database
    pub fn open_in_memory() -> Result<Self, duckdb::Error> {
        Self::open(IN_MEMORY)
    }

    /// Target this connection was opened with
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Borrow the underlying `duckdb` connection
    pub const fn raw(&self) -> &Connection {
        &self.conn
    }

    fn end_transaction(&self, sql: &str) -> Result<(), duckdb::Error> {
        // A failed COMMIT aborts the transaction too.
        let result = self.conn.execute_batch(sql);
        self.in_transaction.set(false);
        result
    }
}

impl SqlConnectionPort for DuckDbConnection {
    type Error = duckdb::Error;

    fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<usize, Self::Error> {
        self.conn
            .execute(sql, params_from_iter(params.iter().map(to_duckdb_value)))
    }

    fn query(&self, sql: &str, params: &[SqlParam]) -> Result<QueryFrame, Self::Error> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows_result = stmt.query(params_from_iter(params.iter().map(to_duckdb_value)))?;

        // Column count is probed per row; `Rows` holds a mutable borrow on
        // the statement, so names are read after it is dropped.
        let mut rows = Vec::new();
        while let Some(row) = rows_result.next()? {
            let mut values = Vec::new();
            for i in 0_usize.. {
                match row.get_ref(i) {
                    Ok(value) => values.push(duckdb_value_to_cell(Value::from(value))),
                    Err(_) => break,
                }
            }
            rows.push(values);
        }
        drop(rows_result);

        let columns: Vec<String> = stmt.column_names().iter().map(ToString::to_string).collect();
        debug!(rows = rows.len(), columns = columns.len(), "DuckDB query materialized");

        Ok(QueryFrame::new(columns, rows))
    }

    fn execute_batch(&self, sql: &str) -> Result<(), Self::Error> {
        self.conn.execute_batch(sql)
    }

    fn begin_transaction(&self) -> Result<(), Self::Error> {
        self.conn.execute_batch("BEGIN TRANSACTION")?;
        self.in_transaction.set(true);
        Ok(())
    }

    fn commit(&self) -> Result<(), Self::Error> {
        self.end_transaction("COMMIT")
    }

    fn rollback(&self) -> Result<(), Self::Error> {
        self.end_transaction("ROLLBACK")
    }

    /// Only transactions opened with `begin_transaction` are seen here
    fn is_autocommit(&self) -> bool {
        !self.in_transaction.get()
    }

    fn engine_version(&self) -> Result<String, Self::Error> {
        let version: String = self
            .conn
            .query_row("SELECT version()", [], |row| row.get(0))?;
        Ok(format!("DuckDB {version}"))
    }
}

fn to_duckdb_value(param: &SqlParam) -> Value {
    match param {
        SqlParam::Null => Value::Null,
        SqlParam::Boolean(b) => Value::Boolean(*b),
        SqlParam::Integer(i) => Value::BigInt(*i),
        SqlParam::Double(d) => Value::Double(*d),
        SqlParam::Text(s) => Value::Text(s.clone()),
        SqlParam::Blob(b) => Value::Blob(b.clone()),
    }
}

/// Convert a DuckDB value to a `CellValue`.
///
/// Temporal and nested values become text in DuckDB's own `VARCHAR` format.
fn duckdb_value_to_cell(value: Value) -> CellValue {
    scalar_cell(&value).unwrap_or_else(|| CellValue::Text(render_value(&value)))
}

fn scalar_cell(value: &Value) -> Option<CellValue> {
    let cell = match value {
        Value::Null => CellValue::Null,
        Value::Boolean(b) => CellValue::Boolean(*b),
        Value::TinyInt(i) => CellValue::Integer((*i).into()),
        Value::SmallInt(i) => CellValue::Integer((*i).into()),
        Value::Int(i) => CellValue::Integer((*i).into()),
        Value::BigInt(i) => CellValue::Integer(*i),
        Value::HugeInt(i) => {
            i64::try_from(*i).map_or_else(|_| CellValue::Text(i.to_string()), CellValue::Integer)
        },
        Value::UTinyInt(i) => CellValue::Integer((*i).into()),
        Value::USmallInt(i) => CellValue::Integer((*i).into()),
        Value::UInt(i) => CellValue::Integer((*i).into()),
        Value::UBigInt(i) => i64::try_from(*i).map_or(CellValue::UInteger(*i), CellValue::Integer),
        Value::Float(f) => CellValue::Double((*f).into()),
        Value::Double(f) => CellValue::Double(*f),
        Value::Decimal(d) => CellValue::Text(d.to_string()),
        Value::Text(s) | Value::Enum(s) => CellValue::Text(s.clone()),
        Value::Blob(b) => CellValue::Blob(b.clone()),
        _ => return None,
    };
    Some(cell)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Date32(days) => render_date(*days),
        Value::Timestamp(unit, t) => render_timestamp(*unit, *t),
        Value::Time64(unit, t) => render_time(*unit, *t),
        Value::Interval { months, days, nanos } => render_interval(*months, *days, *nanos),
        Value::List(items) | Value::Array(items) => {
            let items: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", items.join(", "))
        },
        Value::Struct(fields) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|(name, field)| format!("'{name}': {}", render_value(field)))
                .collect();
            format!("{{{}}}", fields.join(", "))
        },
        Value::Map(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(key, entry)| format!("{}={}", render_value(key), render_value(entry)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        },
        Value::Union(inner) => render_value(inner),
        other => scalar_cell(other).map_or_else(|| format!("{other:?}"), |cell| cell.to_string()),
    }
}

fn to_nanos(unit: TimeUnit, value: i64) -> i64 {
    match unit {
        TimeUnit::Second => value.saturating_mul(NANOS_PER_SECOND),
        TimeUnit::Millisecond => value.saturating_mul(1_000_000),
        TimeUnit::Microsecond => value.saturating_mul(1_000),
        TimeUnit::Nanosecond => value,
    }
}

fn render_date(days: i32) -> String {
    DateTime::from_timestamp(i64::from(days) * 86_400, 0)
        .map_or_else(|| days.to_string(), |dt| dt.date_naive().to_string())
}

fn render_timestamp(unit: TimeUnit, value: i64) -> String {
    let timestamp: Option<NaiveDateTime> = match unit {
        TimeUnit::Second => DateTime::from_timestamp(value, 0),
        TimeUnit::Millisecond => DateTime::from_timestamp_millis(value),
        TimeUnit::Microsecond => DateTime::from_timestamp_micros(value),
        TimeUnit::Nanosecond => Some(DateTime::from_timestamp_nanos(value)),
    }
    .map(|dt| dt.naive_utc());
    timestamp.map_or_else(|| value.to_string(), |ts| ts.to_string())
}

fn render_time(unit: TimeUnit, value: i64) -> String {
    let nanos = to_nanos(unit, value);
    let secs = u32::try_from(nanos.div_euclid(NANOS_PER_SECOND)).ok();
    let frac = u32::try_from(nanos.rem_euclid(NANOS_PER_SECOND)).ok();
    secs.zip(frac)
        .and_then(|(secs, frac)| NaiveTime::from_num_seconds_from_midnight_opt(secs, frac))
        .map_or_else(|| value.to_string(), |time| time.to_string())
}

fn render_interval(months: i32, days: i32, nanos: i64) -> String {
    fn unit(n: i32, name: &str) -> String {
        if n.abs() == 1 {
            format!("{n} {name}")
        } else {
            format!("{n} {name}s")
        }
    }

    let mut parts = Vec::new();
    let (years, months) = (months / 12, months % 12);
    if years != 0 {
        parts.push(unit(years, "year"));
    }
    if months != 0 {
        parts.push(unit(months, "month"));
    }
    if days != 0 {
        parts.push(unit(days, "day"));
    }
    if nanos != 0 || parts.is_empty() {
        let sign = if nanos < 0 { "-" } else { "" };
        let total_secs = nanos.unsigned_abs() / 1_000_000_000;
        let frac_micros = (nanos.unsigned_abs() % 1_000_000_000) / 1_000;
        let (h, m, s) = (total_secs / 3600, (total_secs / 60) % 60, total_secs % 60);
        if frac_micros == 0 {
            parts.push(format!("{sign}{h:02}:{m:02}:{s:02}"));
        } else {
            parts.push(format!("{sign}{h:02}:{m:02}:{s:02}.{frac_micros:06}"));
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bread_crumbs() -> DuckDbConnection {
        let conn = DuckDbConnection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE bread_crumbs (id INTEGER PRIMARY KEY, location VARCHAR, tastiness INTEGER);
             INSERT INTO bread_crumbs VALUES (1, 'Park Bench', 8), (2, 'Sidewalk', 5), (3, 'Pond Edge', 9);",
        )
        .unwrap();
        conn
    }

    #[test]
    fn open_in_memory() {
        let conn = DuckDbConnection::open_in_memory().unwrap();
        assert_eq!(conn.path(), ":memory:");
    }

    #[test]
    fn open_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("goose.duckdb");
        let conn = DuckDbConnection::open(path.to_str().unwrap()).unwrap();
        conn.execute("CREATE TABLE t (x INTEGER)", &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn query_materializes_rows_and_columns() {
        let conn = bread_crumbs();
        let frame = conn
            .query("SELECT * FROM bread_crumbs ORDER BY tastiness DESC", &[])
            .unwrap();

        assert_eq!(frame.columns(), ["id", "location", "tastiness"]);
        assert_eq!(frame.row_count(), 3);
        assert_eq!(frame.get(0, "location"), Some(&CellValue::Text("Pond Edge".into())));
        assert_eq!(frame.get(2, "tastiness"), Some(&CellValue::Integer(5)));
    }

    #[test]
    fn empty_result_keeps_columns() {
        let conn = bread_crumbs();
        let frame = conn
            .query("SELECT location FROM bread_crumbs WHERE tastiness > 100", &[])
            .unwrap();
        assert!(frame.is_empty());
        assert_eq!(frame.columns(), ["location"]);
    }

    #[test]
    fn parameters_are_bound() {
        let conn = bread_crumbs();
        let inserted = conn
            .execute(
                "INSERT INTO bread_crumbs VALUES (?, ?, ?)",
                &[4.into(), "Duck Pond".into(), SqlParam::Null],
            )
            .unwrap();
        assert_eq!(inserted, 1);

        let frame = conn
            .query(
                "SELECT location, tastiness FROM bread_crumbs WHERE id = ?",
                &[4.into()],
            )
            .unwrap();
        assert_eq!(frame.get(0, "location"), Some(&CellValue::Text("Duck Pond".into())));
        assert_eq!(frame.get(0, "tastiness"), Some(&CellValue::Null));
    }

    #[test]
    fn aggregates_fit_in_integers() {
        let conn = bread_crumbs();
        let frame = conn
            .query("SELECT SUM(tastiness) AS total FROM bread_crumbs", &[])
            .unwrap();
        assert_eq!(frame.get(0, "total").and_then(CellValue::as_i64), Some(22));
    }

    #[test]
    fn missing_table_is_a_catalog_error() {
        let conn = DuckDbConnection::open_in_memory().unwrap();
        let err = conn.query("SELECT * FROM nowhere", &[]).unwrap_err();
        assert!(err.to_string().contains("nowhere"), "got: {err}");
    }

    #[test]
    fn rolled_back_insert_is_discarded() {
        let conn = bread_crumbs();
        conn.begin_transaction().unwrap();
        conn.execute("DELETE FROM bread_crumbs", &[]).unwrap();
        conn.rollback().unwrap();

        let frame = conn.query("SELECT * FROM bread_crumbs", &[]).unwrap();
        assert_eq!(frame.row_count(), 3);
    }

    #[test]
    fn transaction_toggles_autocommit() {
        let conn = bread_crumbs();
        assert!(conn.is_autocommit());

        conn.begin_transaction().unwrap();
        assert!(!conn.is_autocommit());
        conn.rollback().unwrap();
        assert!(conn.is_autocommit());

        conn.begin_transaction().unwrap();
        assert!(!conn.is_autocommit());
        conn.commit().unwrap();
        assert!(conn.is_autocommit());
    }

    #[test]
    fn failed_commit_leaves_autocommit_on() {
        let conn = bread_crumbs();
        assert!(conn.commit().is_err());
        assert!(conn.is_autocommit());
    }

    #[test]
    fn temporal_values_render_as_text() {
        let conn = DuckDbConnection::open_in_memory().unwrap();
        let frame = conn
            .query(
                "SELECT DATE '2024-01-01' AS d,
                        TIMESTAMP '2024-01-01 10:00:00' AS ts,
                        TIME '12:34:56' AS t,
                        INTERVAL 1 HOUR AS i,
                        INTERVAL 14 MONTH AS m",
                &[],
            )
            .unwrap();

        assert_eq!(frame.get(0, "d"), Some(&CellValue::Text("2024-01-01".into())));
        assert_eq!(frame.get(0, "ts"), Some(&CellValue::Text("2024-01-01 10:00:00".into())));
        assert_eq!(frame.get(0, "t"), Some(&CellValue::Text("12:34:56".into())));
        assert_eq!(frame.get(0, "i"), Some(&CellValue::Text("01:00:00".into())));
        assert_eq!(frame.get(0, "m"), Some(&CellValue::Text("1 year 2 months".into())));

        let json = frame.to_json_records();
        assert_eq!(json[0]["d"], "2024-01-01");
        assert_eq!(json[0]["ts"], "2024-01-01 10:00:00");
    }

    #[test]
    fn nested_values_render_on_one_line() {
        let conn = DuckDbConnection::open_in_memory().unwrap();
        let frame = conn
            .query("SELECT [1, 2] AS l, {'a': 1, 'b': 'x'} AS s", &[])
            .unwrap();

        assert_eq!(frame.get(0, "l"), Some(&CellValue::Text("[1, 2]".into())));
        let s = frame.get(0, "s").and_then(CellValue::as_str).unwrap();
        assert!(s.starts_with('{') && s.contains("'a': 1"), "got: {s}");
        assert_eq!(frame.to_string().lines().count(), 3);
    }

    #[test]
    fn engine_version_names_duckdb() {
        let conn = DuckDbConnection::open_in_memory().unwrap();
        assert!(conn.engine_version().unwrap().starts_with("DuckDB "));
    }
}
