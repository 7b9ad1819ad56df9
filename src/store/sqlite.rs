//! SQLite-backed [`StoreClient`] built on SeaORM.
//!
//! SQLite has no collection types, so this client adapts the column-store
//! dialect the repositories speak:
//! - a `?` after `IN` bound to a list expands to `(?, ?, ...)`
//! - any other list parameter is stored as a JSON array in a TEXT column
//! - selects are cut to one page, like a paging driver returning its first page

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as OrmDatabase, DatabaseConnection, DbBackend, QueryResult, Statement,
    Value as SqlValue,
};

use super::{QueryOptions, Row, RowSet, StoreClient, StoreError, StoreResult, Value};
use crate::config::StoreConfig;
use crate::constants::{CATEGORY_TABLE, PLACE_TABLE};

/// Store client over a SQLite database.
#[derive(Clone)]
pub struct SqliteStore {
    conn: DatabaseConnection,
    page_size: usize,
}

impl SqliteStore {
    /// Open the database described by `config`.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let mut options = ConnectOptions::new(config.database_url.clone());

        // Every pooled connection to an in-memory database sees its own empty database
        let max_connections = if is_memory_url(&config.database_url) {
            1
        } else {
            config.max_connections
        };
        options
            .max_connections(max_connections)
            .min_connections(1)
            .sqlx_logging(false);

        let conn = OrmDatabase::connect(options).await?;
        Ok(Self::from_connection(conn, config.page_size))
    }

    /// Wrap an already open connection.
    pub fn from_connection(conn: DatabaseConnection, page_size: usize) -> Self {
        Self { conn, page_size }
    }

    /// Create the Category and Place tables if they are missing.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        let category_table = format!(
            r"
            CREATE TABLE IF NOT EXISTS {CATEGORY_TABLE} (
                id TEXT PRIMARY KEY,
                name TEXT,
                icon TEXT
            )
            "
        );
        let place_table = format!(
            r"
            CREATE TABLE IF NOT EXISTS {PLACE_TABLE} (
                id TEXT PRIMARY KEY,
                name TEXT,
                description TEXT,
                url TEXT,
                categories TEXT NOT NULL DEFAULT '[]',
                tags TEXT NOT NULL DEFAULT '[]',
                locationLatitude REAL,
                locationLongitude REAL,
                locationAccurate BOOLEAN NOT NULL DEFAULT 0,
                locationStreetAddress TEXT,
                locationCrossStreet TEXT,
                locationCity TEXT,
                locationState TEXT,
                locationPostalCode TEXT,
                locationCountry TEXT,
                priceLevel INTEGER,
                priceMessage TEXT
            )
            "
        );

        self.conn.execute_unprepared(&category_table).await?;
        self.conn.execute_unprepared(&place_table).await?;
        Ok(())
    }

    fn effective_page_size(&self, options: QueryOptions) -> usize {
        options
            .fetch_size
            .filter(|size| *size > 0)
            .map(|size| size as usize)
            .unwrap_or(self.page_size)
    }
}

#[async_trait]
impl StoreClient for SqliteStore {
    async fn execute(&self, query: &str, params: Vec<Value>, options: QueryOptions) -> StoreResult<RowSet> {
        let (sql, values) = expand_placeholders(query, &params)?;
        debug!("execute: {} ({} params)", sql.trim(), values.len());
        let statement = Statement::from_sql_and_values(DbBackend::Sqlite, sql, values);

        if !is_select(query) {
            self.conn.execute(statement).await?;
            return Ok(RowSet::default());
        }

        let results = self.conn.query_all(statement).await?;
        let page_size = self.effective_page_size(options);
        if results.len() > page_size {
            debug!("returning first page: {} of {} rows", page_size, results.len());
        }

        let rows = results
            .into_iter()
            .take(page_size)
            .map(|result| row_from_result(&result))
            .collect::<StoreResult<Vec<_>>>()?;
        Ok(RowSet::new(rows))
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn is_select(query: &str) -> bool {
    query.trim_start().get(..6).is_some_and(|head| head.eq_ignore_ascii_case("select"))
}

/// Decode one column by its SQLite storage class: INTEGER, REAL, then TEXT.
fn column_value(result: &QueryResult, column: &str) -> StoreResult<Value> {
    if let Ok(int) = result.try_get_by::<Option<i64>, _>(column) {
        return Ok(int.map(Value::Int).unwrap_or(Value::Null));
    }
    if let Ok(Some(double)) = result.try_get_by::<Option<f64>, _>(column) {
        return Ok(Value::Double(double));
    }
    match result.try_get_by::<Option<String>, _>(column) {
        Ok(text) => Ok(text.map(Value::Text).unwrap_or(Value::Null)),
        Err(e) => Err(StoreError::Decode(format!("column '{column}': {e}"))),
    }
}

fn row_from_result(result: &QueryResult) -> StoreResult<Row> {
    let mut row = Row::new();
    for column in result.column_names() {
        let value = column_value(result, &column)?;
        row.insert(column, value);
    }
    Ok(row)
}

fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::String(None),
        Value::Bool(b) => (*b).into(),
        Value::Int(i) => (*i).into(),
        Value::Double(d) => (*d).into(),
        Value::Text(s) => s.clone().into(),
        Value::List(_) => value.to_json().to_string().into(),
    }
}

/// Whether the text written so far ends with the `IN` keyword.
fn follows_in_keyword(sql: &str) -> bool {
    let trimmed = sql.trim_end();
    let Some(split) = trimmed.len().checked_sub(2) else {
        return false;
    };
    if !trimmed.get(split..).is_some_and(|tail| tail.eq_ignore_ascii_case("in")) {
        return false;
    }
    !trimmed[..split]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Rewrite `query` for SQLite and convert `params` to bound values.
pub(crate) fn expand_placeholders(query: &str, params: &[Value]) -> StoreResult<(String, Vec<SqlValue>)> {
    let mut sql = String::with_capacity(query.len());
    let mut values = Vec::with_capacity(params.len());
    let mut remaining = params.iter();
    let mut in_literal = false;

    for c in query.chars() {
        if c == '\'' {
            in_literal = !in_literal;
        }
        if c != '?' || in_literal {
            sql.push(c);
            continue;
        }

        let param = remaining
            .next()
            .ok_or_else(|| StoreError::Query(format!("too few parameters for: {query}")))?;

        match param {
            Value::List(items) if follows_in_keyword(&sql) => {
                if items.is_empty() {
                    sql.push_str("(NULL)");
                } else {
                    let placeholders = vec!["?"; items.len()].join(", ");
                    sql.push('(');
                    sql.push_str(&placeholders);
                    sql.push(')');
                    values.extend(items.iter().map(to_sql_value));
                }
            }
            _ => {
                sql.push('?');
                values.push(to_sql_value(param));
            }
        }
    }

    if remaining.next().is_some() {
        return Err(StoreError::Query(format!(
            "{} parameters given but fewer placeholders in: {query}",
            params.len()
        )));
    }

    Ok((sql, values))
}
