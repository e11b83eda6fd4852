// Table-scoped store client for listable entities.
//
// Records travel as raw JSON maps (row_to_json on the way out), so one
// repository serves every entity in the registry. Column names reaching
// SQL text are validated identifiers; values are always bound parameters.

use serde_json::{Map, Value};
use sqlx::{postgres::PgArguments, PgPool, Row};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::entities::EntityDef;
use crate::filter::{validate_identifier, ListFilter};

pub struct EntityRepository {
    table: &'static str,
    pool: PgPool,
}

impl EntityRepository {
    pub fn new(def: &EntityDef, pool: PgPool) -> Self {
        Self {
            table: def.table,
            pool,
        }
    }

    /// Run a list query built by the caller. The filter carries the WHERE,
    /// ORDER and range; this only executes and unpacks rows.
    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<Map<String, Value>>, DatabaseError> {
        let sql = filter.to_select_sql();
        let rows = bind_params(sqlx::query(&sql.query), &sql.params)
            .fetch_all(&self.pool)
            .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(row_object(&row)?);
        }
        Ok(records)
    }

    pub async fn count(&self, filter: &ListFilter) -> Result<i64, DatabaseError> {
        let sql = filter.to_count_sql();
        let row = bind_params(sqlx::query(&sql.query), &sql.params)
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = row.try_get("count")?;
        Ok(count)
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<Map<String, Value>>, DatabaseError> {
        let sql = format!(
            "SELECT row_to_json(t) AS row FROM (SELECT * FROM \"{}\" WHERE id = $1) t",
            self.table
        );
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(|r| row_object(&r)).transpose()
    }

    pub async fn insert(
        &self,
        fields: &Map<String, Value>,
    ) -> Result<Map<String, Value>, DatabaseError> {
        let columns = validated_columns(fields)?;
        let column_list: Vec<String> = columns.iter().map(|c| format!("\"{}\"", c)).collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${}", i)).collect();
        let sql = format!(
            "INSERT INTO \"{0}\" ({1}) VALUES ({2}) RETURNING row_to_json(\"{0}\".*) AS row",
            self.table,
            column_list.join(", "),
            placeholders.join(", ")
        );

        let mut query = sqlx::query(&sql);
        for column in &columns {
            query = bind_value(query, &fields[*column]);
        }
        let row = query.fetch_one(&self.pool).await?;
        row_object(&row)
    }

    pub async fn update(
        &self,
        id: Uuid,
        fields: &Map<String, Value>,
    ) -> Result<Option<Map<String, Value>>, DatabaseError> {
        let columns = validated_columns(fields)?;
        let mut assignments: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| format!("\"{}\" = ${}", c, i + 1))
            .collect();
        assignments.push("\"updated_at\" = now()".to_string());
        let sql = format!(
            "UPDATE \"{0}\" SET {1} WHERE id = ${2} RETURNING row_to_json(\"{0}\".*) AS row",
            self.table,
            assignments.join(", "),
            columns.len() + 1
        );

        let mut query = sqlx::query(&sql);
        for column in &columns {
            query = bind_value(query, &fields[*column]);
        }
        let row = query.bind(id).fetch_optional(&self.pool).await?;
        row.map(|r| row_object(&r)).transpose()
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let sql = format!("DELETE FROM \"{}\" WHERE id = $1", self.table);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// One store-level delete over the whole id set. Returns the number of
    /// rows the store actually matched, which may be less than `ids.len()`.
    pub async fn delete_ids(&self, ids: &[Uuid]) -> Result<u64, DatabaseError> {
        let sql = format!("DELETE FROM \"{}\" WHERE id = ANY($1)", self.table);
        let result = sqlx::query(&sql).bind(ids).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// One store-level status transition over the whole id set.
    pub async fn set_status(&self, status: &str, ids: &[Uuid]) -> Result<u64, DatabaseError> {
        let sql = format!(
            "UPDATE \"{}\" SET \"status\" = $1, \"updated_at\" = now() WHERE id = ANY($2)",
            self.table
        );
        let result = sqlx::query(&sql)
            .bind(status)
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn validated_columns(fields: &Map<String, Value>) -> Result<Vec<&str>, DatabaseError> {
    if fields.is_empty() {
        return Err(DatabaseError::QueryError(
            "no columns to write".to_string(),
        ));
    }
    let mut columns = Vec::with_capacity(fields.len());
    for key in fields.keys() {
        let column =
            validate_identifier(key).map_err(|e| DatabaseError::QueryError(e.to_string()))?;
        columns.push(column);
    }
    Ok(columns)
}

fn row_object(row: &sqlx::postgres::PgRow) -> Result<Map<String, Value>, DatabaseError> {
    let value: Value = row.try_get("row")?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DatabaseError::QueryError(format!(
            "expected JSON object row, got {}",
            other
        ))),
    }
}

fn bind_params<'q>(
    mut query: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    params: &'q [Value],
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    for param in params {
        query = bind_value(query, param);
    }
    query
}

fn bind_value<'q>(
    query: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    value: &'q Value,
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    match value {
        Value::Null => {
            let none: Option<String> = None;
            query.bind(none)
        }
        Value::Bool(b) => query.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                query.bind(i)
            } else if let Some(u) = n.as_u64() {
                // Postgres has no u64; cast down if it fits
                query.bind(u as i64)
            } else if let Some(f) = n.as_f64() {
                query.bind(f)
            } else {
                query.bind(n.to_string())
            }
        }
        Value::String(s) => query.bind(s),
        // Arrays and objects land in JSONB columns
        Value::Array(_) | Value::Object(_) => query.bind(value.clone()),
    }
}
