// Manual sort-order allocation for duplicate-record operations.

use sqlx::{PgPool, Row};

use crate::database::manager::DatabaseError;
use crate::filter::{FilterError, validate_identifier};

/// Next free manual sort-order value for `table`.
///
/// Looks at the single row with the maximum non-null "order". An empty
/// table (or one where every order is null) yields 0, the first slot;
/// otherwise max + 1, so a duplicated record always sorts after every
/// existing one. A failed query propagates — never a silent 0.
///
/// The read and the caller's subsequent insert are two store calls with no
/// transaction around them; two concurrent duplications can allocate the
/// same value. Order is a display hint, not a uniqueness key, so a
/// collision degrades sort stability only.
pub async fn next_order_value(pool: &PgPool, table: &str) -> Result<i64, DatabaseError> {
    let table = validate_identifier(table)
        .map_err(|e: FilterError| DatabaseError::QueryError(e.to_string()))?;
    let sql = format!(
        "SELECT \"order\" FROM \"{}\" WHERE \"order\" IS NOT NULL ORDER BY \"order\" DESC LIMIT 1",
        table
    );

    let row = sqlx::query(&sql).fetch_optional(pool).await?;
    match row {
        Some(row) => {
            let current_max: i64 = row.try_get("order")?;
            Ok(current_max + 1)
        }
        None => Ok(0),
    }
}
