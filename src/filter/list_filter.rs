// Parameterized list-query builder.
//
// Accumulates WHERE fragments with $n placeholders; identifiers are
// validated before they reach SQL text, values only ever travel as bound
// parameters. Predicates are appended, never replaced, so callers can
// stack search, translation, and visibility filters on one builder.

use serde_json::Value;

use super::error::FilterError;
use crate::listing::params::SortDir;

#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<Value>,
}

pub struct ListFilter {
    table: String,
    conditions: Vec<String>,
    params: Vec<Value>,
    order: Vec<(String, SortDir)>,
    range: Option<(i64, i64)>,
}

impl ListFilter {
    pub fn new(table: impl Into<String>) -> Result<Self, FilterError> {
        let table = table.into();
        if !is_valid_identifier(&table) {
            return Err(FilterError::InvalidTableName(table));
        }
        Ok(Self {
            table,
            conditions: vec![],
            params: vec![],
            order: vec![],
            range: None,
        })
    }

    /// Equality on a single column. A null value becomes IS NULL.
    pub fn eq(&mut self, column: &str, value: Value) -> Result<&mut Self, FilterError> {
        let column = validate_identifier(column)?;
        if value.is_null() {
            self.conditions.push(format!("\"{}\" IS NULL", column));
        } else {
            let placeholder = self.param(value);
            self.conditions.push(format!("\"{}\" = {}", column, placeholder));
        }
        Ok(self)
    }

    /// Case-insensitive substring match across several columns, OR-joined.
    /// The pattern is bound once and the placeholder reused per column.
    /// An empty pattern or empty column list appends nothing.
    pub fn search(&mut self, columns: &[&str], pattern: &str) -> Result<&mut Self, FilterError> {
        if pattern.is_empty() || columns.is_empty() {
            return Ok(self);
        }
        for column in columns {
            validate_identifier(column)?;
        }
        let placeholder = self.param(Value::String(pattern.to_string()));
        let clauses: Vec<String> = columns
            .iter()
            .map(|column| format!("\"{}\" ILIKE {}", column, placeholder))
            .collect();
        self.conditions.push(format!("({})", clauses.join(" OR ")));
        Ok(self)
    }

    /// The column holds no usable text: NULL and empty string are the same
    /// absence for bilingual free-text fields.
    pub fn missing(&mut self, column: &str) -> Result<&mut Self, FilterError> {
        let column = validate_identifier(column)?;
        self.conditions
            .push(format!("(\"{0}\" IS NULL OR \"{0}\" = '')", column));
        Ok(self)
    }

    /// The column holds usable text. Two conjunctive predicates, the
    /// negation of `missing`.
    pub fn present(&mut self, column: &str) -> Result<&mut Self, FilterError> {
        let column = validate_identifier(column)?;
        self.conditions.push(format!("\"{}\" IS NOT NULL", column));
        self.conditions.push(format!("\"{}\" <> ''", column));
        Ok(self)
    }

    pub fn order_by(&mut self, column: &str, dir: SortDir) -> Result<&mut Self, FilterError> {
        let column = validate_identifier(column)?;
        self.order.push((column.to_string(), dir));
        Ok(self)
    }

    /// Zero-based inclusive row range, the shape `read_pagination_params`
    /// produces. Rendered as LIMIT/OFFSET.
    pub fn range(&mut self, from: i64, to: i64) -> &mut Self {
        let from = from.max(0);
        let to = to.max(from);
        self.range = Some((from, to));
        self
    }

    pub fn to_select_sql(&self) -> SqlResult {
        let mut inner = format!("SELECT * FROM \"{}\"", self.table);
        if let Some(where_clause) = self.where_clause() {
            inner.push_str(" WHERE ");
            inner.push_str(&where_clause);
        }
        if let Some(order_clause) = self.order_clause() {
            inner.push_str(" ");
            inner.push_str(&order_clause);
        }
        if let Some((from, to)) = self.range {
            let limit = to.saturating_sub(from).saturating_add(1);
            inner.push_str(&format!(" LIMIT {} OFFSET {}", limit, from));
        }
        SqlResult {
            query: format!("SELECT row_to_json(t) AS row FROM ({}) t", inner),
            params: self.params.clone(),
        }
    }

    pub fn to_count_sql(&self) -> SqlResult {
        let query = match self.where_clause() {
            Some(where_clause) => format!(
                "SELECT COUNT(*) AS count FROM \"{}\" WHERE {}",
                self.table, where_clause
            ),
            None => format!("SELECT COUNT(*) AS count FROM \"{}\"", self.table),
        };
        SqlResult {
            query,
            params: self.params.clone(),
        }
    }

    fn where_clause(&self) -> Option<String> {
        if self.conditions.is_empty() {
            None
        } else {
            Some(self.conditions.join(" AND "))
        }
    }

    fn order_clause(&self) -> Option<String> {
        if self.order.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .order
            .iter()
            .map(|(column, dir)| format!("\"{}\" {}", column, dir.as_sql()))
            .collect();
        Some(format!("ORDER BY {}", parts.join(", ")))
    }

    fn param(&mut self, value: Value) -> String {
        self.params.push(value);
        format!("${}", self.params.len())
    }
}

/// Identifier check shared by every place a table or column name is
/// formatted into SQL text.
pub fn validate_identifier(name: &str) -> Result<&str, FilterError> {
    if is_valid_identifier(name) {
        Ok(name)
    } else {
        Err(FilterError::InvalidColumn(name.to_string()))
    }
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_malformed_identifiers() {
        assert!(ListFilter::new("skills; DROP TABLE skills").is_err());
        assert!(ListFilter::new("1skills").is_err());
        let mut filter = ListFilter::new("skills").unwrap();
        assert!(filter.eq("name_en\" OR 1=1 --", json!("x")).is_err());
    }

    #[test]
    fn search_binds_one_param_for_all_columns() {
        let mut filter = ListFilter::new("skills").unwrap();
        filter.search(&["name_en", "name_fr"], "%rust%").unwrap();
        let sql = filter.to_select_sql();
        assert!(sql
            .query
            .contains("(\"name_en\" ILIKE $1 OR \"name_fr\" ILIKE $1)"));
        assert_eq!(sql.params, vec![json!("%rust%")]);
    }

    #[test]
    fn empty_search_pattern_appends_nothing() {
        let mut filter = ListFilter::new("skills").unwrap();
        filter.search(&["name_en"], "").unwrap();
        assert!(!filter.to_select_sql().query.contains("WHERE"));
    }

    #[test]
    fn range_renders_limit_offset() {
        let mut filter = ListFilter::new("projects").unwrap();
        filter.range(40, 59);
        let sql = filter.to_select_sql();
        assert!(sql.query.contains("LIMIT 20 OFFSET 40"), "{}", sql.query);
    }

    #[test]
    fn count_sql_ignores_order_and_range() {
        let mut filter = ListFilter::new("projects").unwrap();
        filter
            .eq("status", json!("approved"))
            .unwrap()
            .order_by("order", SortDir::Desc)
            .unwrap()
            .range(0, 9);
        let sql = filter.to_count_sql();
        assert_eq!(
            sql.query,
            "SELECT COUNT(*) AS count FROM \"projects\" WHERE \"status\" = $1"
        );
    }

    #[test]
    fn predicates_accumulate_in_order() {
        let mut filter = ListFilter::new("skills").unwrap();
        filter.missing("name_fr").unwrap();
        filter.eq("category", json!("backend")).unwrap();
        let sql = filter.to_select_sql();
        assert!(sql.query.contains(
            "(\"name_fr\" IS NULL OR \"name_fr\" = '') AND \"category\" = $1"
        ));
    }
}
