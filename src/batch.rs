use serde_json::Value;

/// An ordered collection of records sharing one column schema.
///
/// Columns are kept in insertion order and every row is a vector parallel to
/// the column list. Stages mutate a batch they exclusively own; none of them
/// reorders, drops, or duplicates rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Batch {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Append a row, padding with nulls when it is shorter than the schema.
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    pub fn value(&self, row: usize, column: usize) -> &Value {
        &self.rows[row][column]
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    pub fn set(&mut self, row: usize, column: usize, value: Value) {
        self.rows[row][column] = value;
    }

    /// Index of the named column, appending a null-filled column when absent.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(Value::Null);
        }
        self.columns.len() - 1
    }

    /// Rename a column. Missing source names are left alone, so applying a
    /// rename table twice is a no-op.
    pub fn rename_column(&mut self, from: &str, to: &str) {
        if let Some(idx) = self.column_index(from) {
            self.columns[idx] = to.to_string();
        }
    }

    /// Remove a column and its values from every row. Missing names are a no-op.
    pub fn drop_column(&mut self, name: &str) {
        if let Some(idx) = self.column_index(name) {
            self.columns.remove(idx);
            for row in &mut self.rows {
                row.remove(idx);
            }
        }
    }

    pub fn column_is_all_null(&self, column: usize) -> bool {
        self.rows.iter().all(|row| row[column].is_null())
    }
}

/// Render a cell the way it appears in composed text fields: nulls become
/// empty strings and whole numbers print without a trailing `.0`.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or(0.0);
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{}", f as i64)
                } else {
                    f.to_string()
                }
            }
        }
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Coerce a cell to a number, degrading anything unparseable to null.
pub fn value_to_number(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                Value::Number(i.into())
            } else if let Ok(f) = trimmed.parse::<f64>() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            } else {
                Value::Null
            }
        }
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_batch() -> Batch {
        let mut batch = Batch::new(vec!["a".to_string(), "b".to_string()]);
        batch.push_row(vec![json!(1), json!("x")]);
        batch.push_row(vec![json!(2)]);
        batch
    }

    #[test]
    fn test_push_row_pads_short_rows() {
        let batch = sample_batch();
        assert_eq!(batch.get(1, "b"), Some(&Value::Null));
    }

    #[test]
    fn test_rename_missing_column_is_noop() {
        let mut batch = sample_batch();
        batch.rename_column("zzz", "c");
        assert_eq!(batch.columns(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_drop_column_removes_values() {
        let mut batch = sample_batch();
        batch.drop_column("a");
        assert_eq!(batch.columns(), &["b".to_string()]);
        assert_eq!(batch.rows()[0], vec![json!("x")]);
    }

    #[test]
    fn test_ensure_column_null_fills_existing_rows() {
        let mut batch = sample_batch();
        let idx = batch.ensure_column("c");
        assert_eq!(idx, 2);
        assert!(batch.value(0, idx).is_null());
        // Re-ensuring returns the same index without growing the schema
        assert_eq!(batch.ensure_column("c"), 2);
        assert_eq!(batch.columns().len(), 3);
    }

    #[test]
    fn test_value_to_string_formats_whole_floats_as_integers() {
        assert_eq!(value_to_string(&json!(62704.0)), "62704");
        assert_eq!(value_to_string(&json!(3.5)), "3.5");
        assert_eq!(value_to_string(&Value::Null), "");
        assert_eq!(value_to_string(&json!("IL")), "IL");
    }

    #[test]
    fn test_value_to_number_degrades_garbage_to_null() {
        assert_eq!(value_to_number(&json!("42")), json!(42));
        assert_eq!(value_to_number(&json!("3.14")), json!(3.14));
        assert_eq!(value_to_number(&json!("N/A")), Value::Null);
        assert_eq!(value_to_number(&Value::Null), Value::Null);
    }
}
