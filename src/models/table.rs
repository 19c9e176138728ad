//! In-Memory Table Model
//!
//! A table is an ordered collection of named columns, each either numeric or
//! text. Tables are built once from embedded CSV text and never mutated.

use crate::error::{AppError, Result};

/// Values of a single column. Type is inferred at load time: a column is
/// numeric iff every cell parses as `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

/// A named, typed column.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub values: ColumnValues,
}

impl Column {
    pub fn len(&self) -> usize {
        match &self.values {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.values, ColumnValues::Numeric(_))
    }
}

/// An immutable table with named columns in header order.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Parse CSV text with a header row into a table.
    ///
    /// Column order follows the header. Each column is typed numeric if every
    /// cell in it parses as `f64`, otherwise text. Rows whose width differs
    /// from the header are a fatal parse error; the embedded data is static,
    /// so there is no recovery path.
    pub fn from_csv(text: &str) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in reader.records() {
            let record = record?;
            for (i, field) in record.iter().enumerate() {
                cells[i].push(field.trim().to_string());
            }
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, raw)| Column {
                values: infer_values(&raw),
                name,
            })
            .collect();

        Ok(Table { columns })
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| AppError::NotFound(format!("column '{}'", name)))
    }

    /// Numeric values of a column, or an error if the column is text-typed.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        match &self.column(name)?.values {
            ColumnValues::Numeric(v) => Ok(v),
            ColumnValues::Text(_) => Err(AppError::InvalidInput(format!(
                "column '{}' is not numeric",
                name
            ))),
        }
    }

    /// Text values of a column, or an error if the column is numeric-typed.
    pub fn text(&self, name: &str) -> Result<&[String]> {
        match &self.column(name)?.values {
            ColumnValues::Text(v) => Ok(v),
            ColumnValues::Numeric(_) => Err(AppError::InvalidInput(format!(
                "column '{}' is not text",
                name
            ))),
        }
    }

    /// All numeric columns, in header order.
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_numeric()).collect()
    }
}

fn infer_values(raw: &[String]) -> ColumnValues {
    if raw.is_empty() {
        return ColumnValues::Text(Vec::new());
    }
    let parsed: Option<Vec<f64>> = raw.iter().map(|s| s.parse::<f64>().ok()).collect();
    match parsed {
        Some(numbers) => ColumnValues::Numeric(numbers),
        None => ColumnValues::Text(raw.to_vec()),
    }
}
