use super::property_value::PropertyValue;
use super::row_record::RowRecord;
use super::schema::Schema;

/// Tabular materialization of decoded rows.
///
/// One row per record, one named column per schema property, column
/// order deterministic (the schema's lexicographic iteration order).
/// Intended for bulk consumption by downstream analysis code; cells a
/// record does not carry are `Null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<PropertyValue>>,
}

impl DataTable {
    /// Build a table from decoded records, one column per schema
    /// property.
    pub fn from_records(schema: &Schema, records: &[RowRecord]) -> Self {
        let columns: Vec<String> = schema.names().map(str::to_string).collect();
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| {
                        record
                            .get(column)
                            .cloned()
                            .unwrap_or(PropertyValue::Null)
                    })
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[PropertyValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[PropertyValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell lookup by row index and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&PropertyValue> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }
}
