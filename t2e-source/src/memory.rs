use table2enum_ir::Row;

use crate::{Result, RowSource, TableQuery};

/// A row source backed by a fixed list of rows.
///
/// Records every query it receives.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<Row>,
    queries: Vec<TableQuery>,
}

impl MemorySource {
    pub fn new(rows: impl IntoIterator<Item = impl Into<Row>>) -> Self {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
            queries: Vec::new(),
        }
    }

    /// Queries seen so far, oldest first.
    pub fn queries(&self) -> &[TableQuery] {
        &self.queries
    }
}

impl RowSource for MemorySource {
    fn fetch_rows(&mut self, query: &TableQuery) -> Result<Vec<Row>> {
        self.queries.push(query.clone());
        Ok(self.rows.clone())
    }
}
