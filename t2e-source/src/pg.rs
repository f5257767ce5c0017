use postgres::{Client, NoTls};
use table2enum_ir::Row;
use tracing::debug;

use crate::{Error, Result, RowSource, TableQuery};

/// Reads rows from PostgreSQL over an unencrypted connection.
pub struct PostgresSource {
    client: Client,
}

impl PostgresSource {
    /// Connect using a libpq-style or URL connection string.
    pub fn connect(connection_string: &str) -> Result<Self> {
        let client = Client::connect(connection_string, NoTls)?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl RowSource for PostgresSource {
    fn fetch_rows(&mut self, query: &TableQuery) -> Result<Vec<Row>> {
        let sql = query.sql();
        debug!(%sql, "querying lookup table");

        let mut rows = Vec::new();
        for (index, row) in self.client.query(sql.as_str(), &[])?.iter().enumerate() {
            let id: Option<i64> = row.try_get(0)?;
            let id = id.ok_or(Error::NullId { index })?;
            let description: Option<String> = row.try_get(1)?;
            let description = description.ok_or(Error::NullDescription { id })?;
            rows.push(Row::new(id, description));
        }

        debug!(rows = rows.len(), "fetched rows");
        Ok(rows)
    }
}
