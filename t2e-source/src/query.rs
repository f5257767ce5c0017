use table2enum_manifest::SourceSettings;

/// The table and the two columns to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub table: String,
    pub id_column: String,
    pub description_column: String,
}

impl TableQuery {
    pub fn new(
        table: impl Into<String>,
        id_column: impl Into<String>,
        description_column: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            id_column: id_column.into(),
            description_column: description_column.into(),
        }
    }

    /// The `SELECT` statement for this query.
    ///
    /// Identifiers are always quoted, so they are matched case-sensitively.
    /// A dotted table name is read as `schema.table`.
    ///
    /// ```
    /// use table2enum_source::TableQuery;
    ///
    /// let query = TableQuery::new("public.city", "id", "name");
    /// assert_eq!(
    ///     query.sql(),
    ///     r#"SELECT "id"::bigint, "name"::text FROM "public"."city""#
    /// );
    /// ```
    pub fn sql(&self) -> String {
        let table = self
            .table
            .split('.')
            .map(quote_ident)
            .collect::<Vec<_>>()
            .join(".");

        format!(
            "SELECT {}::bigint, {}::text FROM {}",
            quote_ident(&self.id_column),
            quote_ident(&self.description_column),
            table
        )
    }
}

impl From<&SourceSettings> for TableQuery {
    fn from(settings: &SourceSettings) -> Self {
        Self::new(
            &settings.table,
            &settings.id_column,
            &settings.description_column,
        )
    }
}

/// Quote a SQL identifier, doubling embedded quotes.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
