use serde::Serialize;

/// One row of the lookup table, in query order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: i64,
    pub description: String,
}

impl Row {
    pub fn new(id: i64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}

impl<S: Into<String>> From<(i64, S)> for Row {
    fn from((id, description): (i64, S)) -> Self {
        Self::new(id, description)
    }
}
