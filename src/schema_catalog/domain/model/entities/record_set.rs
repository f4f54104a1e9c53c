/// Rows of a table rendered as text, columns in schema order. `None` is SQL NULL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RecordSet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
