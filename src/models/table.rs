use super::cell::CellValue;

/// One source row: header → value, in source column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<(String, CellValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by decoders and tests.
    pub fn with<V: Into<CellValue>>(mut self, header: &str, value: V) -> Self {
        self.push(header, value);
        self
    }

    pub fn push<V: Into<CellValue>>(&mut self, header: &str, value: V) {
        self.cells.push((header.to_string(), value.into()));
    }

    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(h, _)| h.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|(_, v)| v.is_empty())
    }
}

/// In-memory snapshot of the first sheet of a decoded file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// File name (or any label) the rows were read from.
    pub source: String,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(source: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            source: source.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of all headers, in first-seen order.
    pub fn headers(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for row in &self.rows {
            for h in row.headers() {
                if !out.iter().any(|o| o == h) {
                    out.push(h.to_string());
                }
            }
        }
        out
    }
}
