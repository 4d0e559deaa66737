use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("'{path}' is empty, expected at least a header row")]
    Empty { path: String },
    #[error("expected header '{expected}', found '{found}'")]
    WrongHeader { expected: String, found: String },
    #[error("row on line {line} has {found} fields, expected {expected}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("no column named '{name}'")]
    UnknownColumn { name: String },
    #[error("expected an integer, found '{value}' on line {line}")]
    BadInt { value: String, line: usize },
}

/// One data row of a table. `line` is the 1-based line in the source
/// file, used for diagnostics.
#[derive(Debug, Clone)]
pub struct Row {
    pub values: Vec<String>,
    pub line: usize,
}

impl Row {
    pub fn int(&self, idx: usize) -> Result<i64, RecordError> {
        let value = &self.values[idx];
        value.trim().parse().map_err(|_| RecordError::BadInt {
            value: value.clone(),
            line: self.line,
        })
    }
}

/// A CSV file parsed into a header plus typed-access rows. Fields may
/// be double-quoted; commas inside quotes do not split.
#[derive(Debug)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let path_str = path.as_ref().display().to_string();
        log::debug!("Reading table: {}", path_str);
        let file = File::open(&path).map_err(|source| RecordError::Io {
            path: path_str.clone(),
            source,
        })?;
        let table = Self::parse(BufReader::new(file), &path_str)?;
        Ok(table)
    }

    pub fn parse<R: BufRead>(reader: R, path: &str) -> Result<Self, RecordError> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| RecordError::Io {
                path: path.to_string(),
                source,
            })?;
            lines.push(line.trim_end_matches('\r').to_string());
        }

        // Trailing blank lines are common in hand-edited files.
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }

        let Some(header_line) = lines.first() else {
            return Err(RecordError::Empty {
                path: path.to_string(),
            });
        };
        let headers = split_line(header_line);
        let width = headers.len();

        let mut rows = Vec::with_capacity(lines.len().saturating_sub(1));
        for (i, line) in lines.iter().enumerate().skip(1) {
            let values = split_line(line);
            if values.len() != width {
                return Err(RecordError::FieldCount {
                    line: i + 1,
                    expected: width,
                    found: values.len(),
                });
            }
            rows.push(Row {
                values,
                line: i + 1,
            });
        }

        Ok(Self { headers, rows })
    }

    pub fn expect_headers(&self, expected: &[&str]) -> Result<(), RecordError> {
        if self.headers != expected {
            return Err(RecordError::WrongHeader {
                expected: expected.join(","),
                found: self.headers.join(","),
            });
        }
        Ok(())
    }

    pub fn column(&self, name: &str) -> Result<usize, RecordError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| RecordError::UnknownColumn {
                name: name.to_string(),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Splits a CSV line on commas, honouring double-quoted fields.
/// A doubled quote inside a quoted field is an escaped quote.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(content: &str) -> Result<Table, RecordError> {
        Table::parse(content.as_bytes(), "test.csv")
    }

    #[test]
    fn parses_plain_rows() {
        let t = table("car,move\nA,1\nB,-2\n").unwrap();
        assert_eq!(t.headers, vec!["car", "move"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0].values, vec!["A", "1"]);
        assert_eq!(t.rows[0].line, 2);
        assert_eq!(t.rows[1].int(1).unwrap(), -2);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let t = table("net,wires\n\"(1,2)\",\"(1,3)(1,4)\"\n").unwrap();
        assert_eq!(t.rows[0].values, vec!["(1,2)", "(1,3)(1,4)"]);
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(matches!(table(""), Err(RecordError::Empty { .. })));
    }

    #[test]
    fn header_mismatch_is_reported() {
        let t = table("foo,bar\n").unwrap();
        let err = t.expect_headers(&["car", "move"]).unwrap_err();
        assert!(matches!(err, RecordError::WrongHeader { .. }));
    }

    #[test]
    fn bad_int_carries_line_number() {
        let t = table("car,move\nA,up\n").unwrap();
        match t.rows[0].int(1) {
            Err(RecordError::BadInt { value, line }) => {
                assert_eq!(value, "up");
                assert_eq!(line, 2);
            }
            other => panic!("expected BadInt, got {:?}", other),
        }
    }

    #[test]
    fn ragged_row_is_an_error() {
        assert!(matches!(
            table("a,b\n1,2,3\n"),
            Err(RecordError::FieldCount { line: 2, .. })
        ));
    }
}
