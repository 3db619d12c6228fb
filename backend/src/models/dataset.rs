//! In-memory CSV dataset and text column selection.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use super::checksum::calculate_checksum;
use crate::error::{AnalysisError, AnalysisResult};

/// Column names tried, in order, when looking for the free-text column.
pub const TEXT_COLUMN_CANDIDATES: [&str; 5] =
    ["text", "tweet", "message", "content", "description"];

/// Cell values treated as missing, matching the defaults of common dataframe readers.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns `true` when a cell value counts as missing.
pub fn is_missing(value: &str) -> bool {
    MISSING_MARKERS.contains(&value)
}

/// A header entry that survived de-duplication.
#[derive(Debug, Clone)]
struct Column {
    name: String,
    /// Position of the field in each raw record
    position: usize,
}

/// One non-missing value of the selected text column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRow {
    /// 1-based data row number in the uploaded file
    pub row: usize,
    pub text: String,
}

/// A parsed CSV upload.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<Column>,
    records: Vec<csv::StringRecord>,
    checksum: String,
}

impl Dataset {
    /// Parse a CSV upload with a header row.
    ///
    /// Records may be shorter or longer than the header; absent cells read as
    /// missing. Repeated column names keep only their first occurrence.
    pub fn from_csv_bytes(bytes: &[u8]) -> AnalysisResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(AnalysisError::EmptyDataset(
                "the file has no header row".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .filter(|(_, name)| seen.insert(name.to_string()))
            .map(|(position, name)| Column {
                name: name.to_string(),
                position,
            })
            .collect();

        let records = reader.records().collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Parsed CSV with {} columns ({} after de-duplication) and {} rows",
            headers.len(),
            columns.len(),
            records.len()
        );

        Ok(Self {
            columns,
            records,
            checksum: calculate_checksum(bytes),
        })
    }

    /// Column names in file order, without duplicates.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of data rows, including rows whose text is missing.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// SHA-256 of the raw upload.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Pick the column holding the free text.
    ///
    /// The first of [`TEXT_COLUMN_CANDIDATES`] present wins; otherwise the
    /// first column is used.
    pub fn select_text_column(&self) -> &str {
        TEXT_COLUMN_CANDIDATES
            .iter()
            .find_map(|candidate| self.columns.iter().find(|c| c.name == *candidate))
            .or_else(|| self.columns.first())
            .map(|c| c.name.as_str())
            .unwrap_or_default()
    }

    /// Non-missing values of the selected text column, in file order.
    ///
    /// Row numbers are those of the original file, so rows dropped for
    /// missing text leave gaps.
    pub fn text_rows(&self) -> Vec<TextRow> {
        let name = self.select_text_column();
        let Some(column) = self.columns.iter().find(|c| c.name == name) else {
            return Vec::new();
        };

        self.records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let value = record.get(column.position)?;
                if is_missing(value) {
                    return None;
                }
                Some(TextRow {
                    row: index + 1,
                    text: value.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(csv: &str) -> Dataset {
        Dataset::from_csv_bytes(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_selects_text_column_regardless_of_order() {
        let ds = dataset("description,message,text\na,b,c\n");
        assert_eq!(ds.select_text_column(), "text");
    }

    #[test]
    fn test_candidate_priority() {
        let ds = dataset("id,content,tweet\n1,a,b\n");
        assert_eq!(ds.select_text_column(), "tweet");

        let ds = dataset("id,description,content\n1,a,b\n");
        assert_eq!(ds.select_text_column(), "content");
    }

    #[test]
    fn test_falls_back_to_first_column() {
        let ds = dataset("review,score\ngreat,5\n");
        assert_eq!(ds.select_text_column(), "review");
    }

    #[test]
    fn test_candidate_match_is_case_sensitive() {
        let ds = dataset("id,Text\n1,hello\n");
        assert_eq!(ds.select_text_column(), "id");
    }

    #[test]
    fn test_duplicate_columns_keep_first() {
        let ds = dataset("text,text,id\nfirst,second,1\n");
        assert_eq!(ds.column_names(), vec!["text", "id"]);
        let rows = ds.text_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "first");
    }

    #[test]
    fn test_missing_values_dropped_and_rows_not_renumbered() {
        let ds = dataset("id,text\n1,hello\n2,\n3,NaN\n4,world\n5\n");
        let rows = ds.text_rows();
        assert_eq!(ds.row_count(), 5);
        assert_eq!(
            rows,
            vec![
                TextRow {
                    row: 1,
                    text: "hello".to_string(),
                },
                TextRow {
                    row: 4,
                    text: "world".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_every_missing_marker_is_dropped() {
        let markers = [
            "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
            "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
        ];
        assert_eq!(markers.len(), MISSING_MARKERS.len());
        for marker in markers {
            assert!(is_missing(marker), "{marker:?} should be missing");
            let ds = dataset(&format!("id,text\n1,\"{marker}\"\n2,kept\n"));
            let rows = ds.text_rows();
            assert_eq!(rows.len(), 1, "{marker:?}");
            assert_eq!(rows[0].row, 2);
        }
    }

    #[test]
    fn test_near_miss_markers_are_kept() {
        for value in ["none", "Null", "NONE", "Nan", "na", " ", " NA", "N/A ", "0", "-"] {
            assert!(!is_missing(value), "{value:?} should be kept");
            let ds = dataset(&format!("text\n\"{value}\"\n"));
            assert_eq!(
                ds.text_rows(),
                vec![TextRow {
                    row: 1,
                    text: value.to_string(),
                }],
                "{value:?}"
            );
        }
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let ds = dataset("text\n\"slow, rude support\"\n");
        assert_eq!(ds.text_rows()[0].text, "slow, rude support");
    }

    #[test]
    fn test_empty_input_is_error() {
        let err = Dataset::from_csv_bytes(b"").unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyDataset(_)));
    }

    #[test]
    fn test_header_only_has_no_rows() {
        let ds = dataset("text\n");
        assert_eq!(ds.row_count(), 0);
        assert!(ds.text_rows().is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let err = Dataset::from_csv_bytes(b"text\n\xff\xfe\n").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedCsv { .. }));
    }

    #[test]
    fn test_checksum_matches_raw_bytes() {
        let raw = "text\nhi\n";
        assert_eq!(dataset(raw).checksum(), calculate_checksum(raw.as_bytes()));
    }
}
