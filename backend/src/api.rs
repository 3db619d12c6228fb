//! Public API surface for the analysis backend.
//!
//! This file consolidates the result types produced by the analysis
//! pipeline. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::TextRow;
pub use crate::nlp::Sentiment;

use serde::{Deserialize, Serialize};

/// Analysis identifier, unique per processed upload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub uuid::Uuid);

impl AnalysisId {
    pub fn new() -> Self {
        AnalysisId(uuid::Uuid::new_v4())
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One analysed row of the text column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRow {
    /// 1-based data row number in the uploaded file
    pub row: usize,
    pub text: String,
    pub cleaned_text: String,
    pub tokens: Vec<String>,
    pub sentiment: Sentiment,
}

/// Occurrences of a single token across the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub token: String,
    pub count: usize,
}

/// Number of rows per sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

impl FromIterator<Sentiment> for SentimentCounts {
    fn from_iter<I: IntoIterator<Item = Sentiment>>(iter: I) -> Self {
        let mut counts = SentimentCounts::default();
        for sentiment in iter {
            counts.record(sentiment);
        }
        counts
    }
}

/// Complete result of analysing one uploaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: AnalysisId,
    /// SHA-256 of the uploaded bytes
    pub dataset_checksum: String,
    /// Name of the column the text was read from
    pub text_column: String,
    /// Data rows in the file, including rows with missing text
    pub total_rows: usize,
    pub rows: Vec<ProcessedRow>,
    pub sentiment_counts: SentimentCounts,
    /// Most frequent tokens, descending by count
    pub top_tokens: Vec<TokenCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_counts_from_iter() {
        let counts: SentimentCounts = [
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Positive,
            Sentiment::Neutral,
        ]
        .into_iter()
        .collect();
        assert_eq!(counts.positive, 2);
        assert_eq!(counts.negative, 1);
        assert_eq!(counts.neutral, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_analysis_ids_are_unique() {
        assert_ne!(AnalysisId::new(), AnalysisId::new());
    }

    #[test]
    fn test_processed_row_json_shape() {
        let row = ProcessedRow {
            row: 1,
            text: "Great!".to_string(),
            cleaned_text: "great".to_string(),
            tokens: vec!["great".to_string()],
            sentiment: Sentiment::Positive,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["sentiment"], "Positive");
        assert_eq!(json["tokens"][0], "great");
    }
}
