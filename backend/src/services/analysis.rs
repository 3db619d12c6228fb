use log::{info, warn};

use super::frequency::{token_frequencies, top_tokens, TOP_TOKEN_LIMIT};
use crate::api::{AnalysisId, AnalysisReport, ProcessedRow, Sentiment, SentimentCounts};
use crate::error::AnalysisResult;
use crate::models::{Dataset, TextRow};
use crate::nlp::{classify, clean_text, tokenize};

/// Run cleaning, tokenizing and classification on a single text value.
///
/// Tokens come from the cleaned text; the sentiment is taken from the raw
/// text so punctuation and casing do not change the lexicon lookups.
pub fn process_row(row: TextRow) -> ProcessedRow {
    let cleaned_text = clean_text(&row.text);
    let tokens = tokenize(&cleaned_text);
    let sentiment = classify(&row.text);
    ProcessedRow {
        row: row.row,
        text: row.text,
        cleaned_text,
        tokens,
        sentiment,
    }
}

/// Analyse every non-missing value of the dataset's text column.
pub fn analyze_dataset(dataset: &Dataset) -> AnalysisReport {
    let analysis_id = AnalysisId::new();
    let text_column = dataset.select_text_column().to_string();

    let rows: Vec<ProcessedRow> = dataset.text_rows().into_iter().map(process_row).collect();
    if rows.is_empty() {
        warn!(
            "Analysis {}: column '{}' has no text values",
            analysis_id, text_column
        );
    }

    let sentiment_counts: SentimentCounts = rows.iter().map(|r| r.sentiment).collect();
    let top_tokens = top_tokens(
        token_frequencies(rows.iter().map(|r| r.tokens.as_slice())),
        TOP_TOKEN_LIMIT,
    );

    info!(
        "Analysis {}: {} of {} rows from column '{}' (+{} / -{} / ={})",
        analysis_id,
        rows.len(),
        dataset.row_count(),
        text_column,
        sentiment_counts.positive,
        sentiment_counts.negative,
        sentiment_counts.neutral
    );

    AnalysisReport {
        analysis_id,
        dataset_checksum: dataset.checksum().to_string(),
        text_column,
        total_rows: dataset.row_count(),
        rows,
        sentiment_counts,
        top_tokens,
    }
}

/// Parse raw CSV bytes and analyse them.
pub fn analyze_csv(bytes: &[u8]) -> AnalysisResult<AnalysisReport> {
    let dataset = Dataset::from_csv_bytes(bytes)?;
    Ok(analyze_dataset(&dataset))
}

/// Classify a single free-text input.
pub fn predict(text: &str) -> Sentiment {
    classify(text)
}
