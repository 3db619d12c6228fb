//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the dataset model
//! and the HTTP handlers. Services run the text pipeline over a dataset,
//! aggregate its results and publish the frequency chart.

pub mod analysis;

pub mod chart;

pub mod frequency;

pub use analysis::{analyze_csv, analyze_dataset, predict, process_row};
pub use chart::{render_bar_chart, ChartStore};
pub use frequency::{token_frequencies, top_tokens, TOP_TOKEN_LIMIT};
