//! # CSV Sentiment Backend
//!
//! Sentiment analysis for uploaded customer-feedback datasets.
//!
//! The crate reads a CSV upload, picks its free-text column, cleans and
//! tokenizes every row, labels each row Positive, Negative or Neutral from a
//! lexicon polarity score, and charts the most frequent words. An axum server
//! exposes the pipeline as an upload form and a small JSON API.
//!
//! ## Architecture
//!
//! - [`api`]: result types shared by services and handlers
//! - [`models`]: CSV parsing and text column selection
//! - [`nlp`]: text cleaning, tokenizing and sentiment polarity
//! - [`services`]: the analysis pipeline, token frequencies and chart storage
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod nlp;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
