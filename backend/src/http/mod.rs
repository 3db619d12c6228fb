//! HTTP server module for the sentiment backend.
//!
//! This module provides an axum-based HTTP server exposing the upload form,
//! the results page and a small JSON API on top of the service layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Multipart upload and JSON parsing                      │
//! │  - HTML rendering, static chart serving                   │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Text pipeline and aggregation                          │
//! │  - Chart publishing                                       │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Models and NLP (models/, nlp/)                           │
//! │  - CSV parsing and column selection                       │
//! │  - Cleaning, tokenizing, polarity                         │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
