//! Text processing: cleaning, tokenizing and sentiment polarity.

pub mod cleaning;
pub mod sentiment;
pub mod tokenizer;

pub use cleaning::clean_text;
pub use sentiment::{classify, polarity, PolarityLexicon, Sentiment};
pub use tokenizer::{is_stop_word, tokenize};
