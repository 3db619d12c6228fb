//! Lexicon-based sentiment polarity.
//!
//! A text's polarity is the mean score of the lexicon words it contains, each
//! adjusted by a preceding intensifier or negation. Classification only looks
//! at the sign of that mean.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Multiplier applied to a word score when a negation precedes it.
const NEGATION_FACTOR: f64 = -0.5;

/// How many tokens back a negation still applies.
const NEGATION_WINDOW: usize = 2;

/// Apostrophes dropped from words, so `wasn't` and `wasn’t` both read `wasnt`.
const APOSTROPHES: [char; 3] = ['\'', '\u{2018}', '\u{2019}'];

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("amazing", 0.6),
    ("appreciate", 0.5),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("clean", 0.37),
    ("clear", 0.1),
    ("comfortable", 0.4),
    ("convenient", 0.5),
    ("cool", 0.35),
    ("courteous", 0.5),
    ("easy", 0.43),
    ("efficient", 0.5),
    ("enjoy", 0.4),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("fast", 0.2),
    ("fine", 0.42),
    ("friendly", 0.38),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.6),
    ("impressed", 0.7),
    ("impressive", 1.0),
    ("kind", 0.6),
    ("like", 0.2),
    ("love", 0.5),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("pleased", 0.5),
    ("polite", 0.5),
    ("positive", 0.23),
    ("prompt", 0.4),
    ("quick", 0.33),
    ("recommend", 0.5),
    ("reliable", 0.5),
    ("resolved", 0.4),
    ("satisfied", 0.5),
    ("smooth", 0.4),
    ("solved", 0.4),
    ("superb", 1.0),
    ("thank", 0.4),
    ("thanks", 0.4),
    ("useful", 0.3),
    ("welcome", 0.8),
    ("wonderful", 1.0),
    ("worth", 0.3),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("broken", -0.4),
    ("confused", -0.4),
    ("confusing", -0.3),
    ("complaint", -0.4),
    ("delay", -0.3),
    ("delayed", -0.3),
    ("difficult", -0.5),
    ("dirty", -0.6),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("disgusting", -1.0),
    ("expensive", -0.5),
    ("fail", -0.5),
    ("failed", -0.5),
    ("frustrated", -0.7),
    ("frustrating", -0.4),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("ignored", -0.4),
    ("impossible", -0.67),
    ("late", -0.3),
    ("lost", -0.2),
    ("mad", -0.62),
    ("negative", -0.3),
    ("poor", -0.4),
    ("problem", -0.3),
    ("rude", -0.3),
    ("sad", -0.5),
    ("slow", -0.3),
    ("sorry", -0.5),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("unacceptable", -0.8),
    ("unfortunately", -0.5),
    ("unhappy", -0.6),
    ("unhelpful", -0.5),
    ("upset", -0.5),
    ("useless", -0.5),
    ("waste", -0.4),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nobody", "nothing", "cannot", "cant",
    "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "werent", "wont", "hardly", "barely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.8),
    ("completely", 1.6),
    ("extremely", 1.8),
    ("highly", 1.5),
    ("incredibly", 1.7),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("totally", 1.6),
    ("very", 1.3),
];

static DEFAULT_LEXICON: LazyLock<PolarityLexicon> = LazyLock::new(PolarityLexicon::new);

/// Sentiment label derived from the sign of a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Label a polarity score: above zero is positive, below zero negative,
    /// anything else (zero or NaN) neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word-level polarity lexicon.
#[derive(Debug, Clone)]
pub struct PolarityLexicon {
    /// Word to score mapping, scores in [-1, 1]
    words: HashMap<String, f64>,
    negations: Vec<String>,
    /// Word to multiplier mapping
    intensifiers: HashMap<String, f64>,
}

impl Default for PolarityLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityLexicon {
    /// Create a lexicon with the built-in English word list.
    pub fn new() -> Self {
        let words = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .map(|(word, score)| (word.to_string(), *score))
            .collect();
        let negations = NEGATIONS.iter().map(|w| w.to_string()).collect();
        let intensifiers = INTENSIFIERS
            .iter()
            .map(|(word, factor)| (word.to_string(), *factor))
            .collect();

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Add or replace a word score. The score is clamped to [-1, 1].
    pub fn with_word(mut self, word: &str, score: f64) -> Self {
        self.words.insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
        self
    }

    /// Get sentiment score for a word
    pub fn get_score(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check if a word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    /// Get intensifier multiplier
    pub fn get_intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(&word.to_lowercase()).copied()
    }

    /// Polarity of `text` in [-1, 1]; 0.0 when no lexicon word occurs.
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text
            .unicode_words()
            .map(|w| w.to_lowercase().replace(&APOSTROPHES[..], ""))
            .collect();

        let mut scores = Vec::new();
        // Position of the latest negation not yet applied to a scored word
        let mut pending_negation: Option<usize> = None;

        for (i, token) in tokens.iter().enumerate() {
            if self.is_negation(token) {
                pending_negation = Some(i);
                continue;
            }
            let Some(mut score) = self.get_score(token) else {
                continue;
            };

            if let Some(factor) = i
                .checked_sub(1)
                .and_then(|prev| self.get_intensifier(&tokens[prev]))
            {
                score = (score * factor).clamp(-1.0, 1.0);
            }

            if let Some(at) = pending_negation.take() {
                if i - at <= NEGATION_WINDOW {
                    score *= NEGATION_FACTOR;
                }
            }

            scores.push(score);
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }

    /// Classify `text` by the sign of its polarity.
    pub fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.polarity(text))
    }
}

/// Polarity of `text` using the built-in lexicon.
pub fn polarity(text: &str) -> f64 {
    DEFAULT_LEXICON.polarity(text)
}

/// Classify `text` using the built-in lexicon.
pub fn classify(text: &str) -> Sentiment {
    DEFAULT_LEXICON.classify(text)
}
