//! Polarity scoring.
//!
//! The classifier only ever talks to [`SentimentAnalyzer`]; the lexicon
//! analyzer below is the bundled default and can be swapped for a model.

/// Maps free text to a polarity score in `[-1.0, 1.0]`.
pub trait SentimentAnalyzer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

const LEXICON: &[(&str, f64)] = &[
    // positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("calm", 0.3),
    ("cheerful", 0.6),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("excellent", 1.0),
    ("excited", 0.4),
    ("fantastic", 0.4),
    ("fine", 0.4),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("grateful", 0.6),
    ("great", 0.8),
    ("happy", 0.8),
    ("hopeful", 0.5),
    ("joy", 0.8),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("peaceful", 0.5),
    ("perfect", 1.0),
    ("proud", 0.8),
    ("relaxed", 0.3),
    ("wonderful", 1.0),
    // negative
    ("afraid", -0.6),
    ("angry", -0.5),
    ("annoyed", -0.6),
    ("anxious", -0.5),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("depressed", -0.7),
    ("exhausted", -0.4),
    ("frustrated", -0.7),
    ("hate", -0.8),
    ("hated", -0.9),
    ("horrible", -1.0),
    ("hurt", -0.5),
    ("lonely", -0.5),
    ("miserable", -1.0),
    ("sad", -0.5),
    ("scared", -0.6),
    ("sick", -0.7),
    ("stressed", -0.5),
    ("terrible", -1.0),
    ("tired", -0.4),
    ("upset", -0.6),
    ("worried", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("totally", 1.2),
    ("very", 1.3),
];

const NEGATORS: &[&str] = &["no", "not", "never", "nothing", "hardly"];

/// A negated sentiment word keeps half its strength with flipped sign.
const NEGATION_FACTOR: f64 = -0.5;

const CLAUSE_BREAKS: &[char] = &['.', '!', '?', ',', ';', ':', '\n'];

/// Word-list analyzer: averages the polarity of every sentiment-bearing word.
///
/// Intensifiers and negators scale the next sentiment word in the same clause.
/// Text without any sentiment words scores 0.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> f64 {
        let normalized = text.to_lowercase().replace('\u{2019}', "'");

        let mut scores = Vec::new();
        for clause in normalized.split(CLAUSE_BREAKS) {
            let mut modifier = 1.0;
            for word in words(clause) {
                if is_negator(word) {
                    modifier *= NEGATION_FACTOR;
                } else if let Some(factor) = lookup(INTENSIFIERS, word) {
                    modifier *= factor;
                } else if let Some(score) = lookup(LEXICON, word) {
                    scores.push((score * modifier).clamp(-1.0, 1.0));
                    modifier = 1.0;
                }
            }
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

fn words(clause: &str) -> impl Iterator<Item = &str> {
    clause
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}
