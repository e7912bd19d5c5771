use std::collections::{BTreeMap, BTreeSet};

/// Common English words dropped when stop-word filtering is enabled
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most",
    "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "out", "over", "own", "same", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "them", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
];

/// Splits text into lowercase alphanumeric tokens
///
/// Every run of non-alphanumeric characters is a boundary. When `stop_words`
/// is given, tokens found in it are dropped.
pub fn tokenize(text: &str, stop_words: Option<&[&str]>) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .filter(|s| stop_words.map_or(true, |words| !words.contains(s)))
        .map(String::from)
        .collect()
}

/// Sparse vector: `(column, weight)` pairs sorted by column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds a vector from entries in any order; zero weights are dropped
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(col, _)| col);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean length
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product, merging the two sorted entry lists
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_col, a_w) = self.entries[i];
            let (b_col, b_w) = other.entries[j];
            match a_col.cmp(&b_col) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn normalized(self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            return self;
        }
        Self {
            entries: self
                .entries
                .into_iter()
                .map(|(col, w)| (col, w / norm))
                .collect(),
        }
    }
}

/// Cosine of the angle between two vectors, in `[0, 1]` for TF-IDF weights
///
/// Zero when either vector has no weight.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(0.0, 1.0)
}

/// Fitted TF-IDF representation of a corpus, one row per document
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    vocabulary: BTreeMap<String, usize>,
    rows: Vec<SparseVector>,
}

impl TfIdfMatrix {
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    #[cfg(test)]
    fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }
}

/// TF-IDF vectorizer with raw term counts and smoothed IDF
///
/// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, so a term present in every
/// document still carries weight and no division by zero is possible.
/// Rows are L2-normalized.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    stop_words: Option<&'static [&'static str]>,
}

impl TfIdfVectorizer {
    /// Vectorizer without stop-word filtering
    pub fn new() -> Self {
        Self::default()
    }

    /// Vectorizer that drops `stop_words` before counting
    pub fn with_stop_words(stop_words: &'static [&'static str]) -> Self {
        Self {
            stop_words: Some(stop_words),
        }
    }

    /// Builds vocabulary and IDF weights over `documents` and returns their
    /// vectors in input order
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> TfIdfMatrix {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(doc.as_ref(), self.stop_words))
            .collect();

        // Lexicographic column order keeps the output independent of hashing
        let terms: BTreeSet<&String> = tokenized.iter().flatten().collect();
        let vocabulary: BTreeMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<usize> = tokens.iter().map(|t| vocabulary[t]).collect();
            for col in unique {
                df[col] += 1;
            }
        }

        let n = tokenized.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
                for token in tokens {
                    *counts.entry(vocabulary[token]).or_insert(0) += 1;
                }
                let entries = counts
                    .into_iter()
                    .map(|(col, tf)| (col, tf as f64 * idf[col]))
                    .collect();
                SparseVector::from_entries(entries).normalized()
            })
            .collect();

        TfIdfMatrix { vocabulary, rows }
    }
}
