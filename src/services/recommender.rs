use std::fmt;

use serde::Serialize;

use crate::models::Program;
use crate::services::catalog::CatalogStore;
use crate::services::tfidf::{cosine_similarity, TfIdfVectorizer};

/// Why a recommendation run produced the programs it did
///
/// The two empty states are regular outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    /// Candidates were found and ranked (the list may still be empty when
    /// `top_n` is zero)
    Ok,
    /// The catalog holds no programs
    NoProgramsAvailable,
    /// No program's category matches the preferred categories
    NoMatchingPrograms,
}

impl RecommendationStatus {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            RecommendationStatus::Ok => "ok",
            RecommendationStatus::NoProgramsAvailable => "no_programs_available",
            RecommendationStatus::NoMatchingPrograms => "no_matching_programs",
        }
    }

    /// Human-readable description
    pub fn message(&self) -> &'static str {
        match self {
            RecommendationStatus::Ok => "Recommendations generated.",
            RecommendationStatus::NoProgramsAvailable => "No programs available.",
            RecommendationStatus::NoMatchingPrograms => {
                "No programs found for the selected categories."
            }
        }
    }
}

impl fmt::Display for RecommendationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Scores are rounded to this many parts per unit before ranking, so
/// mathematically equal similarities compare equal regardless of the order
/// in which their floating-point sums ran
const SCORE_SCALE: f64 = 1e12;

fn quantize_score(score: f64) -> f64 {
    (score * SCORE_SCALE).round() / SCORE_SCALE
}

/// Converts a caller-supplied count to `top_n`; zero or negative means none
pub fn top_n_from_signed(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// A catalog program together with its similarity to the query
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProgram<'a> {
    pub program: &'a Program,
    /// Cosine similarity in `[0, 1]`
    pub score: f64,
    /// Position of the program in the catalog
    pub catalog_index: usize,
}

/// Result of a recommendation run
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    pub status: RecommendationStatus,
    /// Best match first
    pub programs: Vec<ScoredProgram<'a>>,
}

impl<'a> Recommendation<'a> {
    fn empty(status: RecommendationStatus) -> Self {
        Self {
            status,
            programs: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Recommended programs in rank order
    pub fn iter_programs(&self) -> impl Iterator<Item = &'a Program> + '_ {
        self.programs.iter().map(|scored| scored.program)
    }
}

/// Ranks catalog programs against a set of preferred categories
///
/// Programs whose category matches one of the preferences become
/// candidates. Each candidate's category and notes, plus a query document
/// built from the preferences, are vectorized together with TF-IDF; the
/// candidates are then ordered by cosine similarity to the query.
pub struct Recommender<'a> {
    catalog: &'a CatalogStore,
    vectorizer: TfIdfVectorizer,
}

impl<'a> Recommender<'a> {
    /// Creates a recommender over `catalog` with the default vectorizer
    pub fn new(catalog: &'a CatalogStore) -> Self {
        Self {
            catalog,
            vectorizer: TfIdfVectorizer::new(),
        }
    }

    /// Replaces the vectorizer (e.g. to enable stop-word filtering)
    pub fn with_vectorizer(mut self, vectorizer: TfIdfVectorizer) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    /// Returns at most `top_n` programs matching `preferred_categories`,
    /// best first
    ///
    /// Equal scores keep catalog order. Duplicate preferences are kept in
    /// the query document, so a repeated category weighs more.
    pub fn generate_recommendations<S: AsRef<str>>(
        &self,
        preferred_categories: &[S],
        top_n: usize,
    ) -> Recommendation<'a> {
        let catalog: &'a CatalogStore = self.catalog;

        if catalog.is_empty() {
            tracing::info!("No programs available");
            return Recommendation::empty(RecommendationStatus::NoProgramsAvailable);
        }

        let preferred: Vec<&str> = preferred_categories.iter().map(AsRef::as_ref).collect();

        // 1. Filter to programs in one of the preferred categories
        let candidates: Vec<(usize, &'a Program)> = catalog
            .programs()
            .iter()
            .enumerate()
            .filter(|(_, p)| preferred.iter().any(|c| p.matches_category(c)))
            .collect();

        tracing::debug!(
            categories = ?preferred,
            matches = ?candidates.iter().map(|(_, p)| p.name.as_str()).collect::<Vec<_>>(),
            "Matching programs for categories"
        );

        if candidates.is_empty() {
            tracing::info!(
                categories = ?preferred,
                "No programs found for the selected categories"
            );
            return Recommendation::empty(RecommendationStatus::NoMatchingPrograms);
        }

        if top_n == 0 {
            return Recommendation::empty(RecommendationStatus::Ok);
        }

        // 2. Vectorize candidates and the query together so they share IDF
        let mut corpus: Vec<String> = candidates.iter().map(|(_, p)| p.document_text()).collect();
        corpus.push(preferred.join(" "));
        let matrix = self.vectorizer.fit_transform(&corpus);

        let Some((query, documents)) = matrix.rows().split_last() else {
            return Recommendation::empty(RecommendationStatus::Ok);
        };

        // 3. Score, rank and truncate
        let mut scored: Vec<ScoredProgram<'a>> = candidates
            .iter()
            .zip(documents)
            .map(|(&(catalog_index, program), document)| ScoredProgram {
                program,
                score: quantize_score(cosine_similarity(query, document)),
                catalog_index,
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.catalog_index.cmp(&b.catalog_index))
        });
        scored.truncate(top_n);

        tracing::info!(
            candidates = candidates.len(),
            vocabulary = matrix.vocabulary_len(),
            returned = scored.len(),
            "Recommendations generated"
        );

        Recommendation {
            status: RecommendationStatus::Ok,
            programs: scored,
        }
    }
}
