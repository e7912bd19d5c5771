pub mod catalog;
pub mod loader;
pub mod recommender;
pub mod tfidf;

pub use catalog::CatalogStore;
pub use recommender::{
    top_n_from_signed, Recommendation, RecommendationStatus, Recommender, ScoredProgram,
};
pub use tfidf::{TfIdfVectorizer, ENGLISH_STOP_WORDS};
